pub mod fixtures;

use millwork::{LayoutResult, MillworkConfig, RoomSpec, compute_layout};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Lays out a room against a config given as JSON text.
pub fn layout_with_config_json(
    room: &RoomSpec,
    config_json: &str,
) -> Result<LayoutResult, Box<dyn std::error::Error>> {
    let config = MillworkConfig::load_json_str(config_json)?;
    Ok(compute_layout(room, &config))
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
