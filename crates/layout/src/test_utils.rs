use crate::{AdaConfig, MillworkConfig, RoomSpec};

/// Default configuration with the standard ADA block attached.
pub fn ada_config() -> MillworkConfig {
    MillworkConfig::default().with_ada(AdaConfig::standard())
}

/// A plain room with no fillers whose widths reconcile with `total`.
pub fn room(room_id: &str, total: f64, widths: &[f64]) -> RoomSpec {
    RoomSpec::new(room_id, total, widths.to_vec(), "PLAM-1", "WD-1")
}

/// Four-module galley run: 36 + 30 + 36 + 42 = 144.
pub fn galley_room() -> RoomSpec {
    room("R101", 144.0, &[36.0, 30.0, 36.0, 42.0])
}

/// Three 36" modules between 3" fillers: 108 + 3 + 3 = 114.
pub fn filler_room() -> RoomSpec {
    room("R102", 114.0, &[36.0, 36.0, 36.0]).with_fillers(3.0, 3.0)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
