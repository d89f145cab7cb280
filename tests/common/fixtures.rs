use millwork::RoomSpec;
use serde_json::{Value, json};

/// Project configuration as it would arrive from a config file, ADA included.
pub fn project_config_json() -> Value {
    json!({
        "SCALE_PLAN": 0.25,
        "COUNTER_HEIGHT": 36,
        "BASE_DEPTH": 24,
        "WALL_CAB_DEPTH": 12,
        "EDGE_RULE": "PVC_EDGE",
        "ADA": {
            "KNEE_CLEAR": "27\" H x 30\" W x 17\" D",
            "TOE_CLEAR": "9\" H x 6\" D",
            "COUNTER_RANGE": [28, 34],
            "CLEAR_WIDTHS": 30
        },
        "TOLERANCES": { "LENGTH_SUM": 0.125, "LENGTH_ROUNDING": 2 },
        "PDF": { "SIZE": "tabloid", "MARGINS": [0.5, 0.5, 0.5, 0.5] },
        "HW": { "DEFAULTS": { "HINGE": "BLUM-110", "PULL": "SS-128", "SLIDE": "BLUM-563" } },
        "CODE": { "BASIS": "ADA 2010" },
        "SCHEDULE": { "FORMAT": "on-sheet" }
    })
}

/// Same project without any ADA block.
pub fn config_without_ada_json() -> Value {
    let mut config = project_config_json();
    if let Some(map) = config.as_object_mut() {
        map.remove("ADA");
    }
    config
}

pub fn room(room_id: &str, total: f64, widths: &[f64], left: f64, right: f64) -> RoomSpec {
    RoomSpec::new(room_id, total, widths.to_vec(), "PLAM-WHT", "WD-MAPLE").with_fillers(left, right)
}

/// A room row as an upstream parser would hand it over.
pub fn room_json() -> Value {
    json!({
        "room_id": "LAB-201",
        "total_length_in": 114.0,
        "num_modules": 3,
        "module_widths": [36.0, 36.0, 36.0],
        "material_top": "EPOXY-BLK",
        "material_casework": "PLAM-GRY",
        "left_filler_in": 3.0,
        "right_filler_in": 3.0,
        "has_sink": true,
        "notes": "Sink in center module",
        "row_number": 2,
        "source_file": "rooms.csv"
    })
}

/// A mixed batch: two clean rooms, one short run, one duplicate id.
pub fn mixed_batch() -> Vec<RoomSpec> {
    vec![
        room("R101", 144.0, &[36.0, 30.0, 36.0, 42.0], 0.0, 0.0),
        room("R102", 114.0, &[36.0, 36.0, 36.0], 3.0, 3.0),
        room("R103", 150.0, &[36.0, 36.0, 36.0], 3.0, 3.0),
        room("R101", 96.0, &[48.0, 48.0], 0.0, 0.0),
    ]
}
