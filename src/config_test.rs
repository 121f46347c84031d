use clap::Parser;

use super::*;

#[derive(Debug, Parser)]
struct Harness {
    #[command(flatten)]
    config: ViewerConfig,
}

#[test]
fn default_config_is_valid() {
    let config = ViewerConfig::default();
    assert_eq!(config.room_id, 1170);
    assert!((config.zoom - 10.0).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());
}

#[test]
fn flags_override_defaults() {
    let harness = Harness::try_parse_from([
        "mudmap",
        "--database-url",
        "sqlite::memory:",
        "--room-id",
        "42",
        "--zoom",
        "2.5",
        "--width",
        "100",
        "--height",
        "50",
    ])
    .unwrap();
    let config = harness.config;
    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.room_id, 42);
    assert!((config.zoom - 2.5).abs() < f64::EPSILON);
    assert!((config.width - 100.0).abs() < f64::EPSILON);
    assert!((config.height - 50.0).abs() < f64::EPSILON);
}

#[test]
fn zero_zoom_rejected() {
    let config = ViewerConfig { zoom: 0.0, ..ViewerConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::InvalidZoom(0.0)));
}

#[test]
fn negative_and_nan_zoom_rejected() {
    let negative = ViewerConfig { zoom: -1.0, ..ViewerConfig::default() };
    assert!(matches!(negative.validate(), Err(ConfigError::InvalidZoom(_))));

    let nan = ViewerConfig { zoom: f64::NAN, ..ViewerConfig::default() };
    assert!(matches!(nan.validate(), Err(ConfigError::InvalidZoom(_))));
}

#[test]
fn empty_viewport_rejected() {
    let config = ViewerConfig { width: 0.0, ..ViewerConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidViewport { .. })));
}
