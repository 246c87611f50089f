//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = VidwallConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_aspect_ratio_too_small() {
    let mut config = VidwallConfig::default();
    config.layout.default_aspect_ratio = 0.05;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.default_aspect_ratio"));
}

#[test]
fn catches_aspect_ratio_nan() {
    let mut config = VidwallConfig::default();
    config.layout.default_aspect_ratio = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.default_aspect_ratio"));
}

#[test]
fn catches_zero_viewport() {
    let mut config = VidwallConfig::default();
    config.layout.viewport_width = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.viewport_width"));
}

#[test]
fn collects_every_error() {
    let mut config = VidwallConfig::default();
    config.layout.viewport_width = 0.0;
    config.layout.viewport_height = 20000.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.viewport_width"));
    assert!(err.contains("layout.viewport_height"));
    assert!(err.contains("; "));
}

#[test]
fn boundary_values_are_valid() {
    let mut config = VidwallConfig::default();
    config.layout.default_aspect_ratio = 0.1;
    config.layout.viewport_width = 16384.0;
    config.layout.viewport_height = 1.0;
    assert!(validate(&config).is_ok());
}
