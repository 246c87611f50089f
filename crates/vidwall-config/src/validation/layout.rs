//! Layout configuration validation (aspect ratio, viewport).

use crate::schema::VidwallConfig;

use super::helpers::validate_range_f64;

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &VidwallConfig) {
    validate_range_f64(
        errors,
        "layout.default_aspect_ratio",
        config.layout.default_aspect_ratio,
        0.1,
        10.0,
    );
    validate_range_f64(
        errors,
        "layout.viewport_width",
        config.layout.viewport_width,
        1.0,
        16384.0,
    );
    validate_range_f64(
        errors,
        "layout.viewport_height",
        config.layout.viewport_height,
        1.0,
        16384.0,
    );
}
