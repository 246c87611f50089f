//! Configuration schema types for the video wall.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod logging;

pub use layout::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct VidwallConfig {
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidwall_common::types::LayoutMode;

    #[test]
    fn default_config_sections() {
        let config = VidwallConfig::default();
        assert_eq!(config.layout.mode, LayoutMode::Tetris);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: VidwallConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout.mode, LayoutMode::Tetris);
        assert!((config.layout.viewport_height - 1080.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sections_parse_independently() {
        let config: VidwallConfig = toml::from_str(
            r#"
[layout]
mode = "standard"

[logging]
level = "warn"
"#,
        )
        .unwrap();
        assert_eq!(config.layout.mode, LayoutMode::Standard);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!((config.layout.default_aspect_ratio - 16.0 / 9.0).abs() < f64::EPSILON);
    }
}
