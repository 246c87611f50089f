//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Video wall configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# Mode the wall opens in: "standard", "tetris" or "carousel".
mode = "tetris"
# default_aspect_ratio = 1.7777777777777777  # 0.1-10.0, for streams without a ratio
# viewport_width = 1920                      # 1-16384
# viewport_height = 1080                     # 1-16384

[logging]
# trace | debug | info | warn | error
level = "info"
"##
    .to_string()
}
