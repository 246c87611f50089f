//! TOML config file loading and creation.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path, parse};
pub use paths::{config_path_in, default_config_path, write_default_config};
