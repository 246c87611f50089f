//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;

#[cfg(test)]
mod tests;

use crate::schema::VidwallConfig;
use vidwall_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &VidwallConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
