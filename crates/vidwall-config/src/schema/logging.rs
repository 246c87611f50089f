//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Tracing filter directive scoping this level to the vidwall crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "vidwall=trace",
            LogLevel::Debug => "vidwall=debug",
            LogLevel::Info => "vidwall=info",
            LogLevel::Warn => "vidwall=warn",
            LogLevel::Error => "vidwall=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
