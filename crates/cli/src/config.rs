//! Runtime configuration for the CLI
//!
//! # Environment Variables
//!
//! - `BMAKE_SHIM_LOG_FORMAT`: `pretty` (default) or `json`
//! - `RUST_LOG`: log filter directives (default: `bmake_shim=warn`)

use bmake_shim_core::AppError;
use std::str::FromStr;

pub const DEFAULT_LOG_FORMAT: &str = "pretty";
pub const DEFAULT_LOG_FILTER: &str = "bmake_shim=warn";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, colored
    #[default]
    Pretty,
    /// Structured JSON lines
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("unknown log format: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_format: LogFormat,
}

impl CliConfig {
    pub fn new(log_format: &str) -> Result<Self, AppError> {
        Ok(Self {
            log_format: log_format.parse()?,
        })
    }
}
