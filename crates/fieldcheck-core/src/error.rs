//! Error types for configuration loading
//!
//! Field validation failures are not errors in this sense; they are reported
//! through [`ErrorReport`](crate::ErrorReport).
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a message catalog
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON message catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML message catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported catalog format for {} (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
