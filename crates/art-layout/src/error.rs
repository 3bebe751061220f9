//! Error types for configuration and orchestration

use art_registry::RegistryError;
use std::path::PathBuf;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Default split outside the allowed range
    #[error("default split {value}% is outside {min}..={max}")]
    SplitOutOfRange {
        /// Configured lesson percentage
        value: u8,
        /// Lower bound
        min: u8,
        /// Upper bound
        max: u8,
    },
}

/// Composition root errors
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Template catalog could not be built
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
