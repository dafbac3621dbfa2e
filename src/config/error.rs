//! Error types for configuration parsing and request resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers file handling, parsing, and request resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    ///
    /// A missing file is not an error; this covers everything else
    /// (permissions, I/O failures).
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but is not valid TOML.
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        /// Path to the config file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// No update key resolvable from CLI or config for the host.
    #[error("No key configured for host \"{host}\"")]
    MissingKey {
        /// The host that lacks a key
        host: String,
    },

    /// The host argument is empty.
    #[error("Host name must not be empty")]
    EmptyHost,
}
