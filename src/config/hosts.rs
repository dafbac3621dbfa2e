//! Host configuration file parsing.
//!
//! The file maps host names to their update settings, one TOML table
//! per host. Host names contain dots, so section names must be quoted:
//!
//! ```toml
//! ["example.ddnss.de"]
//! key = "s3cr3t"
//! ipv4 = false
//! ```

use std::collections::HashMap;
use std::io;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Per-host settings from the configuration file.
///
/// All fields are optional so a section may carry only the values it
/// wants to set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostEntry {
    /// The update key for this host
    pub key: Option<String>,

    /// Whether updates go through the IPv4-only endpoint
    pub ipv4: Option<bool>,
}

/// The parsed configuration file: one entry per host name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct HostsFile {
    hosts: HashMap<String, HostEntry>,
}

impl HostsFile {
    /// Loads the configuration file at `path`.
    ///
    /// A missing file yields an empty mapping. Any other read failure,
    /// and any parse failure, is an error - a corrupt file must not be
    /// mistaken for an absent one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] if the file exists but cannot
    /// be read, or [`ConfigError::Parse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Config file {} not found", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Returns the entry for `host`, if the file has a section for it.
    #[must_use]
    pub fn host(&self, host: &str) -> Option<&HostEntry> {
        self.hosts.get(host)
    }

    /// Returns the number of configured hosts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// Returns true if no host is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
