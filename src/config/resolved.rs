//! Request resolution after merging CLI and config file sources.
//!
//! This module contains the final, resolved update request that is used
//! by the application. All resolution is performed during construction.

use std::fmt;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::hosts::HostsFile;

/// A fully resolved update request.
///
/// Everything an update run needs, merged from the CLI and the host's
/// config section. Immutable once constructed; consumed once per
/// invocation.
///
/// # Construction
///
/// Use [`UpdateRequest::load`] to resolve from CLI arguments and the
/// config file they name, or [`UpdateRequest::from_raw`] to resolve
/// against an already-parsed [`HostsFile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    /// Provider-assigned host name to update
    pub host: String,

    /// The update key (secret, opaque)
    pub key: String,

    /// Whether to use the IPv4-only endpoint
    pub ipv4_only: bool,
}

impl fmt::Display for UpdateRequest {
    /// The key is redacted so request summaries are safe to log.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Request {{ host: {}, key: <redacted>, ipv4_only: {} }}",
            self.host, self.ipv4_only
        )
    }
}

impl UpdateRequest {
    /// Resolves a request from CLI arguments and the parsed config file.
    ///
    /// Field rules:
    /// - `host` is taken verbatim from the CLI and must be non-empty.
    /// - `key`: CLI value, else the host section's `key`.
    /// - `ipv4_only`: the `--ipv4` flag wins when set; otherwise the
    ///   host section's `ipv4` value; otherwise `false`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHost`] for an empty host argument and
    /// [`ConfigError::MissingKey`] when neither source provides a key.
    pub fn from_raw(cli: &Cli, hosts: &HostsFile) -> Result<Self, ConfigError> {
        if cli.host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        let entry = hosts.host(&cli.host);

        let key = cli
            .key
            .clone()
            .or_else(|| entry.and_then(|e| e.key.clone()))
            .ok_or_else(|| ConfigError::MissingKey {
                host: cli.host.clone(),
            })?;

        // Flag only enables; config supplies the default.
        let ipv4_only = cli.ipv4 || entry.and_then(|e| e.ipv4).unwrap_or(false);

        Ok(Self {
            host: cli.host.clone(),
            key,
            ipv4_only,
        })
    }

    /// Loads the config file named by the CLI (or the platform default)
    /// and resolves the request against it.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or malformed,
    /// or if the merged values do not form a complete request.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config_file
            .clone()
            .unwrap_or_else(defaults::config_file);

        let hosts = HostsFile::load(&path)?;

        Self::from_raw(cli, &hosts)
    }
}
