//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::Parser;

/// Update ddnss.de domains.
///
/// Contacts the provider's update endpoint for the given host and
/// reports whether the record update was accepted.
#[derive(Debug, Parser)]
#[command(name = "ddnss")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The host to update
    pub host: String,

    /// Path to the configuration file
    #[arg(long = "config-file", short = 'f', value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// The update key (overrides the configured key)
    #[arg(long, short)]
    pub key: Option<String>,

    /// Force the IPv4-only update endpoint
    #[arg(long)]
    pub ipv4: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
