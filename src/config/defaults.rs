//! Default values for configuration options.

use std::path::PathBuf;

/// File name of the host configuration file.
pub const CONFIG_FILE_NAME: &str = "ddnss.conf";

/// Well-known location of the host configuration file.
///
/// Platform selection lives here so the resolver itself stays
/// platform-agnostic.
#[cfg(unix)]
#[must_use]
pub fn config_file() -> PathBuf {
    PathBuf::from("/etc").join(CONFIG_FILE_NAME)
}

/// Well-known location of the host configuration file.
///
/// Platform selection lives here so the resolver itself stays
/// platform-agnostic.
#[cfg(windows)]
#[must_use]
pub fn config_file() -> PathBuf {
    dirs::data_local_dir()
        .map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), |dir| dir.join(CONFIG_FILE_NAME))
}
