//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and the top-level
//! error reporting that supports the main entry point.

use std::process::ExitCode;

use ddnss::config::ConfigError;
use ddnss::update::UpdateError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration file error (exit code 1) - unreadable or malformed file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// No update key resolvable for the host (exit code 2).
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn missing_key() -> ExitCode {
        ExitCode::from(2)
    }

    /// Transport-level failure while contacting the service (exit code 3).
    pub fn connection_failure() -> ExitCode {
        ExitCode::from(3)
    }

    /// The service answered without the expected confirmation (exit code 4).
    pub fn unexpected_response() -> ExitCode {
        ExitCode::from(4)
    }
}

/// Reports a resolution failure and picks the matching exit code.
///
/// An unresolvable key maps to exit code 2; config-file problems map to
/// exit code 1.
pub fn report_config_error(error: &ConfigError) -> ExitCode {
    match error {
        ConfigError::MissingKey { host } => {
            tracing::error!("No key configured for host \"{host}\".");
            eprintln!("\nPass --key <key> or add a [\"{host}\"] section to the config file.");
            exit_code::missing_key()
        }
        ConfigError::EmptyHost => {
            tracing::error!("Host name must not be empty.");
            exit_code::missing_key()
        }
        ConfigError::FileRead { .. } | ConfigError::Parse { .. } => {
            tracing::error!("{error}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Reports an update failure and picks the matching exit code.
///
/// User-facing messages stay generic; causes and raw response bodies go
/// to the debug level only.
pub fn report_update_error(error: &UpdateError) -> ExitCode {
    match error {
        UpdateError::Http(cause) => {
            tracing::error!("Failed to connect to service.");
            tracing::debug!("{cause}");
            exit_code::connection_failure()
        }
        UpdateError::UnexpectedResponse { body } => {
            tracing::error!("Failed to update host.");
            tracing::debug!("Service response: {body}");
            exit_code::unexpected_response()
        }
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
