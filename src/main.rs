//! ddnss: ddnss.de update client
//!
//! Entry point for the ddnss binary.

use std::process::ExitCode;

use ddnss::config::{Cli, UpdateRequest};

mod app;
mod run;

use app::{exit_code, report_config_error, report_update_error, setup_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    // Resolve the request from CLI and config file
    let request = match UpdateRequest::load(&cli) {
        Ok(request) => request,
        Err(e) => return report_config_error(&e),
    };

    tracing::debug!("{request}");

    run_application(&request)
}

/// Runs the update on a single-threaded runtime.
///
/// The updater awaits each endpoint request in turn, so execution is
/// blocking and strictly sequential from the caller's point of view.
fn run_application(request: &UpdateRequest) -> ExitCode {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    match runtime.block_on(run::execute(request)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => report_update_error(&e),
    }
}
