//! Application execution logic.
//!
//! Builds the production updater and performs a single update run.

use ddnss::config::UpdateRequest;
use ddnss::update::{ReqwestClient, UpdateError, Updater};

/// Performs the update described by `request` and logs the outcome.
///
/// Success messages are logged at info level, one per queried endpoint
/// and in request order, only after every endpoint accepted the update.
///
/// # Errors
///
/// Returns [`UpdateError`] if any endpoint request fails at the
/// transport level or the service response lacks the expected
/// confirmation.
pub async fn execute(request: &UpdateRequest) -> Result<(), UpdateError> {
    let updater = Updater::new(ReqwestClient::new());
    let messages = updater.update(request).await?;

    for message in &messages {
        tracing::info!("{message}");
    }

    Ok(())
}
