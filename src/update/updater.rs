//! The update flow: endpoint iteration and response classification.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::UpdateRequest;

use super::{Endpoint, HttpClient, UpdateError};

/// The confirmation the service sends for an accepted update, e.g.
/// `Updated 1 hostname.`
static SUCCESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Updated \d+ hostname\.").expect("success pattern is valid"));

/// Performs provider updates over an injected HTTP client.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
///
/// # Example
///
/// ```no_run
/// use ddnss::config::UpdateRequest;
/// use ddnss::update::{ReqwestClient, Updater};
///
/// # async fn example() -> Result<(), ddnss::update::UpdateError> {
/// let updater = Updater::new(ReqwestClient::new());
/// let request = UpdateRequest {
///     host: "example.ddnss.de".to_string(),
///     key: "s3cr3t".to_string(),
///     ipv4_only: false,
/// };
/// let messages = updater.update(&request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Updater<H> {
    client: H,
}

impl<H> Updater<H> {
    /// Creates a new updater over the given client.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Updater<H> {
    /// Updates the request's host on every selected endpoint.
    ///
    /// Endpoints are queried strictly sequentially, in selection order.
    /// The first failure aborts the call; messages are returned only
    /// when every endpoint confirmed the update.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Http`] on transport failure and
    /// [`UpdateError::UnexpectedResponse`] when a response lacks the
    /// confirmation.
    pub async fn update(&self, request: &UpdateRequest) -> Result<Vec<String>, UpdateError> {
        let endpoints = Endpoint::select(request.ipv4_only);
        let mut messages = Vec::with_capacity(endpoints.len());

        for endpoint in endpoints {
            messages.push(self.update_endpoint(*endpoint, request).await?);
        }

        Ok(messages)
    }

    /// Updates one endpoint and extracts its confirmation message.
    async fn update_endpoint(
        &self,
        endpoint: Endpoint,
        request: &UpdateRequest,
    ) -> Result<String, UpdateError> {
        let url = endpoint.update_url(&request.host, &request.key);

        // The full URL carries the key; log the endpoint only.
        tracing::debug!("Updating {} via {}", request.host, endpoint.authority());

        let response = self.client.get(&url).await?;
        let body = String::from_utf8_lossy(&response.body);

        tracing::debug!("Service responded with status {}", response.status);

        match SUCCESS_PATTERN.find(&body) {
            Some(m) => Ok(m.as_str().to_string()),
            None => Err(UpdateError::UnexpectedResponse {
                body: body.into_owned(),
            }),
        }
    }
}
