//! Tests for the HTTP response type and client trait.

use super::{HttpClient, HttpError, HttpResponse};

mod http_response {
    use super::*;

    #[test]
    fn new_creates_response_with_all_fields() {
        let body = b"response body".to_vec();
        let resp = HttpResponse::new(http::StatusCode::OK, body.clone());

        assert_eq!(resp.status, http::StatusCode::OK);
        assert_eq!(resp.body, body);
    }

    #[test]
    fn is_success_returns_true_for_2xx() {
        let statuses = [
            http::StatusCode::OK,
            http::StatusCode::CREATED,
            http::StatusCode::NO_CONTENT,
        ];

        for status in statuses {
            let resp = HttpResponse::new(status, vec![]);
            assert!(resp.is_success(), "Expected {status} to be success");
        }
    }

    #[test]
    fn is_success_returns_false_for_non_2xx() {
        let statuses = [
            http::StatusCode::BAD_REQUEST,
            http::StatusCode::NOT_FOUND,
            http::StatusCode::INTERNAL_SERVER_ERROR,
        ];

        for status in statuses {
            let resp = HttpResponse::new(status, vec![]);
            assert!(!resp.is_success(), "Expected {status} to not be success");
        }
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        let resp = HttpResponse::new(http::StatusCode::OK, b"Updated 1 hostname.".to_vec());

        assert_eq!(resp.body_text(), Some("Updated 1 hostname."));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::new(http::StatusCode::OK, vec![0xFF, 0xFE]);

        assert!(resp.body_text().is_none());
    }

    #[test]
    fn body_text_returns_empty_string_for_empty_body() {
        let resp = HttpResponse::new(http::StatusCode::OK, vec![]);

        assert_eq!(resp.body_text(), Some(""));
    }

    #[test]
    fn clone_creates_independent_copy() {
        let resp1 = HttpResponse::new(http::StatusCode::OK, b"data".to_vec());
        let resp2 = resp1.clone();

        assert_eq!(resp1.status, resp2.status);
        assert_eq!(resp1.body, resp2.body);
    }

    #[test]
    fn debug_format_is_readable() {
        let resp = HttpResponse::new(http::StatusCode::OK, vec![]);
        let debug = format!("{resp:?}");

        assert!(debug.contains("HttpResponse"));
        assert!(debug.contains("200"));
    }
}

mod http_error {
    use std::error::Error;

    use super::*;

    #[test]
    fn connection_error_displays_message() {
        let source = std::io::Error::other("network unavailable");
        let error = HttpError::Connection(Box::new(source));

        assert!(error.to_string().contains("Connection error"));
    }

    #[test]
    fn connection_error_preserves_source() {
        let source = std::io::Error::other("network unavailable");
        let error = HttpError::Connection(Box::new(source));

        assert!(error.source().is_some());
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("network unavailable")
        );
    }

    #[test]
    fn timeout_displays_message() {
        let error = HttpError::Timeout;
        assert_eq!(error.to_string(), "Request timed out");
    }

    #[test]
    fn timeout_has_no_source() {
        let error = HttpError::Timeout;
        assert!(error.source().is_none());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod http_client_trait {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Mock client for testing the trait.
    struct MockClient {
        response: HttpResponse,
        call_count: Arc<AtomicUsize>,
    }

    impl MockClient {
        fn new(response: HttpResponse) -> Self {
            Self {
                response,
                call_count: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    impl HttpClient for MockClient {
        async fn get(&self, _url: &url::Url) -> Result<HttpResponse, HttpError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn mock_client_returns_configured_response() {
        let response = HttpResponse::new(http::StatusCode::OK, b"Updated 1 hostname.".to_vec());
        let client = MockClient::new(response);

        let url = url::Url::parse("https://example.com/").unwrap();
        let result = client.get(&url).await.unwrap();

        assert_eq!(result.status, http::StatusCode::OK);
        assert_eq!(result.body, b"Updated 1 hostname.".to_vec());
    }

    #[tokio::test]
    async fn mock_client_tracks_call_count() {
        let response = HttpResponse::new(http::StatusCode::OK, vec![]);
        let client = MockClient::new(response);
        let url = url::Url::parse("https://example.com/").unwrap();

        client.get(&url).await.unwrap();
        client.get(&url).await.unwrap();
        client.get(&url).await.unwrap();

        assert_eq!(client.calls(), 3);
    }

    /// Error-returning mock for testing error paths.
    struct FailingClient {
        error_type: &'static str,
    }

    impl HttpClient for FailingClient {
        async fn get(&self, _url: &url::Url) -> Result<HttpResponse, HttpError> {
            match self.error_type {
                "timeout" => Err(HttpError::Timeout),
                _ => Err(HttpError::Connection(Box::new(std::io::Error::other(
                    "refused",
                )))),
            }
        }
    }

    #[tokio::test]
    async fn failing_client_returns_timeout_error() {
        let client = FailingClient {
            error_type: "timeout",
        };
        let url = url::Url::parse("https://example.com/").unwrap();

        let result = client.get(&url).await;

        assert!(matches!(result, Err(HttpError::Timeout)));
    }

    #[tokio::test]
    async fn failing_client_returns_connection_error() {
        let client = FailingClient {
            error_type: "connection",
        };
        let url = url::Url::parse("https://example.com/").unwrap();

        let result = client.get(&url).await;

        assert!(matches!(result, Err(HttpError::Connection(_))));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: HttpClient>() {}
        assert_send_sync::<MockClient>();
        assert_send_sync::<FailingClient>();
    }
}
