//! Tests for `ReqwestClient`.
//!
//! Delivery logic is covered with mock clients; these tests only check
//! construction and error mapping against unreachable hosts.

use super::*;

mod reqwest_client {
    use super::*;

    #[test]
    fn new_builds_both_clients() {
        let client = ReqwestClient::new().unwrap();
        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn from_clients_accepts_custom_clients() {
        let verified = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap();
        let unverified = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .unwrap();

        let client = ReqwestClient::from_clients(verified, unverified);
        let _ = format!("{client:?}");
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::new().unwrap();
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();
        let req = HttpRequest::post(url)
            .with_form([("payload", "{}")])
            .with_verify_tls(false);

        let result = client.request(req).await;

        // Behind a proxy, DNS failure may surface as an error response instead.
        match result {
            Err(HttpError::Connection(_) | HttpError::Timeout) => {}
            Ok(resp) if !resp.status.is_success() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
