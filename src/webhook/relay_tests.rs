//! Tests for the relay protocol.

use super::relay::{
    RELAY_IGNORE_TLS, RELAY_PAYLOAD, RELAY_SEND, RELAY_WEBHOOK, RelayRequest,
    handle_relay_request,
};
use super::{Delivery, DeliveryError, HttpClient, HttpError, HttpRequest, HttpResponse, RelayError};
use std::sync::Mutex;

/// Mock client that answers every request the same way.
struct RecordingClient {
    body: &'static str,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingClient {
    fn answering(body: &'static str) -> Self {
        Self {
            body,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for RecordingClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        Ok(HttpResponse::with_text(http::StatusCode::OK, self.body))
    }
}

fn webhook_url() -> url::Url {
    url::Url::parse("https://hooks.example.com/services/T/B/X").unwrap()
}

fn full_fields(ignore_tls: &str) -> Vec<(&'static str, String)> {
    vec![
        (RELAY_PAYLOAD, r#"{"text":"hi"}"#.to_string()),
        (RELAY_WEBHOOK, webhook_url().to_string()),
        (RELAY_SEND, "true".to_string()),
        (RELAY_IGNORE_TLS, ignore_tls.to_string()),
    ]
}

mod decoding {
    use super::*;

    #[test]
    fn all_fields_present_decodes() {
        let relay = RelayRequest::from_fields(full_fields("false"))
            .unwrap()
            .unwrap();

        assert_eq!(relay.payload, r#"{"text":"hi"}"#);
        assert_eq!(relay.webhook, webhook_url());
        assert!(!relay.ignore_tls);
    }

    #[test]
    fn any_missing_field_is_not_a_relay_request() {
        for skipped in [RELAY_PAYLOAD, RELAY_WEBHOOK, RELAY_SEND, RELAY_IGNORE_TLS] {
            let fields: Vec<_> = full_fields("false")
                .into_iter()
                .filter(|(k, _)| *k != skipped)
                .collect();

            assert_eq!(
                RelayRequest::from_fields(fields).unwrap(),
                None,
                "missing {skipped}"
            );
        }
    }

    #[test]
    fn unrelated_fields_are_ignored() {
        let mut fields = full_fields("1");
        fields.push(("user", "alice".to_string()));

        let relay = RelayRequest::from_fields(fields).unwrap().unwrap();
        assert!(relay.ignore_tls);
    }

    #[test]
    fn tls_flag_accepts_true_case_insensitively() {
        let relay = RelayRequest::from_fields(full_fields("TRUE"))
            .unwrap()
            .unwrap();
        assert!(relay.ignore_tls);
    }

    #[test]
    fn tls_flag_other_values_are_false() {
        let relay = RelayRequest::from_fields(full_fields("yes"))
            .unwrap()
            .unwrap();
        assert!(!relay.ignore_tls);
    }

    #[test]
    fn invalid_webhook_url_is_error() {
        let mut fields = full_fields("false");
        fields[1].1 = "not a url".to_string();

        let result = RelayRequest::from_fields(fields);

        assert!(matches!(
            result,
            Err(RelayError::InvalidWebhook { ref url, .. }) if url == "not a url"
        ));
    }

    #[test]
    fn form_encoding_survives_decoding() {
        let relay = RelayRequest::new(
            r#"{"text":"a & b = <c>"}"#,
            webhook_url(),
            true,
        );

        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(relay.to_form().iter().map(|(k, v)| (*k, v.as_str())))
            .finish();

        assert_eq!(RelayRequest::from_form(body.as_bytes()).unwrap(), Some(relay));
    }

    #[test]
    fn to_form_always_marks_send() {
        let relay = RelayRequest::new("{}", webhook_url(), false);
        let form = relay.to_form();

        assert_eq!(form[2], (RELAY_SEND, "true".to_string()));
        assert_eq!(form[3], (RELAY_IGNORE_TLS, "false".to_string()));
    }

    #[test]
    fn empty_form_is_not_a_relay_request() {
        assert_eq!(RelayRequest::from_form(b"").unwrap(), None);
    }
}

mod handling {
    use super::*;

    #[tokio::test]
    async fn sends_forwarded_payload_to_forwarded_webhook() {
        let client = RecordingClient::answering("ok");
        let relay = RelayRequest::new(r#"{"text":"hi"}"#, webhook_url(), true);

        let result = handle_relay_request(&client, relay).await;

        assert_eq!(result.unwrap(), Delivery::Sent("ok".to_string()));

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, webhook_url());
        assert!(!requests[0].verify_tls);

        let form: Vec<(String, String)> =
            url::form_urlencoded::parse(requests[0].body.as_deref().unwrap())
                .into_owned()
                .collect();
        assert_eq!(
            form,
            vec![("payload".to_string(), r#"{"text":"hi"}"#.to_string())]
        );
    }

    #[tokio::test]
    async fn rejection_is_reported_to_host() {
        let client = RecordingClient::answering("invalid_payload");
        let relay = RelayRequest::new("not json", webhook_url(), false);

        let result = handle_relay_request(&client, relay).await;

        assert!(matches!(
            result,
            Err(DeliveryError::Rejected { ref body, .. }) if body == "invalid_payload"
        ));
    }

    #[tokio::test]
    async fn handling_does_not_need_async_enabled() {
        // The relay never looks at a DeliveryContext; a plain decoded request
        // is enough to trigger a real send.
        let client = RecordingClient::answering("ok");
        let relay = RelayRequest::from_fields(full_fields("false"))
            .unwrap()
            .unwrap();

        assert!(handle_relay_request(&client, relay).await.is_ok());
        assert_eq!(client.requests().len(), 1);
    }
}
