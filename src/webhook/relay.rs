//! Deferred-send relay protocol.
//!
//! A deferred send POSTs four form fields to a relay endpoint. The host
//! application routes requests carrying that field set to
//! [`handle_relay_request`], which performs the real synchronous send.
//!
//! Closing the inbound connection early and ending the process afterwards
//! are left to the host.

use url::Url;

use super::sender::{DeliveryResult, SlackWebhook};
use super::{HttpClient, RelayError, WebhookConfig};

/// Form field carrying the serialized payload.
pub const RELAY_PAYLOAD: &str = "relay_payload";
/// Form field carrying the destination webhook URL.
pub const RELAY_WEBHOOK: &str = "relay_webhook";
/// Form field marking the request as a relay hand-off.
pub const RELAY_SEND: &str = "relay_send";
/// Form field carrying the TLS-verification-skip flag.
pub const RELAY_IGNORE_TLS: &str = "relay_ignore_tls";

/// A decoded relay hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    /// Serialized payload, forwarded verbatim
    pub payload: String,
    /// Slack webhook to deliver to
    pub webhook: Url,
    /// Skip TLS peer verification
    pub ignore_tls: bool,
}

impl RelayRequest {
    /// Creates a relay request.
    #[must_use]
    pub fn new(payload: impl Into<String>, webhook: Url, ignore_tls: bool) -> Self {
        Self {
            payload: payload.into(),
            webhook,
            ignore_tls,
        }
    }

    /// Decodes a relay request from form fields.
    ///
    /// Returns `Ok(None)` unless all four relay fields are present; such a
    /// request is not a relay hand-off and belongs to the host. When a
    /// field repeats, the last value wins.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::InvalidWebhook`] if the forwarded webhook URL
    /// does not parse.
    pub fn from_fields<I, K, V>(fields: I) -> Result<Option<Self>, RelayError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut payload = None;
        let mut webhook = None;
        let mut send = None;
        let mut ignore_tls = None;

        for (key, value) in fields {
            let slot = match key.as_ref() {
                RELAY_PAYLOAD => &mut payload,
                RELAY_WEBHOOK => &mut webhook,
                RELAY_SEND => &mut send,
                RELAY_IGNORE_TLS => &mut ignore_tls,
                _ => continue,
            };
            *slot = Some(value.into());
        }

        let (Some(payload), Some(webhook), Some(_), Some(ignore_tls)) =
            (payload, webhook, send, ignore_tls)
        else {
            return Ok(None);
        };

        let webhook = Url::parse(&webhook).map_err(|e| RelayError::InvalidWebhook {
            url: webhook.clone(),
            reason: e.to_string(),
        })?;

        Ok(Some(Self {
            payload,
            webhook,
            ignore_tls: parse_flag(&ignore_tls),
        }))
    }

    /// Decodes a relay request from an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// See [`RelayRequest::from_fields`].
    pub fn from_form(body: &[u8]) -> Result<Option<Self>, RelayError> {
        Self::from_fields(url::form_urlencoded::parse(body))
    }

    /// Encodes this request as the relay form field set.
    #[must_use]
    pub fn to_form(&self) -> [(&'static str, String); 4] {
        [
            (RELAY_PAYLOAD, self.payload.clone()),
            (RELAY_WEBHOOK, self.webhook.to_string()),
            (RELAY_SEND, "true".to_string()),
            (RELAY_IGNORE_TLS, self.ignore_tls.to_string()),
        ]
    }
}

/// Performs the real send for a relay hand-off.
///
/// Builds a fresh [`WebhookConfig`] from the forwarded URL and TLS flag
/// and sends the forwarded payload synchronously. Whether deferred sends
/// are allowed is a sender-side switch and is not consulted here.
///
/// The original caller never sees this result; it is logged and returned
/// to the host.
///
/// # Errors
///
/// Same as [`SlackWebhook::send_payload`].
pub async fn handle_relay_request<H: HttpClient>(
    client: &H,
    relay: RelayRequest,
) -> DeliveryResult {
    let config = WebhookConfig::new(relay.webhook).with_ignore_tls(relay.ignore_tls);
    let webhook = SlackWebhook::new(client, config);

    let result = webhook.send_payload(&relay.payload).await;
    match &result {
        Ok(_) => tracing::info!("Relayed message delivered to {}", webhook.config().url()),
        Err(e) => tracing::warn!("Relayed message failed: {e}"),
    }

    result
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}
