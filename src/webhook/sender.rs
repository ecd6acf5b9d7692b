//! Webhook sender trait and Slack implementation.

use std::time::Duration;

use crate::message::{MessageRequest, Payload};

use super::relay::RelayRequest;
use super::{DeliveryContext, DeliveryError, HttpClient, HttpRequest, WebhookConfig};

/// Body Slack returns when it accepted a message.
pub const ACK_BODY: &str = "ok";

/// Deadline for handing a payload to the relay.
///
/// Kept well below the time the relay spends on the real send, so the
/// caller gets control back without waiting for Slack.
pub const RELAY_HANDOFF_TIMEOUT: Duration = Duration::from_secs(1);

/// A successful outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Slack acknowledged the message; carries the response body.
    Sent(String),
    /// A deferred send was handed to the relay. The final outcome is unknown.
    Accepted,
}

/// Outcome of every send call.
pub type DeliveryResult = Result<Delivery, DeliveryError>;

/// Trait for posting messages.
///
/// Allows hosts to swap the Slack sender for a mock.
pub trait WebhookSender: Send + Sync {
    /// Sends a message and waits for Slack's answer.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] on transport failure or rejection.
    fn send(
        &self,
        request: &MessageRequest,
    ) -> impl std::future::Future<Output = DeliveryResult> + Send;

    /// Hands a message to the relay and returns without waiting for Slack.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] if deferred sends are not possible.
    fn send_deferred(
        &self,
        request: &MessageRequest,
    ) -> impl std::future::Future<Output = DeliveryResult> + Send;
}

/// Slack incoming-webhook sender.
///
/// Sends are either synchronous (POST to Slack and classify the answer)
/// or deferred (POST to a relay with a short timeout and report
/// [`Delivery::Accepted`]). No retries are made.
///
/// # Example
///
/// ```no_run
/// use slackhook::message::MessageRequest;
/// use slackhook::webhook::{ReqwestClient, SlackWebhook, WebhookConfig, WebhookSender};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WebhookConfig::new(Url::parse("https://hooks.slack.com/services/T/B/X")?)
///     .with_bot_name("Robo")
///     .with_bot_icon(":ghost:");
/// let webhook = SlackWebhook::new(ReqwestClient::new()?, config);
///
/// webhook.send(&MessageRequest::new("Hello World!")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SlackWebhook<H> {
    client: H,
    config: WebhookConfig,
    context: DeliveryContext,
}

impl<H> SlackWebhook<H> {
    /// Creates a sender with deferred sends disabled.
    #[must_use]
    pub const fn new(client: H, config: WebhookConfig) -> Self {
        Self {
            client,
            config,
            context: DeliveryContext::new(),
        }
    }

    /// Sets the delivery context.
    #[must_use]
    pub fn with_context(mut self, context: DeliveryContext) -> Self {
        self.context = context;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &WebhookConfig {
        &self.config
    }

    /// Returns the configuration for modification before later sends.
    pub const fn config_mut(&mut self) -> &mut WebhookConfig {
        &mut self.config
    }

    /// Returns the delivery context.
    #[must_use]
    pub const fn context(&self) -> &DeliveryContext {
        &self.context
    }

    /// Builds the payload for a request using the current configuration.
    #[must_use]
    pub fn build_payload(&self, request: &MessageRequest) -> Payload {
        Payload::build(&self.config, request)
    }

    fn relay_target(&self) -> Option<&url::Url> {
        self.config
            .relay_url()
            .or(self.context.self_url.as_ref())
    }
}

impl<H: HttpClient> SlackWebhook<H> {
    /// Posts an already serialized payload to Slack.
    ///
    /// # Errors
    ///
    /// - [`DeliveryError::Transport`] if no response was received
    /// - [`DeliveryError::Rejected`] if the body is anything but `ok`
    pub async fn send_payload(&self, payload: &str) -> DeliveryResult {
        let mut request = HttpRequest::post(self.config.url().clone())
            .with_form([("payload", payload)])
            .with_verify_tls(!self.config.ignore_tls());

        if let Some(timeout) = self.config.timeout() {
            request = request.with_timeout(timeout);
        }

        tracing::debug!(
            "Posting {} byte payload to {}",
            payload.len(),
            self.config.url()
        );

        let response = self.client.request(request).await.map_err(|e| {
            tracing::warn!("Webhook transport failure: {e}");
            DeliveryError::from(e)
        })?;

        let body = response.body_lossy();
        if body == ACK_BODY {
            return Ok(Delivery::Sent(body));
        }

        tracing::warn!("Webhook rejected message ({}): {body}", response.status);
        Err(DeliveryError::Rejected {
            status: response.status,
            body,
        })
    }

    /// Hands an already serialized payload to the relay.
    ///
    /// The relay target is the configured relay URL, falling back to the
    /// context's self URL. Whatever happens to the hand-off request,
    /// including a timeout, the result is [`Delivery::Accepted`].
    ///
    /// # Errors
    ///
    /// - [`DeliveryError::AsyncNotAllowed`] if the context disables deferred sends
    /// - [`DeliveryError::NoRelayTarget`] if there is nowhere to hand off to
    ///
    /// Neither error involves a network call.
    pub async fn send_payload_deferred(&self, payload: &str) -> DeliveryResult {
        if !self.context.allow_async {
            return Err(DeliveryError::AsyncNotAllowed);
        }

        let target = self.relay_target().ok_or(DeliveryError::NoRelayTarget)?;

        let relay = RelayRequest::new(payload, self.config.url().clone(), self.config.ignore_tls());
        let request = HttpRequest::post(target.clone())
            .with_form(relay.to_form().iter().map(|(k, v)| (*k, v.as_str())))
            .with_verify_tls(!self.config.ignore_tls())
            .with_timeout(RELAY_HANDOFF_TIMEOUT);

        tracing::debug!("Handing payload to relay at {target}");

        match self.client.request(request).await {
            Ok(response) => {
                tracing::debug!("Relay answered hand-off with {}", response.status);
            }
            Err(e) => {
                tracing::debug!("Relay hand-off ended without response: {e}");
            }
        }

        Ok(Delivery::Accepted)
    }
}

impl<H: HttpClient> WebhookSender for SlackWebhook<H> {
    async fn send(&self, request: &MessageRequest) -> DeliveryResult {
        let payload = self.build_payload(request).to_json()?;
        self.send_payload(&payload).await
    }

    async fn send_deferred(&self, request: &MessageRequest) -> DeliveryResult {
        let payload = self.build_payload(request).to_json()?;
        self.send_payload_deferred(&payload).await
    }
}
