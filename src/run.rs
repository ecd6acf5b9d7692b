//! Application execution logic.
//!
//! This module drives the `send` and `relay` subcommands.

use thiserror::Error;

use slackhook::config::ValidatedConfig;
use slackhook::message::MessageRequest;
use slackhook::webhook::{
    Delivery, DeliveryError, HttpError, RelayError, RelayRequest, ReqwestClient, SlackWebhook,
    WebhookSender, handle_relay_request,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to create the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),

    /// The message was not delivered.
    #[error("Delivery failed: {0}")]
    Delivery(#[source] DeliveryError),

    /// Failed to read the relay request from stdin.
    #[error("Failed to read relay request: {0}")]
    ReadInput(#[source] std::io::Error),

    /// The relay request could not be decoded.
    #[error("Invalid relay request: {0}")]
    InvalidRelay(#[source] RelayError),

    /// The input lacks one of the relay fields.
    #[error("Input is not a relay request")]
    NotRelayRequest,
}

/// Arguments of the `send` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOptions {
    /// Message text
    pub text: String,
    /// Optional title
    pub title: Option<String>,
    /// Optional channel override
    pub channel: Option<String>,
    /// Use the relay instead of waiting for Slack
    pub deferred: bool,
}

impl SendOptions {
    /// Builds the message request for these options.
    fn to_request(&self) -> MessageRequest {
        let mut request = MessageRequest::new(self.text.as_str());
        if let Some(ref title) = self.title {
            request = request.with_title(title.as_str());
        }
        if let Some(ref channel) = self.channel {
            request = request.with_channel(channel.as_str());
        }
        request
    }
}

/// Executes the `send` subcommand.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the message
/// is not delivered.
///
/// Excluded from coverage - performs real network I/O.
#[cfg(not(tarpaulin_include))]
pub async fn execute_send(config: ValidatedConfig, options: SendOptions) -> Result<(), RunError> {
    let client = ReqwestClient::new().map_err(RunError::Client)?;
    let webhook = SlackWebhook::new(client, config.webhook).with_context(config.context);

    send_message(&webhook, &options).await
}

/// Sends one message and logs the outcome.
async fn send_message<W: WebhookSender>(
    webhook: &W,
    options: &SendOptions,
) -> Result<(), RunError> {
    let request = options.to_request();

    let result = if options.deferred {
        webhook.send_deferred(&request).await
    } else {
        webhook.send(&request).await
    };

    match result {
        Ok(Delivery::Sent(_)) => {
            tracing::info!("Message delivered");
            Ok(())
        }
        Ok(Delivery::Accepted) => {
            tracing::info!("Message handed to relay");
            Ok(())
        }
        Err(e) => Err(RunError::Delivery(e)),
    }
}

/// Decodes a relay form body.
fn decode_relay(body: &[u8]) -> Result<RelayRequest, RunError> {
    RelayRequest::from_form(body)
        .map_err(RunError::InvalidRelay)?
        .ok_or(RunError::NotRelayRequest)
}

/// Executes the `relay` subcommand on a form body.
///
/// # Errors
///
/// Returns an error if the body is not a valid relay request, the HTTP
/// client cannot be built, or the relayed message is not delivered.
///
/// Excluded from coverage - performs real network I/O.
#[cfg(not(tarpaulin_include))]
pub async fn execute_relay(body: Vec<u8>) -> Result<(), RunError> {
    let relay = decode_relay(&body)?;
    let client = ReqwestClient::new().map_err(RunError::Client)?;

    handle_relay_request(&client, relay)
        .await
        .map(|_| ())
        .map_err(RunError::Delivery)
}
