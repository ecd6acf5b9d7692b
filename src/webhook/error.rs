//! Error types for HTTP transport and message delivery.

use thiserror::Error;

/// Error type for HTTP operations: no response was obtained.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and TLS handshake errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl HttpError {
    /// Returns a numeric error code for the failure kind.
    ///
    /// Values follow libcurl's `CURLcode` numbering so receivers that log
    /// or compare curl error numbers keep working.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::ClientBuild(_) => 2,
            Self::InvalidUrl(_) => 3,
            Self::Connection(_) => 7,
            Self::Timeout => 28,
        }
    }
}

/// Why a message was not delivered.
///
/// Every failure is returned to the caller; nothing is retried.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// No response was received.
    #[error("Transport failure (code {}): {source}", .source.code())]
    Transport {
        /// Underlying transport error
        #[from]
        source: HttpError,
    },

    /// A response was received but it was not Slack's `ok` acknowledgment.
    #[error("Webhook rejected message with status {status}: {body}")]
    Rejected {
        /// Response status
        status: http::StatusCode,
        /// Raw response body
        body: String,
    },

    /// A deferred send was requested while deferred sends are disabled.
    #[error("Async sends are not allowed")]
    AsyncNotAllowed,

    /// A deferred send has neither a configured relay URL nor a self URL.
    #[error("No relay target configured for deferred send")]
    NoRelayTarget,

    /// The payload could not be serialized.
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DeliveryError {
    /// Returns the transport error code, if this is a transport failure.
    #[must_use]
    pub const fn code(&self) -> Option<u32> {
        match self {
            Self::Transport { source } => Some(source.code()),
            _ => None,
        }
    }

    /// Returns true if this error was raised before any network call.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::AsyncNotAllowed | Self::NoRelayTarget)
    }
}

/// Error type for decoding relay requests.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The forwarded webhook URL does not parse.
    #[error("Invalid relay webhook URL '{url}': {reason}")]
    InvalidWebhook {
        /// The forwarded value
        url: String,
        /// Parse failure
        reason: String,
    },
}
