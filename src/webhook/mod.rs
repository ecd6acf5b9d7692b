//! Webhook layer for delivering messages to Slack.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`]) and reading responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`]) with a reqwest implementation ([`ReqwestClient`])
//! - Sender configuration ([`WebhookConfig`], [`DeliveryContext`])
//! - Synchronous and deferred delivery ([`SlackWebhook`], [`WebhookSender`])
//! - The relay side of deferred delivery ([`RelayRequest`], [`handle_relay_request`])

mod client;
mod config;
mod error;
mod http;
pub mod relay;
mod sender;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod relay_tests;

pub use client::ReqwestClient;
pub use config::{DEFAULT_CHANNEL, DeliveryContext, WebhookConfig};
pub use error::{DeliveryError, HttpError, RelayError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use relay::{RelayRequest, handle_relay_request};
pub use sender::{
    ACK_BODY, Delivery, DeliveryResult, RELAY_HANDOFF_TIMEOUT, SlackWebhook, WebhookSender,
};
