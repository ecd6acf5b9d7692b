//! slackhook: Slack incoming-webhook client
//!
//! A library for composing Slack messages with attachments and delivering
//! them either synchronously or through a deferred relay hand-off.

pub mod config;
pub mod link;
pub mod message;
pub mod time;
pub mod webhook;
