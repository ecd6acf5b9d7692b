//! Message construction.
//!
//! This module provides:
//! - Rich attachments ([`Attachment`], [`Field`], [`color`])
//! - Per-call message input ([`MessageRequest`])
//! - The wire payload and its icon rule ([`Payload`], [`Icon`])

mod attachment;
mod payload;


pub use attachment::{Attachment, Field, color};
pub use payload::{Icon, MessageRequest, Payload};
