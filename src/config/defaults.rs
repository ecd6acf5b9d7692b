//! Default values for configuration options.

use std::time::Duration;

/// Default target channel.
pub const CHANNEL: &str = crate::webhook::DEFAULT_CHANNEL;

/// Default timeout for synchronous sends, in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Markdown is enabled unless turned off.
pub const MARKDOWN: bool = true;

/// Default synchronous send timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
