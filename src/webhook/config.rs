//! Sender configuration shared across sends.

use std::time::Duration;

use url::Url;

/// Default channel when none is configured.
pub const DEFAULT_CHANNEL: &str = "#-lobby-";

/// Settings applied to every message sent through a webhook.
///
/// The caller owns this value and may change it between sends with the
/// `set_*` methods. Mutation requires `&mut`, so sharing it across
/// threads needs the caller's own synchronization.
///
/// # Example
///
/// ```
/// use slackhook::webhook::WebhookConfig;
/// use url::Url;
///
/// let url = Url::parse("https://hooks.slack.com/services/T/B/X").unwrap();
/// let mut config = WebhookConfig::new(url)
///     .with_bot_name("Robo")
///     .with_bot_icon(":ghost:");
///
/// config.set_channel("@someone");
/// assert_eq!(config.channel(), "@someone");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    url: Url,
    ignore_tls: bool,
    bot_name: String,
    bot_icon: String,
    default_channel: String,
    markdown: bool,
    relay_url: Option<Url>,
    timeout: Option<Duration>,
}

impl WebhookConfig {
    /// Creates a configuration for the given webhook URL.
    ///
    /// TLS is verified, the bot name and icon are empty (Slack's own
    /// defaults apply), the channel is [`DEFAULT_CHANNEL`] and markdown
    /// is enabled.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            ignore_tls: false,
            bot_name: String::new(),
            bot_icon: String::new(),
            default_channel: DEFAULT_CHANNEL.to_string(),
            markdown: true,
            relay_url: None,
            timeout: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_bot_name(mut self, name: impl Into<String>) -> Self {
        self.bot_name = name.into();
        self
    }

    /// Sets the avatar: an emoji code or an image URL.
    #[must_use]
    pub fn with_bot_icon(mut self, icon: impl Into<String>) -> Self {
        self.bot_icon = icon.into();
        self
    }

    /// Sets the default channel.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.default_channel = channel.into();
        self
    }

    /// Skips TLS peer verification when `true`.
    #[must_use]
    pub const fn with_ignore_tls(mut self, ignore: bool) -> Self {
        self.ignore_tls = ignore;
        self
    }

    /// Sets the markdown flag.
    #[must_use]
    pub const fn with_markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    /// Sets the relay endpoint used by deferred sends.
    #[must_use]
    pub fn with_relay_url(mut self, url: Url) -> Self {
        self.relay_url = Some(url);
        self
    }

    /// Sets the timeout for synchronous sends.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Changes the default channel for subsequent sends.
    pub fn set_channel(&mut self, channel: impl Into<String>) {
        self.default_channel = channel.into();
    }

    /// Changes TLS verification for subsequent sends.
    pub const fn set_ignore_tls(&mut self, ignore: bool) {
        self.ignore_tls = ignore;
    }

    /// Changes the display name for subsequent sends.
    pub fn set_bot_name(&mut self, name: impl Into<String>) {
        self.bot_name = name.into();
    }

    /// Changes the avatar for subsequent sends.
    pub fn set_bot_icon(&mut self, icon: impl Into<String>) {
        self.bot_icon = icon.into();
    }

    /// Changes the markdown flag for subsequent sends.
    pub const fn set_markdown(&mut self, markdown: bool) {
        self.markdown = markdown;
    }

    /// Changes or clears the relay endpoint.
    pub fn set_relay_url(&mut self, url: Option<Url>) {
        self.relay_url = url;
    }

    /// Returns the webhook URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns true if TLS verification is skipped.
    #[must_use]
    pub const fn ignore_tls(&self) -> bool {
        self.ignore_tls
    }

    /// Returns the display name.
    #[must_use]
    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// Returns the avatar string.
    #[must_use]
    pub fn bot_icon(&self) -> &str {
        &self.bot_icon
    }

    /// Returns the default channel.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.default_channel
    }

    /// Returns the markdown flag.
    #[must_use]
    pub const fn markdown(&self) -> bool {
        self.markdown
    }

    /// Returns the configured relay endpoint, if any.
    #[must_use]
    pub const fn relay_url(&self) -> Option<&Url> {
        self.relay_url.as_ref()
    }

    /// Returns the synchronous send timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Process-level switches for deferred delivery.
///
/// Passed explicitly to the sender instead of living in a global.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryContext {
    /// Whether deferred sends may be attempted at all.
    pub allow_async: bool,

    /// This process's own externally reachable relay endpoint.
    ///
    /// Used when the [`WebhookConfig`] has no relay URL.
    pub self_url: Option<Url>,
}

impl DeliveryContext {
    /// Creates a context with deferred sends disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_async: false,
            self_url: None,
        }
    }

    /// Enables or disables deferred sends.
    #[must_use]
    pub const fn with_allow_async(mut self, allow: bool) -> Self {
        self.allow_async = allow;
        self
    }

    /// Sets this process's own relay endpoint.
    #[must_use]
    pub fn with_self_url(mut self, url: Url) -> Self {
        self.self_url = Some(url);
        self
    }
}
