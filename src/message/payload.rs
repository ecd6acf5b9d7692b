//! Top-level message payload.

use serde::Serialize;

use crate::webhook::WebhookConfig;

use super::Attachment;

/// The bot avatar, as Slack expects it on the wire.
///
/// Serialized flattened into the payload, so exactly one of `icon_emoji`
/// or `icon_url` is ever present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Icon {
    /// An emoji code such as `:ghost:`
    #[serde(rename = "icon_emoji")]
    Emoji(String),
    /// An image URL
    #[serde(rename = "icon_url")]
    Url(String),
}

impl Icon {
    /// Classifies an icon string.
    ///
    /// Anything containing `http` is a URL; everything else, including the
    /// empty string, is treated as an emoji code. This is a substring check,
    /// not a URL parse.
    #[must_use]
    pub fn classify(icon: &str) -> Self {
        if icon.contains("http") {
            Self::Url(icon.to_string())
        } else {
            Self::Emoji(icon.to_string())
        }
    }

    /// Returns true for [`Icon::Emoji`].
    #[must_use]
    pub const fn is_emoji(&self) -> bool {
        matches!(self, Self::Emoji(_))
    }
}

/// A single message to post.
///
/// Empty `title` and `channel` mean "not given".
///
/// # Example
///
/// ```
/// use slackhook::message::{Attachment, MessageRequest};
///
/// let request = MessageRequest::new("Build failed")
///     .with_title("CI")
///     .with_channel("#builds")
///     .with_attachment(Attachment::new("3 tests failed", "3 tests failed"));
///
/// assert_eq!(request.channel, "#builds");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRequest {
    /// Message body
    pub text: String,
    /// Appended to the bot name as `"{name} - {title}"`
    pub title: String,
    /// Overrides the configured default channel
    pub channel: String,
    /// Rich attachments, serialized in order
    pub attachments: Vec<Attachment>,
}

impl MessageRequest {
    /// Creates a request with just a body.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the target channel.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Appends an attachment.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// The JSON document posted to the webhook as the `payload` form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    /// Target channel
    pub channel: String,
    /// Display name, possibly merged with the title
    pub username: String,
    /// Message body
    pub text: String,
    /// Markdown toggle. The key spelling is what existing receivers read.
    pub mrkdown: bool,
    /// Omitted from the wire when empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Avatar
    #[serde(flatten)]
    pub icon: Icon,
}

impl Payload {
    /// Composes a payload from the sender configuration and a request.
    #[must_use]
    pub fn build(config: &WebhookConfig, request: &MessageRequest) -> Self {
        let channel = if request.channel.is_empty() {
            config.channel().to_string()
        } else {
            request.channel.clone()
        };

        Self {
            channel,
            username: merge_title(config.bot_name(), &request.title),
            text: request.text.clone(),
            mrkdown: config.markdown(),
            attachments: request.attachments.clone(),
            icon: Icon::classify(config.bot_icon()),
        }
    }

    /// Serializes the payload to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error; this does not happen for
    /// payloads built with [`Payload::build`].
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn merge_title(name: &str, title: &str) -> String {
    match (name.is_empty(), title.is_empty()) {
        (_, true) => name.to_string(),
        (true, false) => title.to_string(),
        (false, false) => format!("{name} - {title}"),
    }
}
