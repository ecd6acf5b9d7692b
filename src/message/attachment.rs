//! Rich message attachments.

use serde::Serialize;

use crate::time::{Clock, SystemClock};

/// Sentinel attachment colors understood by Slack.
///
/// Any other value is passed through untouched; Slack expects a hex
/// string such as `#36a64f`.
pub mod color {
    /// Green.
    pub const GOOD: &str = "good";
    /// Yellow.
    pub const WARNING: &str = "warning";
    /// Red.
    pub const DANGER: &str = "danger";
}

/// A title/value pair rendered as a table cell inside an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Bold heading
    pub title: String,
    /// Cell content
    pub value: String,
    /// Whether the field is narrow enough to sit next to another one
    pub short: bool,
}

impl Field {
    /// Creates a new field.
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>, short: bool) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short,
        }
    }
}

/// A structured sub-block of a Slack message.
///
/// `fallback`, `text`, `fields` and `ts` are always serialized. Every
/// other key is omitted while its value is empty, so never-set options
/// do not appear on the wire as `null` or `""`.
///
/// Values are not validated; Slack decides what to do with a malformed
/// color or URL.
///
/// # Example
///
/// ```
/// use slackhook::message::{Attachment, color};
///
/// let attachment = Attachment::new("Deploy finished", "Deploy finished")
///     .with_color(color::GOOD)
///     .with_title("web-01")
///     .with_title_link("https://ci.example.com/build/42")
///     .with_field("Duration", "3m", true)
///     .with_field("Commit", "a1b2c3d", true);
///
/// assert_eq!(attachment.fields().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    fallback: String,
    text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pretext: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    color: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    title_link: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    footer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    footer_icon: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    image_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    thumb_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    author_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    author_link: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    author_icon: String,
    fields: Vec<Field>,
    ts: u64,
}

impl Attachment {
    /// Creates an attachment stamped with the current system time.
    #[must_use]
    pub fn new(text: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self::new_with_clock(text, fallback, &SystemClock)
    }

    /// Creates an attachment stamped with the time reported by `clock`.
    #[must_use]
    pub fn new_with_clock(
        text: impl Into<String>,
        fallback: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            fallback: fallback.into(),
            text: text.into(),
            pretext: String::new(),
            color: String::new(),
            title: String::new(),
            title_link: String::new(),
            footer: String::new(),
            footer_icon: String::new(),
            image_url: String::new(),
            thumb_url: String::new(),
            author_name: String::new(),
            author_link: String::new(),
            author_icon: String::new(),
            fields: Vec::new(),
            ts: clock.unix_secs(),
        }
    }

    /// Overrides the timestamp (seconds since the Unix epoch).
    #[must_use]
    pub const fn with_timestamp(mut self, ts: u64) -> Self {
        self.ts = ts;
        self
    }

    /// Sets the text shown above the attachment block.
    #[must_use]
    pub fn with_pretext(mut self, pretext: impl Into<String>) -> Self {
        self.pretext = pretext.into();
        self
    }

    /// Sets the side-bar color: a hex string or one of [`color`]'s sentinels.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the bold title line.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Makes the title a hyperlink.
    #[must_use]
    pub fn with_title_link(mut self, link: impl Into<String>) -> Self {
        self.title_link = link.into();
        self
    }

    /// Sets the small footer line.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Sets the icon shown next to the footer.
    #[must_use]
    pub fn with_footer_icon(mut self, icon: impl Into<String>) -> Self {
        self.footer_icon = icon.into();
        self
    }

    /// Sets the full-width image.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Sets the thumbnail shown on the right.
    #[must_use]
    pub fn with_thumb_url(mut self, url: impl Into<String>) -> Self {
        self.thumb_url = url.into();
        self
    }

    /// Sets the author line.
    #[must_use]
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author_name = name.into();
        self
    }

    /// Makes the author name a hyperlink.
    #[must_use]
    pub fn with_author_link(mut self, link: impl Into<String>) -> Self {
        self.author_link = link.into();
        self
    }

    /// Sets the small icon shown next to the author name.
    #[must_use]
    pub fn with_author_icon(mut self, icon: impl Into<String>) -> Self {
        self.author_icon = icon.into();
        self
    }

    /// Appends a field. Fields serialize in the order they were added.
    #[must_use]
    pub fn with_field(
        mut self,
        title: impl Into<String>,
        value: impl Into<String>,
        short: bool,
    ) -> Self {
        self.add_field(Field::new(title, value, short));
        self
    }

    /// Appends an already-built field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Returns the fallback text.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Returns the body text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the timestamp in seconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        self.ts
    }
}
