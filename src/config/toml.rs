//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional so a file can be combined with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook endpoint section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Bot identity section
    #[serde(default)]
    pub bot: BotSection,

    /// Deferred delivery section
    #[serde(default)]
    pub relay: RelaySection,
}

/// Webhook endpoint section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Slack webhook URL
    pub url: Option<String>,

    /// Skip TLS certificate verification
    #[serde(default)]
    pub ignore_tls: bool,

    /// Synchronous send timeout in seconds
    pub timeout: Option<u64>,
}

/// Bot identity section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BotSection {
    /// Display name
    pub name: Option<String>,

    /// Emoji code or image URL
    pub icon: Option<String>,

    /// Default channel
    pub channel: Option<String>,

    /// Slack markdown formatting
    pub markdown: Option<bool>,
}

/// Deferred delivery section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelaySection {
    /// Relay endpoint
    pub url: Option<String>,

    /// This host's own relay endpoint
    pub self_url: Option<String>,

    /// Allow deferred sends
    #[serde(default)]
    pub allow_async: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# slackhook configuration file

[webhook]
# Slack incoming-webhook URL (required)
# url = "https://hooks.slack.com/services/XXXXXXXXX/YYYYYYYYY/ZZZZZZZZZZZZZZZZZZZZZZZZ"

# Skip TLS certificate verification (development only)
# ignore_tls = false

# Synchronous send timeout in seconds (default: 30)
# timeout = 30

[bot]
# Display name. Empty uses Slack's default.
# name = "Robo"

# Emoji code or image URL. Anything containing "http" is treated as a URL.
# icon = ":ghost:"

# Default channel (default: "#-lobby-")
# channel = "#-lobby-"

# Slack markdown formatting (default: true)
# markdown = true

[relay]
# Endpoint that performs deferred sends on our behalf
# url = "https://app.example.com/slack-relay"

# Our own relay endpoint, used when url is not set
# self_url = "https://app.example.com/slack-relay"

# Allow deferred sends (default: false)
# allow_async = false
"##
    .to_string()
}
