//! Validated configuration after merging CLI and TOML sources.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::webhook::{DeliveryContext, WebhookConfig};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Sender settings
    pub webhook: WebhookConfig,

    /// Deferred delivery switches
    pub context: DeliveryContext,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relay = self
            .webhook
            .relay_url()
            .or(self.context.self_url.as_ref())
            .map_or_else(|| "none".to_string(), ToString::to_string);

        write!(
            f,
            "Config {{ url: {}, channel: {}, bot: {:?}, ignore_tls: {}, markdown: {}, \
             timeout: {}s, allow_async: {}, relay: {} }}",
            redact(self.webhook.url()),
            self.webhook.channel(),
            self.webhook.bot_name(),
            self.webhook.ignore_tls(),
            self.webhook.markdown(),
            self.webhook.timeout().unwrap_or_default().as_secs(),
            self.context.allow_async,
            relay,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook URL is missing
    /// - A URL is invalid
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;

        let bot = toml.map(|t| &t.bot);
        let bot_name = cli
            .bot_name
            .as_deref()
            .or_else(|| bot.and_then(|b| b.name.as_deref()))
            .unwrap_or_default();
        let bot_icon = cli
            .bot_icon
            .as_deref()
            .or_else(|| bot.and_then(|b| b.icon.as_deref()))
            .unwrap_or_default();
        let channel = cli
            .channel
            .as_deref()
            .or_else(|| bot.and_then(|b| b.channel.as_deref()))
            .unwrap_or(defaults::CHANNEL);

        // --no-markdown can only turn markdown off
        let markdown = !cli.no_markdown
            && bot
                .and_then(|b| b.markdown)
                .unwrap_or(defaults::MARKDOWN);

        // Flags only enable
        let ignore_tls = cli.ignore_tls || toml.is_some_and(|t| t.webhook.ignore_tls);
        let allow_async = cli.allow_async || toml.is_some_and(|t| t.relay.allow_async);

        let mut webhook = WebhookConfig::new(url)
            .with_bot_name(bot_name)
            .with_bot_icon(bot_icon)
            .with_channel(channel)
            .with_ignore_tls(ignore_tls)
            .with_markdown(markdown)
            .with_timeout(timeout);

        let relay_url = cli
            .relay_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.relay.url.as_deref()));
        if let Some(relay_url) = relay_url {
            webhook = webhook.with_relay_url(parse_url(field::RELAY_URL, relay_url)?);
        }

        let mut context = DeliveryContext::new().with_allow_async(allow_async);

        let self_url = cli
            .self_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.relay.self_url.as_deref()));
        if let Some(self_url) = self_url {
            context = context.with_self_url(parse_url(field::SELF_URL, self_url)?);
        }

        Ok(Self {
            webhook,
            context,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set webhook.url in config file")
            })?;

        parse_url(field::URL, url_str)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let Some(seconds) = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.webhook.timeout))
        else {
            return Ok(defaults::timeout());
        };

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT,
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        url: value.to_string(),
        reason: e.to_string(),
    })
}

/// Hides the secret path of a Slack webhook URL in logs.
fn redact(url: &Url) -> String {
    format!("{}://{}/…", url.scheme(), url.host_str().unwrap_or_default())
}
