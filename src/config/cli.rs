//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// slackhook: Slack incoming-webhook client
///
/// Posts messages to a Slack webhook, directly or through a deferred relay.
#[derive(Debug, Parser)]
#[command(name = "slackhook")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Slack webhook URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Bot display name
    #[arg(long = "bot-name", global = true)]
    pub bot_name: Option<String>,

    /// Bot icon: emoji code (":ghost:") or image URL
    #[arg(long = "bot-icon", global = true)]
    pub bot_icon: Option<String>,

    /// Default channel
    #[arg(long, global = true)]
    pub channel: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long = "ignore-tls", global = true)]
    pub ignore_tls: bool,

    /// Disable Slack markdown formatting
    #[arg(long = "no-markdown", global = true)]
    pub no_markdown: bool,

    /// Relay endpoint for deferred sends
    #[arg(long = "relay-url", global = true)]
    pub relay_url: Option<String>,

    /// This host's own relay endpoint, used when no relay URL is set
    #[arg(long = "self-url", global = true)]
    pub self_url: Option<String>,

    /// Allow deferred sends
    #[arg(long = "allow-async", global = true)]
    pub allow_async: bool,

    /// Timeout for synchronous sends in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for slackhook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "slackhook.toml")]
        output: PathBuf,
    },

    /// Send a message
    Send {
        /// Message text
        text: String,

        /// Title appended to the bot name
        #[arg(long)]
        title: Option<String>,

        /// Channel for this message only
        #[arg(long = "to", id = "to", value_name = "CHANNEL")]
        to: Option<String>,

        /// Hand the message to the relay instead of waiting for Slack
        #[arg(long)]
        deferred: bool,
    },

    /// Handle a relay hand-off read as a form body from stdin
    Relay,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
