//! Configuration layer for slackhook.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! # Boolean Flag Semantics
//!
//! `--ignore-tls` and `--allow-async` use OR semantics: `true` in either
//! source wins, and the CLI cannot turn a TOML `true` back off.
//! `--no-markdown` works the other way round: it can only disable
//! markdown, never enable it over a TOML `markdown = false`.
//!
//! # Relay Requests
//!
//! The `relay` subcommand does not read this configuration at all. The
//! destination and TLS flag travel with the hand-off itself.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
