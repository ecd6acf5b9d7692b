//! slackhook: Slack incoming-webhook client
//!
//! Entry point for the slackhook application.

use slackhook::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::io::Read;
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};
use run::SendOptions;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { ref output } => handle_init(output),
        Command::Relay => handle_relay(cli.verbose),
        Command::Send {
            ref text,
            ref title,
            ref to,
            deferred,
        } => {
            let options = SendOptions {
                text: text.clone(),
                title: title.clone(),
                channel: to.clone(),
                deferred,
            };
            handle_send(&cli, options)
        }
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `send` subcommand.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn handle_send(cli: &Cli, options: SendOptions) -> ExitCode {
    let config = match ValidatedConfig::load(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    block_on(run::execute_send(config, options))
}

/// Handles the `relay` subcommand.
///
/// Reads the whole form body from stdin, performs the relayed send and
/// exits. The relay never runs again for the same input.
///
/// Excluded from coverage - requires async runtime and stdin.
#[cfg(not(tarpaulin_include))]
fn handle_relay(verbose: bool) -> ExitCode {
    setup_tracing(verbose);

    let mut body = Vec::new();
    if let Err(e) = std::io::stdin().read_to_end(&mut body) {
        tracing::error!("{}", run::RunError::ReadInput(e));
        return exit_code::runtime_error();
    }

    block_on(run::execute_relay(body))
}

/// Runs a future to completion on a fresh Tokio runtime.
#[cfg(not(tarpaulin_include))]
fn block_on(future: impl std::future::Future<Output = Result<(), run::RunError>>) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(future) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}
