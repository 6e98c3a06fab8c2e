//! tabmap CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tabmap_cli::logging::{LogConfig, LogFormat, init_logging};
use tabmap_cli::pipeline::failure_response;
use tabmap_cli::types::RunReport;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_contacts_command, run_transactions_command};
use crate::summary::{print_failure, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let (result, json) = match &cli.command {
        Command::Transactions(args) => (run_transactions_command(args), args.source.json),
        Command::Contacts(args) => (run_contacts_command(args), args.source.json),
    };
    std::process::exit(report(&result, json));
}

/// Print the outcome and return the exit code.
fn report(result: &anyhow::Result<RunReport>, json: bool) -> i32 {
    let (response, exit_code) = match result {
        Ok(run) => (run.response(), 0),
        Err(error) => (failure_response(error), 1),
    };
    if json {
        match serde_json::to_string_pretty(&response) {
            Ok(text) => println!("{text}"),
            Err(error) => {
                eprintln!("error: failed to serialize response: {error}");
                return 1;
            }
        }
        return exit_code;
    }
    match result {
        Ok(run) => print_summary(run),
        Err(_) => print_failure(&response),
    }
    exit_code
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
