//! Jump CLI Binary
//!
//! Command-line interface for the jump bookmark store.

use clap::Parser;
use jump::cli::{format_error, format_success, map_error, Cli, CommandOutput, Commands, RunContext};
use jump::config::{ConfigLoader, JumpConfig};
use jump::error::BookmarkError;
use jump::logging::{init_logging, LoggingConfig};
use std::io::IsTerminal;
use std::process;
use tracing::info;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };
    let color_stdout = std::io::stdout().is_terminal();
    let color_stderr = std::io::stderr().is_terminal();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&map_error(&e), color_stderr));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let command = cli.command.clone().unwrap_or(Commands::Help);
    info!(?command, "Jump CLI starting");

    let context = match RunContext::new(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            info!("Error initializing run context: {}", e);
            eprintln!("{}", format_error(&map_error(&e), color_stderr));
            process::exit(1);
        }
    };

    match context.execute(&command) {
        Ok(output) => {
            info!("Command completed successfully");
            match output {
                CommandOutput::Success(message) => {
                    println!("{}", format_success(&message, color_stdout))
                }
                CommandOutput::Plain(text) => println!("{}", text),
                CommandOutput::Degraded { warning, text } => {
                    eprintln!("{}", format_error(&warning, color_stderr));
                    println!("{}", text);
                }
                CommandOutput::Silent => {}
            }
        }
        Err(e) => {
            info!("Command failed: {}", e);
            eprintln!("{}", format_error(&map_error(&e), color_stderr));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> Result<JumpConfig, BookmarkError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &JumpConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
