//! `stitch`: generate a feature into an existing web application.
//!
//! Stdout carries the run report; logs and errors go to stderr.
//!
//! | Exit | Meaning                                              |
//! |------|------------------------------------------------------|
//! |  0   | Success, `--help`, `--version`                       |
//! |  1   | Rendering or I/O failure                             |
//! |  2   | Bad arguments or attributes                          |
//! |  3   | Application root, setup file, marker or anchor missing |
//! |  4   | Configuration or template directory problem          |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // STITCH__* variables may come from a .env next to the application.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout with exit 0, usage errors to stderr.
            let _ = e.print();
            return ExitCode::from(parse_exit_code(&e));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;
    let color = !cli.global.no_color;

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            };
            return handle_error(err, verbose, color);
        }
    };
    debug!(?config, "Configuration loaded");

    let color = color && !config.output.no_color;
    let output = OutputManager::new(&cli.global, &config);

    match run(cli.command, config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e, verbose, color),
    }
}

#[instrument(skip_all)]
fn run(command: Commands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match command {
        Commands::Auth(args) => commands::auth::execute(args, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

fn parse_exit_code(err: &clap::Error) -> u8 {
    u8::try_from(err.exit_code()).unwrap_or(2)
}

/// Log `err`, print it with its suggestions on stderr and pick the exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    let msg = if color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn help_and_version_exit_zero() {
        for flag in ["--help", "--version"] {
            let err = Cli::try_parse_from(["stitch", flag]).unwrap_err();
            assert_eq!(parse_exit_code(&err), 0, "{flag}");
        }
    }

    #[test]
    fn usage_errors_exit_two() {
        let err = Cli::try_parse_from(["stitch", "auth", "--bogus"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 2);
        let err = Cli::try_parse_from(["stitch"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 2);
    }
}
