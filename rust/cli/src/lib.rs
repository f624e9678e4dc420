//! # Fifty CLI Library
//!
//! Command-line front end for the fifty-point card game: interactive play
//! against computer opponents, bulk simulation, deal inspection and
//! configuration display.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game against 1-3 computer opponents
//! - `sim`: Play many computer-only games and report winners per seat
//! - `deal`: Deal a game and print the opening position (text or JSON)
//! - `cfg`: Display current configuration settings and their sources

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod session;
pub mod ui;
pub mod validation;

use cli::{Commands, FiftyCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses `args` (program name first) and dispatches to the subcommand
/// handler. Returns the process exit code: `0` for success, `2` for errors,
/// `130` when input ends in the middle of a game.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["fifty", "deal", "--seed", "42"];
/// let code = fifty_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FiftyCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: fifty <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: fifty --help");
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            write_or_exit!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            opponents,
            seed,
            think_ms,
        } => {
            let settings = config::load()?.settings(opponents, seed, think_ms);
            // stdin works both as a TTY and piped
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(&settings, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            games,
            opponents,
            seed,
        } => {
            let settings = config::load()?.settings(opponents, seed, None);
            handle_sim_command(games, &settings, out, err)
        }
        Commands::Deal {
            opponents,
            seed,
            json,
        } => {
            let settings = config::load()?.settings(opponents, seed, None);
            handle_deal_command(settings.opponents, settings.seed, json, out)
        }
    }
}
