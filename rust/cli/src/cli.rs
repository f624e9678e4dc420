//! Command-line argument definitions (clap derive).

use clap::{Parser, Subcommand};

/// Fifty-point card game: keep the running sum at or below 50.
#[derive(Parser, Debug)]
#[command(
    name = "fifty",
    version,
    about = "Fifty-point elimination card game",
    long_about = None
)]
pub struct FiftyCli {
    /// Print engine events (deals, eliminations, recycling) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive game against computer opponents
    Play {
        /// Number of computer opponents (1-3)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        opponents: Option<u8>,
        /// Shuffle seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,
    },
    /// Play many computer-only games and report the results
    Sim {
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        opponents: Option<u8>,
        /// Seed of the first game; game `i` uses `seed + i`
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal a game and print the opening position
    Deal {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        opponents: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the position as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
