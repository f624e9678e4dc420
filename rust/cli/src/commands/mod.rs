//! Command handler modules for the fifty CLI.
//!
//! Each subcommand lives in its own module with a
//! `handle_COMMAND_command(...) -> Result<(), CliError>` entry point. Output
//! streams and, for `play`, the input stream are passed in so handlers can be
//! driven from tests.

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
