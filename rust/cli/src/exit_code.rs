//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Any reported error: bad arguments, bad configuration, engine failure.
pub const ERROR: i32 = 2;

/// Input ended in the middle of an interactive game.
pub const INTERRUPTED: i32 = 130;
