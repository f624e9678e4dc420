//! Deal command handler: starts a game and prints the opening position.

use crate::error::CliError;
use crate::formatters::format_snapshot;
use fifty_engine::engine::Engine;
use std::io::Write;

/// Handle the deal command.
///
/// Deals a fresh game for `opponents` computer players and prints every
/// hand, the opening card and the starting sum, as text or as JSON.
pub fn handle_deal_command(
    opponents: usize,
    seed: u64,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut eng = Engine::new(Some(seed));
    eng.start(opponents)?;
    let snapshot = eng.snapshot();

    if json {
        let doc = serde_json::json!({
            "seed": seed,
            "state": snapshot,
        });
        let text = serde_json::to_string_pretty(&doc).map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
    } else {
        writeln!(out, "Seed: {}", seed)?;
        writeln!(out, "{}", format_snapshot(&snapshot))?;
    }
    Ok(())
}
