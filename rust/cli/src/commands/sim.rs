//! Simulation command handler: computer-only games in bulk.
//!
//! Every seat, including "Player 1", is driven by the configured policy with
//! no thinking delay. Game `i` is dealt with `seed + i`, so a run is fully
//! reproducible from its base seed. After each game the 52 cards are counted
//! across deck, hands and table.

use crate::config::GameSettings;
use crate::error::{BatchValidationError, CliError};
use crate::session::{apply_ai_move, settle_turn};
use crate::ui;
use fifty_ai::{AIOpponent, create_ai};
use fifty_engine::cards::{Card, full_deck};
use fifty_engine::engine::Engine;
use fifty_engine::player::{HUMAN_NAME, ai_name};
use std::io::Write;

/// Moves after which a game is abandoned as unfinished.
pub const MAX_TURNS: u32 = 2000;

/// Result of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Option<String>,
    pub turns: u32,
}

/// Handle the sim command.
///
/// # Examples
///
/// ```ignore
/// let settings = config::load()?.settings(Some(3), Some(42), None);
/// handle_sim_command(500, &settings, &mut io::stdout(), &mut io::stderr())?;
/// ```
pub fn handle_sim_command(
    games: u32,
    settings: &GameSettings,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let ai = create_ai(&settings.ai)
        .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", settings.ai)))?;

    writeln!(
        out,
        "sim: games={} opponents={} seed={} ai={}",
        games,
        settings.opponents,
        settings.seed,
        ai.name()
    )?;

    let mut seats: Vec<(String, u32)> = std::iter::once(HUMAN_NAME.to_string())
        .chain((1..=settings.opponents).map(ai_name))
        .map(|name| (name, 0))
        .collect();
    let mut unfinished = 0u32;
    let mut total_turns = 0u64;
    let mut violations = Vec::new();

    for i in 0..games {
        let seed = settings.seed.wrapping_add(u64::from(i));
        let (outcome, engine) = play_one_game(seed, settings.opponents, ai.as_ref())?;
        total_turns += u64::from(outcome.turns);
        match outcome.winner {
            Some(name) => {
                if let Some(seat) = seats.iter_mut().find(|(n, _)| *n == name) {
                    seat.1 += 1;
                }
            }
            None => unfinished += 1,
        }
        if let Err(message) = check_conservation(&engine) {
            violations.push(BatchValidationError {
                item_context: i + 1,
                message,
            });
        }
    }

    for (name, wins) in &seats {
        writeln!(out, "{}: {} wins", name, wins)?;
    }
    writeln!(out, "Unfinished: {}", unfinished)?;
    writeln!(
        out,
        "Average turns: {:.1}",
        total_turns as f64 / f64::from(games)
    )?;

    if unfinished > 0 {
        ui::display_warning(
            err,
            &format!("{} game(s) stopped after {} turns", unfinished, MAX_TURNS),
        )?;
    }
    if !violations.is_empty() {
        for v in &violations {
            ui::write_error(err, &format!("game {}", v))?;
        }
        return Err(CliError::Engine(format!(
            "card conservation violated in {} game(s)",
            violations.len()
        )));
    }
    Ok(())
}

/// Plays one computer-only game to the end or to [`MAX_TURNS`].
pub fn play_one_game(
    seed: u64,
    opponents: usize,
    ai: &dyn AIOpponent,
) -> Result<(GameOutcome, Engine), CliError> {
    let mut engine = Engine::new(Some(seed));
    engine.start(opponents)?;
    settle_turn(&mut engine);

    let mut turns = 0;
    while !engine.is_over() && turns < MAX_TURNS {
        apply_ai_move(&mut engine, ai)?;
        turns += 1;
    }
    let winner = engine.winner().map(|p| p.name().to_string());
    tracing::debug!(seed, turns, winner = ?winner, "simulated game finished");
    Ok((GameOutcome { winner, turns }, engine))
}

/// Checks that deck, hands and table together hold each of the 52 cards once.
pub fn check_conservation(engine: &Engine) -> Result<(), String> {
    let mut all: Vec<Card> = engine.deck().cards().copied().collect();
    for p in engine.players() {
        all.extend_from_slice(p.hand_cards());
    }
    all.extend_from_slice(engine.table().history());
    let count = all.len();
    all.sort();
    all.dedup();
    let mut expected = full_deck();
    expected.sort();
    if count == expected.len() && all == expected {
        Ok(())
    } else {
        Err(format!(
            "{} cards accounted for, {} distinct",
            count,
            all.len()
        ))
    }
}
