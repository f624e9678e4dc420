//! # Play Command
//!
//! Interactive game on stdin/stdout: the human holds seat 1, computer
//! opponents fill the rest. Each computer move is computed on the session's
//! worker thread after the configured thinking pause.

use crate::config::GameSettings;
use crate::error::CliError;
use crate::formatters::{format_card, format_event, format_hand};
use crate::io_utils::read_stdin_line;
use crate::session::{GameSession, SessionError, TurnEvent};
use crate::ui;
use crate::validation::{ParseResult, parse_ace_value, parse_move_input};
use fifty_ai::create_ai;
use fifty_engine::cards::Card;
use fifty_engine::rules::Play;
use std::io::{BufRead, Write};

/// What the human asked for at the prompt.
enum HumanInput {
    Play(Play),
    Quit,
}

/// Handle the play command.
///
/// Runs one game to completion. Typing `q` ends the game early and still
/// counts as success; running out of input mid-game is
/// [`CliError::Interrupted`].
pub fn handle_play_command(
    settings: &GameSettings,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let ai = create_ai(&settings.ai)
        .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", settings.ai)))?;

    writeln!(
        out,
        "play: opponents={} seed={} ai={}",
        settings.opponents,
        settings.seed,
        ai.name()
    )?;

    let (session, opening) =
        GameSession::start(settings.seed, settings.opponents, ai, settings.think)?;
    write_events(out, &opening)?;

    while !session.is_over()? {
        if session.human_to_move()? {
            let (sum, last, hand) = session.with_engine(|e| {
                let hand = e
                    .current_player()
                    .map(|p| p.hand_cards().to_vec())
                    .unwrap_or_default();
                (e.current_sum(), e.last_played(), hand)
            })?;
            let last = last
                .as_ref()
                .map(format_card)
                .unwrap_or_else(|| "-".to_string());
            writeln!(out)?;
            writeln!(out, "Sum: {}   Last card: {}", sum, last)?;
            writeln!(out, "Your hand: {}", format_hand(&hand))?;

            match read_human_move(&hand, stdin, out, err)? {
                HumanInput::Quit => {
                    writeln!(out, "Game abandoned.")?;
                    return Ok(());
                }
                HumanInput::Play(play) => match session.play_human(play) {
                    Ok(events) => write_events(out, &events)?,
                    Err(SessionError::Game(e)) => ui::write_error(err, &e.to_string())?,
                    Err(e) => return Err(e.into()),
                },
            }
        } else {
            let name = session.with_engine(|e| {
                e.current_player()
                    .map(|p| p.name().to_string())
                    .unwrap_or_default()
            })?;
            writeln!(out, "{} is thinking...", name)?;
            let events = session.play_ai_turn()?;
            write_events(out, &events)?;
        }
    }

    let winner = session.with_engine(|e| e.winner().map(|p| (p.name().to_string(), p.is_human())))?;
    match winner {
        Some((_, true)) => writeln!(out, "You win!")?,
        Some((name, false)) => writeln!(out, "{} wins.", name)?,
        None => writeln!(out, "No winner.")?,
    }
    Ok(())
}

fn write_events(out: &mut dyn Write, events: &[TurnEvent]) -> Result<(), CliError> {
    for event in events {
        writeln!(out, "{}", format_event(event))?;
    }
    Ok(())
}

/// Prompts until the input names a card (and, for an ace, its value) or a
/// quit. Only syntax is checked here; the engine judges legality.
fn read_human_move(
    hand: &[Card],
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<HumanInput, CliError> {
    loop {
        ui::prompt(
            out,
            &format!("Your move (1-{}, a card like 7h, q to quit): ", hand.len()),
        )?;
        let line = read_stdin_line(stdin)
            .ok_or_else(|| CliError::Interrupted("input closed mid-game".into()))?;
        let card = match parse_move_input(&line, hand) {
            ParseResult::Card(card) => card,
            ParseResult::Quit => return Ok(HumanInput::Quit),
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };
        if !card.is_ace() {
            return Ok(HumanInput::Play(Play::Card(card)));
        }
        loop {
            ui::prompt(out, &format!("Play {} as 1 or 10: ", format_card(&card)))?;
            let line = read_stdin_line(stdin)
                .ok_or_else(|| CliError::Interrupted("input closed mid-game".into()))?;
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Ok(HumanInput::Quit);
            }
            match parse_ace_value(&line) {
                Ok(value) => return Ok(HumanInput::Play(Play::Ace(card, value))),
                Err(msg) => ui::write_error(err, &msg)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    fn settings(seed: u64, opponents: usize) -> GameSettings {
        GameSettings {
            opponents,
            seed,
            think: Duration::ZERO,
            ai: "baseline".into(),
        }
    }

    fn run_with_input(settings: &GameSettings, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(settings, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn quit_at_the_first_prompt_succeeds() {
        let (result, out, err) = run_with_input(&settings(42, 1), "q\n");
        assert!(result.is_ok());
        assert!(out.contains("play: opponents=1 seed=42 ai=BaselineAI"));
        assert!(out.contains("Your hand: 1) "));
        assert!(out.contains("Game abandoned."));
        assert!(err.is_empty());
    }

    #[test]
    fn eof_mid_game_is_an_interruption() {
        let (result, _, _) = run_with_input(&settings(42, 1), "");
        assert!(matches!(result, Err(CliError::Interrupted(_))));
    }

    #[test]
    fn bad_input_reprompts() {
        let (result, out, err) = run_with_input(&settings(7, 2), "hello\n9\nq\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Your move").count(), 3);
        assert!(err.contains("Unrecognized card"));
        assert!(err.contains("out of range"));
    }

    #[test]
    fn card_not_in_hand_is_reported_and_reprompted() {
        let mut engine = fifty_engine::engine::Engine::new(Some(5));
        engine.start(1).unwrap();
        let held = engine.players()[0].hand_cards().to_vec();
        let missing = fifty_engine::cards::full_deck()
            .into_iter()
            .find(|c| !held.contains(c) && !c.is_ace())
            .unwrap();

        let input = format!("{}\nq\n", missing);
        let (result, _, err) = run_with_input(&settings(5, 1), &input);
        assert!(result.is_ok());
        assert!(err.contains("does not hold"), "{}", err);
    }

    #[test]
    fn playing_position_one_moves_the_game_on() {
        let (result, out, _) = run_with_input(&settings(11, 1), "1\n1\nq\n");
        assert!(result.is_ok());
        assert!(out.contains("Player 1 plays "));
        assert!(out.contains("CPU 1 is thinking..."));
        assert!(out.contains("CPU 1 plays "));
    }

    #[test]
    fn unknown_ai_is_a_config_error() {
        let mut s = settings(1, 1);
        s.ai = "oracle".into();
        let (result, _, _) = run_with_input(&s, "q\n");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn bad_opponent_count_is_invalid_input() {
        let (result, _, _) = run_with_input(&settings(1, 4), "q\n");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
