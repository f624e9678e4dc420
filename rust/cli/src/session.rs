//! Interactive game session: one engine behind a mutex, computer turns on a
//! worker thread.
//!
//! The engine itself is single-threaded. Every mutation goes through the
//! session's lock, so a computer move computed on the worker is applied in one
//! locked step, after the thinking pause has elapsed.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use fifty_ai::AIOpponent;
use fifty_engine::cards::Card;
use fifty_engine::engine::{Engine, Snapshot};
use fifty_engine::errors::GameError;
use fifty_engine::rules::Play;
use thiserror::Error;

/// Something the presentation layer should report after a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    Played {
        player: String,
        card: Card,
        value: i32,
        sum: i32,
    },
    Eliminated {
        player: String,
        returned_cards: usize,
    },
    GameOver {
        winner: String,
    },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid action: {0}")]
    InvalidAction(String),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Game engine error: {0}")]
    EngineError(String),
    #[error("Game engine lock poisoned")]
    EnginePoisoned,
}

pub struct GameSession {
    engine: Arc<Mutex<Engine>>,
    ai: Arc<dyn AIOpponent>,
    think: Duration,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("ai", &self.ai.name())
            .field("think", &self.think)
            .finish()
    }
}

impl GameSession {
    /// Deals a new game and settles the opening turn. Returns the session
    /// and any events produced before the first move (normally none).
    pub fn start(
        seed: u64,
        opponents: usize,
        ai: Box<dyn AIOpponent>,
        think: Duration,
    ) -> Result<(Self, Vec<TurnEvent>), SessionError> {
        let mut engine = Engine::new(Some(seed));
        engine.start(opponents)?;
        let events = settle_turn(&mut engine);
        Ok((Self::from_engine(engine, ai, think), events))
    }

    /// Wraps an engine that is already in play.
    pub fn from_engine(engine: Engine, ai: Box<dyn AIOpponent>, think: Duration) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            ai: Arc::from(ai),
            think,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Engine>, SessionError> {
        self.engine.lock().map_err(|_| SessionError::EnginePoisoned)
    }

    /// Runs `f` against the engine under the session lock.
    pub fn with_engine<R>(&self, f: impl FnOnce(&Engine) -> R) -> Result<R, SessionError> {
        let engine = self.lock()?;
        Ok(f(&engine))
    }

    pub fn snapshot(&self) -> Result<Snapshot, SessionError> {
        self.with_engine(Engine::snapshot)
    }

    pub fn is_over(&self) -> Result<bool, SessionError> {
        self.with_engine(Engine::is_over)
    }

    /// Whether the seat to move is the human one. `false` once the game is over.
    pub fn human_to_move(&self) -> Result<bool, SessionError> {
        self.with_engine(|e| !e.is_over() && e.current_player().is_some_and(|p| p.is_human()))
    }

    /// Applies the human's move, then passes the turn on.
    ///
    /// A rejected move returns [`SessionError::Game`] and leaves the game as
    /// it was, so the caller can prompt again.
    pub fn play_human(&self, play: Play) -> Result<Vec<TurnEvent>, SessionError> {
        let mut engine = self.lock()?;
        let player = match engine.current_player() {
            Some(p) if p.is_human() => p.name().to_string(),
            Some(p) => {
                return Err(SessionError::InvalidAction(format!(
                    "it is {}'s turn",
                    p.name()
                )));
            }
            None => return Err(SessionError::InvalidAction("the game is over".into())),
        };
        let played = engine.play(play)?;
        let mut events = vec![TurnEvent::Played {
            player,
            card: played.card,
            value: played.value,
            sum: engine.current_sum(),
        }];
        events.extend(finish_turn(&mut engine));
        Ok(events)
    }

    /// Starts the computer's turn on a worker thread.
    ///
    /// The worker sleeps for the thinking delay without holding the lock,
    /// then chooses and applies the move in one locked step.
    pub fn spawn_ai_turn(&self) -> JoinHandle<Result<Vec<TurnEvent>, SessionError>> {
        let engine = Arc::clone(&self.engine);
        let ai = Arc::clone(&self.ai);
        let think = self.think;
        thread::spawn(move || {
            if !think.is_zero() {
                thread::sleep(think);
            }
            let mut engine = engine.lock().map_err(|_| SessionError::EnginePoisoned)?;
            if engine.current_player().is_none_or(|p| p.is_human()) {
                return Err(SessionError::InvalidAction(
                    "no computer player to move".into(),
                ));
            }
            apply_ai_move(&mut engine, ai.as_ref())
        })
    }

    /// Runs a computer turn and waits for it.
    pub fn play_ai_turn(&self) -> Result<Vec<TurnEvent>, SessionError> {
        self.spawn_ai_turn()
            .join()
            .map_err(|_| SessionError::EngineError("AI worker panicked".into()))?
    }
}

/// Lets `ai` choose and play for the current seat, then passes the turn on.
///
/// The policy is only consulted for a player who was already checked able to
/// move, so a `None` here is an internal fault.
pub fn apply_ai_move(
    engine: &mut Engine,
    ai: &dyn AIOpponent,
) -> Result<Vec<TurnEvent>, SessionError> {
    let player = engine
        .current_player()
        .map(|p| p.name().to_string())
        .ok_or_else(|| SessionError::InvalidAction("the game is over".into()))?;
    let card = ai.get_move(engine).ok_or_else(|| {
        SessionError::EngineError(format!("{} found no move for {}", ai.name(), player))
    })?;
    let value = engine.play_resolved(card)?;
    tracing::debug!(player = %player, card = %card, value, ai = ai.name(), "computer move");

    let mut events = vec![TurnEvent::Played {
        player,
        card,
        value,
        sum: engine.current_sum(),
    }];
    events.extend(finish_turn(engine));
    Ok(events)
}

/// Advances the turn after an accepted move and settles eliminations.
pub fn finish_turn(engine: &mut Engine) -> Vec<TurnEvent> {
    engine.advance_turn();
    settle_turn(engine)
}

/// Checks the seat to move, eliminating stuck players until someone can
/// move or one player is left.
///
/// An elimination already moves the turn to the next seat, so the turn is
/// not advanced again here.
pub fn settle_turn(engine: &mut Engine) -> Vec<TurnEvent> {
    let mut events = Vec::new();
    loop {
        if engine.is_over() {
            if let Some(winner) = engine.winner() {
                events.push(TurnEvent::GameOver {
                    winner: winner.name().to_string(),
                });
            }
            return events;
        }
        let Some((name, held)) = engine
            .current_player()
            .map(|p| (p.name().to_string(), p.hand_size()))
        else {
            return events;
        };
        if engine.check_current_player_can_move() {
            return events;
        }
        events.push(TurnEvent::Eliminated {
            player: name,
            returned_cards: held,
        });
    }
}
