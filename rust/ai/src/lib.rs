//! # fifty-ai: Computer Opponents for the Fifty-Point Game
//!
//! Move selection for non-human seats. Policies only name a card; the engine
//! decides the value an ace is scored at.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`baseline`] - Deterministic first-fit policy
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use fifty_ai::{create_ai, AIOpponent};
//! use fifty_engine::engine::Engine;
//!
//! let ai = create_ai("baseline").expect("baseline is always available");
//!
//! let mut engine = Engine::new(Some(42));
//! engine.start(1).expect("valid setup");
//! engine.advance_turn();
//!
//! if engine.check_current_player_can_move() {
//!     let card = ai.get_move(&engine).expect("player can move");
//!     engine.play_resolved(card).expect("policy picks legal cards");
//! }
//! ```
//!
//! ## AI Types
//!
//! - `"baseline"` - first playable card in hand order, aces as a last resort
//!   only when they can't be played as ten

use fifty_engine::cards::Card;
use fifty_engine::engine::Engine;

pub mod baseline;

/// Interface for computer players.
///
/// # Example Implementation
///
/// ```rust
/// use fifty_ai::AIOpponent;
/// use fifty_engine::cards::Card;
///
/// struct LastCard;
///
/// impl AIOpponent for LastCard {
///     fn choose_move(&self, hand: &[Card], current_sum: i32) -> Option<Card> {
///         hand.iter()
///             .rev()
///             .copied()
///             .find(|c| fifty_engine::rules::is_playable(c, current_sum))
///     }
///
///     fn name(&self) -> &str {
///         "LastCard"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Picks a card from `hand` to play on `current_sum`, or `None` when no
    /// card fits. Must never return a card that the engine would reject.
    fn choose_move(&self, hand: &[Card], current_sum: i32) -> Option<Card>;

    /// Picks a card for whoever is to move in `engine`.
    fn get_move(&self, engine: &Engine) -> Option<Card> {
        let player = engine.current_player()?;
        self.choose_move(player.hand_cards(), engine.current_sum())
    }

    fn name(&self) -> &str;
}

/// Names accepted by [`create_ai`].
pub const AI_KINDS: &[&str] = &["baseline"];

/// Factory function to create AI opponents by type string.
///
/// An empty string selects the baseline policy. Unknown kinds return `None`.
///
/// # Example
///
/// ```rust
/// use fifty_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(ai_type: &str) -> Option<Box<dyn AIOpponent>> {
    match ai_type {
        "" | "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        _ => None,
    }
}
