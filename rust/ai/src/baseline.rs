//! Baseline policy: play the first card that fits.

use crate::AIOpponent;
use fifty_engine::cards::Card;
use fifty_engine::rules::{fits, ACE_VALUES};

/// Deterministic first-fit opponent.
///
/// Scans the hand in order and returns the first card that keeps the sum at
/// or below 50, counting an ace as ten. An ace that only fits as one is held
/// back and played only if nothing else qualifies. Hand order is part of the
/// contract: the same hand and sum always give the same card.
///
/// # Example
///
/// ```rust
/// use fifty_ai::baseline::BaselineAI;
/// use fifty_ai::AIOpponent;
/// use fifty_engine::cards::Card;
///
/// let ai = BaselineAI::new();
/// let hand: [Card; 2] = ["Ah".parse().unwrap(), "10c".parse().unwrap()];
/// // ace only fits as 1 here; the ten doesn't fit at all
/// assert_eq!(ai.choose_move(&hand, 45), Some(hand[0]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }
}

/// The baseline selection rule as a free function.
pub fn choose_move(hand: &[Card], current_sum: i32) -> Option<Card> {
    let mut fallback_ace = None;
    for card in hand {
        if card.is_ace() {
            if fits(current_sum, ACE_VALUES[1]) {
                return Some(*card);
            }
            if fallback_ace.is_none() && fits(current_sum, ACE_VALUES[0]) {
                fallback_ace = Some(*card);
            }
        } else if fits(current_sum, card.table_value()) {
            return Some(*card);
        }
    }
    fallback_ace
}

impl AIOpponent for BaselineAI {
    fn choose_move(&self, hand: &[Card], current_sum: i32) -> Option<Card> {
        choose_move(hand, current_sum)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
