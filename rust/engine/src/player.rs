use crate::cards::Card;
use crate::hand::Hand;
use serde::{Deserialize, Serialize};

/// Name given to the single human seat.
pub const HUMAN_NAME: &str = "Player 1";

/// Name of the AI seat `n` (1-based).
pub fn ai_name(n: usize) -> String {
    format!("CPU {}", n)
}

/// Represents a seated player with a name, a human/AI flag and a hand.
/// Only the engine can change the hand; callers get read-only accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    is_human: bool,
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, is_human: bool) -> Self {
        Self {
            name: name.into(),
            is_human,
            hand: Hand::new(),
        }
    }

    pub fn with_hand(name: impl Into<String>, is_human: bool, hand: Hand) -> Self {
        Self {
            name: name.into(),
            is_human,
            hand,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_human(&self) -> bool {
        self.is_human
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.size()
    }

    pub fn hand_cards(&self) -> &[Card] {
        self.hand.cards()
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            name: self.name.clone(),
            is_human: self.is_human,
            hand_size: self.hand.size(),
            hand: self.hand.cards().to_vec(),
        }
    }
}

/// Owned copy of a player's visible state, part of a [`crate::engine::Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub is_human: bool,
    pub hand_size: usize,
    pub hand: Vec<Card>,
}
