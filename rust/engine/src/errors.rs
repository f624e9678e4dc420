use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Invalid move: {0}")]
    InvalidMove(#[from] MoveError),
    #[error("Invalid setup: {0}")]
    InvalidSetup(String),
}

/// Why a move was rejected. Every variant leaves the game untouched.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MoveError {
    #[error("Aces must be played with a chosen value (1 or 10)")]
    AceNeedsValue,
    #[error("{0} is not an ace")]
    NotAnAce(Card),
    #[error("Ace value must be 1 or 10, got {0}")]
    InvalidAceValue(i32),
    #[error("Player does not hold {0}")]
    CardNotInHand(Card),
    #[error("Move exceeds 50 (sum: {sum}, card: {value})")]
    ExceedsCeiling { sum: i32, value: i32 },
    #[error("No player is left to move")]
    NoActivePlayer,
}
