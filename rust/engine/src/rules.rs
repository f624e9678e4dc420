use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::MoveError;

/// The running sum may never go above this.
pub const CEILING: i32 = 50;
/// Cards each player holds after every completed turn.
pub const HAND_SIZE: usize = 4;
pub const MIN_OPPONENTS: usize = 1;
pub const MAX_OPPONENTS: usize = 3;
/// The two values an ace may be played as.
pub const ACE_VALUES: [i32; 2] = [1, 10];

/// A move as requested by a player, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Play {
    /// Any non-ace card, scored with its table value
    Card(Card),
    /// An ace with the value chosen by the player
    Ace(Card, i32),
}

impl Play {
    pub fn card(&self) -> Card {
        match *self {
            Play::Card(card) | Play::Ace(card, _) => card,
        }
    }
}

/// A move that passed every rule check that does not depend on the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPlay {
    pub card: Card,
    pub value: i32,
}

pub fn fits(sum: i32, value: i32) -> bool {
    sum + value <= CEILING
}

/// Whether `card` can be played on `sum` with at least one of its values.
pub fn is_playable(card: &Card, sum: i32) -> bool {
    if card.is_ace() {
        ACE_VALUES.iter().any(|&v| fits(sum, v))
    } else {
        fits(sum, card.table_value())
    }
}

/// Sum derived from the card that seeds the table at the start of a game.
///
/// An ace counts 1, a nine 0, a face card -10 and every other rank its table
/// value, which is exactly [`Card::table_value`] for all thirteen ranks.
pub fn starting_sum(card: &Card) -> i32 {
    if card.is_ace() {
        ACE_VALUES[0]
    } else {
        card.table_value()
    }
}

/// Value used when the engine resolves an ace on a player's behalf:
/// 10 when it stays within the ceiling, 1 otherwise.
pub fn preferred_ace_value(sum: i32) -> i32 {
    if fits(sum, ACE_VALUES[1]) {
        ACE_VALUES[1]
    } else {
        ACE_VALUES[0]
    }
}

/// Validates a requested play against the running sum.
///
/// Converts a [`Play`] into a [`ValidatedPlay`] carrying the value that will be
/// added to the table. Whether the player actually holds the card is checked
/// by the engine, which owns the hands.
///
/// # Errors
///
/// Returns [`MoveError`] in the following cases:
/// - [`MoveError::AceNeedsValue`] - an ace was submitted as a plain card
/// - [`MoveError::NotAnAce`] - a non-ace was submitted with an ace value
/// - [`MoveError::InvalidAceValue`] - the ace value is neither 1 nor 10
/// - [`MoveError::ExceedsCeiling`] - the sum would go above 50
///
/// # Examples
///
/// ```
/// use fifty_engine::cards::{Card, Rank, Suit};
/// use fifty_engine::rules::{validate_play, Play};
///
/// let five = Card::new(Suit::Hearts, Rank::Five);
/// let played = validate_play(45, Play::Card(five)).unwrap();
/// assert_eq!(played.value, 5);
///
/// let ten = Card::new(Suit::Clubs, Rank::Ten);
/// assert!(validate_play(45, Play::Card(ten)).is_err());
/// ```
///
/// ```
/// use fifty_engine::cards::{Card, Rank, Suit};
/// use fifty_engine::errors::MoveError;
/// use fifty_engine::rules::{validate_play, Play};
///
/// let ace = Card::new(Suit::Spades, Rank::Ace);
/// assert_eq!(validate_play(40, Play::Ace(ace, 10)).unwrap().value, 10);
/// assert!(matches!(
///     validate_play(41, Play::Ace(ace, 10)),
///     Err(MoveError::ExceedsCeiling { sum: 41, value: 10 })
/// ));
/// assert!(matches!(
///     validate_play(0, Play::Card(ace)),
///     Err(MoveError::AceNeedsValue)
/// ));
/// ```
pub fn validate_play(sum: i32, play: Play) -> Result<ValidatedPlay, MoveError> {
    let validated = resolve_value(play)?;
    check_ceiling(sum, &validated)?;
    Ok(validated)
}

/// Checks the shape of a play (right entry point, legal ace value) and
/// attaches the value it scores. Does not look at the sum.
pub fn resolve_value(play: Play) -> Result<ValidatedPlay, MoveError> {
    match play {
        Play::Card(card) => {
            if card.is_ace() {
                return Err(MoveError::AceNeedsValue);
            }
            Ok(ValidatedPlay {
                card,
                value: card.table_value(),
            })
        }
        Play::Ace(card, value) => {
            if !card.is_ace() {
                return Err(MoveError::NotAnAce(card));
            }
            if !ACE_VALUES.contains(&value) {
                return Err(MoveError::InvalidAceValue(value));
            }
            Ok(ValidatedPlay { card, value })
        }
    }
}

pub fn check_ceiling(sum: i32, play: &ValidatedPlay) -> Result<(), MoveError> {
    if fits(sum, play.value) {
        Ok(())
    } else {
        Err(MoveError::ExceedsCeiling {
            sum,
            value: play.value,
        })
    }
}
