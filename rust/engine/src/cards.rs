use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no game value; they only make each [`Card`] unique.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Single lowercase letter used in the card text form (`c`, `d`, `h`, `s`).
    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    fn from_letter(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Represents the rank of a playing card from Ace through King.
///
/// Each rank maps to a fixed game value through [`Rank::table_value`]:
/// numerals two through eight count their face, nine counts zero, ten counts
/// ten and the face cards subtract ten. The ace has a base value of one and
/// may be played as ten instead (see [`crate::rules::ACE_VALUES`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1 or 10)
    Ace,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9 (counts 0)
    Nine,
    /// Rank 10
    Ten,
    /// Jack (-10)
    Jack,
    /// Queen (-10)
    Queen,
    /// King (-10)
    King,
}

impl Rank {
    /// Value the rank adds to the running sum. For the ace this is the base value 1.
    pub fn table_value(self) -> i32 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 0,
            Rank::Ten => 10,
            Rank::Jack | Rank::Queen | Rank::King => -10,
        }
    }

    pub fn is_ace(self) -> bool {
        self == Rank::Ace
    }

    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Symbol used in the card text form.
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn from_symbol(s: &str) -> Option<Rank> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Some(Rank::Ace),
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" | "T" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            _ => None,
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are plain values: they are moved between the deck, the hands and
/// the table but never created or destroyed once a deck exists.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn table_value(&self) -> i32 {
        self.rank.table_value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank.is_ace()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.letter())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized card: {0:?} (expected e.g. \"7h\", \"10s\", \"Ad\")")]
pub struct CardParseError(pub String);

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_letter)
            .ok_or_else(|| CardParseError(s.to_string()))?;
        let rank = Rank::from_symbol(chars.as_str()).ok_or_else(|| CardParseError(s.to_string()))?;
        Ok(Card { suit, rank })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_follow_the_table() {
        let expected = [1, 2, 3, 4, 5, 6, 7, 8, 0, 10, -10, -10, -10];
        for (rank, value) in all_ranks().iter().zip(expected) {
            assert_eq!(rank.table_value(), value, "{:?}", rank);
        }
        assert!(Rank::Ace.is_ace());
        assert!(all_ranks().iter().filter(|r| r.is_ace()).count() == 1);
    }

    #[test]
    fn card_text_form_parses_and_displays() {
        let ten = Card::new(Suit::Hearts, Rank::Ten);
        assert_eq!(ten.to_string(), "10h");
        assert_eq!("10h".parse::<Card>(), Ok(ten));
        assert_eq!("th".parse::<Card>(), Ok(ten));
        assert_eq!(
            "AS".parse::<Card>(),
            Ok(Card::new(Suit::Spades, Rank::Ace))
        );
        assert!("11h".parse::<Card>().is_err());
        assert!("7x".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }
}
