//! Card, hand and event formatters for terminal display.
//!
//! Pure functions turning engine values into text. Suits are drawn with
//! Unicode symbols where the terminal is likely to support them and with the
//! card-text letters (`h d c s`) otherwise.
//!
//! ## Example
//!
//! ```rust
//! use fifty_engine::cards::{Card, Rank, Suit};
//! use fifty_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Suit::Spades, Rank::Ace);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_cards(&[ace_spades]).starts_with("[A"));
//! ```

use fifty_engine::cards::{Card, Suit};
use fifty_engine::engine::Snapshot;

use crate::session::TurnEvent;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Unix-like systems are assumed
/// to support Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// Space-separated cards in brackets, `[]` when empty.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Hand with 1-based positions, as accepted by the play prompt.
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}) {}", i + 1, format_card(c)))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn format_event(event: &TurnEvent) -> String {
    match event {
        TurnEvent::Played {
            player,
            card,
            value,
            sum,
        } => {
            if card.is_ace() {
                format!(
                    "{} plays {} as {} -> sum {}",
                    player,
                    format_card(card),
                    value,
                    sum
                )
            } else {
                format!("{} plays {} -> sum {}", player, format_card(card), sum)
            }
        }
        TurnEvent::Eliminated {
            player,
            returned_cards,
        } => format!(
            "{} cannot play and is eliminated ({} cards returned to the deck)",
            player, returned_cards
        ),
        TurnEvent::GameOver { winner } => format!("Game over. Winner: {}", winner),
    }
}

/// Multi-line description of a position. Computer hands are shown too; this
/// is used by `deal`, which is an inspection tool.
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut lines = Vec::new();
    let last = snapshot
        .last_played
        .as_ref()
        .map(format_card)
        .unwrap_or_else(|| "-".to_string());
    lines.push(format!("Table: {} (sum {})", last, snapshot.sum));
    for (i, p) in snapshot.players.iter().enumerate() {
        let marker = if snapshot.current_player == Some(i) {
            "*"
        } else {
            " "
        };
        lines.push(format!("{} {}: {}", marker, p.name, format_cards(&p.hand)));
    }
    lines.push(format!("Deck: {} cards", snapshot.deck_remaining));
    lines.join("\n")
}
