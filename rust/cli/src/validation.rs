//! Parsing of interactive input for the `play` command.

use fifty_engine::cards::Card;
use fifty_engine::rules::ACE_VALUES;

/// Outcome of parsing one line typed at the move prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A card taken from the hand, by position or by card text
    Card(Card),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses a move typed by the human player.
///
/// Accepts, case-insensitively:
/// - a 1-based hand position (`"1"` to `"4"`)
/// - card text such as `"7h"`, `"10s"` or `"Ad"`
/// - `"q"` or `"quit"`
///
/// Card text is not checked against the hand here; the engine rejects cards
/// the player does not hold.
///
/// # Example
///
/// ```rust
/// # use fifty_cli::validation::{parse_move_input, ParseResult};
/// use fifty_engine::cards::Card;
///
/// let hand: Vec<Card> = ["7h", "Kd"].iter().map(|s| s.parse().unwrap()).collect();
///
/// assert_eq!(parse_move_input("2", &hand), ParseResult::Card(hand[1]));
/// assert_eq!(parse_move_input("7H", &hand), ParseResult::Card(hand[0]));
/// assert_eq!(parse_move_input("quit", &hand), ParseResult::Quit);
/// assert!(matches!(parse_move_input("5", &hand), ParseResult::Invalid(_)));
/// ```
pub fn parse_move_input(input: &str, hand: &[Card]) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if input == "q" || input == "quit" {
        return ParseResult::Quit;
    }

    if let Ok(n) = input.parse::<usize>() {
        return match n.checked_sub(1).and_then(|i| hand.get(i)) {
            Some(card) => ParseResult::Card(*card),
            None => ParseResult::Invalid(format!(
                "Position {} is out of range, choose 1-{}",
                n,
                hand.len()
            )),
        };
    }

    match input.parse::<Card>() {
        Ok(card) => ParseResult::Card(card),
        Err(e) => ParseResult::Invalid(format!(
            "{}. Enter a hand position, a card like 7h, or q",
            e
        )),
    }
}

/// Parses the value chosen for an ace: `1` or `10`.
///
/// ```rust
/// # use fifty_cli::validation::parse_ace_value;
/// assert_eq!(parse_ace_value(" 10 "), Ok(10));
/// assert!(parse_ace_value("11").is_err());
/// ```
pub fn parse_ace_value(input: &str) -> Result<i32, String> {
    match input.trim().parse::<i32>() {
        Ok(v) if ACE_VALUES.contains(&v) => Ok(v),
        _ => Err(format!(
            "An ace is played as {} or {}",
            ACE_VALUES[0], ACE_VALUES[1]
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand() -> Vec<Card> {
        ["10c", "Ah", "9s", "Qd"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect()
    }

    #[test]
    fn positions_map_to_hand_cards() {
        let h = hand();
        assert_eq!(parse_move_input("1", &h), ParseResult::Card(h[0]));
        assert_eq!(parse_move_input(" 4 ", &h), ParseResult::Card(h[3]));
    }

    #[test]
    fn position_zero_and_past_the_end_are_invalid() {
        let h = hand();
        assert!(matches!(parse_move_input("0", &h), ParseResult::Invalid(_)));
        match parse_move_input("5", &h) {
            ParseResult::Invalid(msg) => assert!(msg.contains("1-4"), "{}", msg),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn ten_is_a_card_not_a_position() {
        let h = hand();
        assert_eq!(parse_move_input("10c", &h), ParseResult::Card(h[0]));
        assert!(matches!(parse_move_input("10", &h), ParseResult::Invalid(_)));
    }

    #[test]
    fn card_text_outside_the_hand_still_parses() {
        let h = hand();
        let seven: Card = "7d".parse().unwrap();
        assert_eq!(parse_move_input("7d", &h), ParseResult::Card(seven));
    }

    #[test]
    fn quit_and_garbage() {
        let h = hand();
        assert_eq!(parse_move_input("Q", &h), ParseResult::Quit);
        assert!(matches!(parse_move_input("", &h), ParseResult::Invalid(_)));
        assert!(matches!(
            parse_move_input("fold", &h),
            ParseResult::Invalid(_)
        ));
    }

    #[test]
    fn ace_values() {
        assert_eq!(parse_ace_value("1"), Ok(1));
        assert_eq!(parse_ace_value("10"), Ok(10));
        assert!(parse_ace_value("5").is_err());
        assert!(parse_ace_value("ten").is_err());
    }
}
