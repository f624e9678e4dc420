use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::{is_playable, HAND_SIZE};

/// Cards held by one player, in the order they were received.
///
/// The order is observable: the AI policy scans it front to back, and the
/// CLI numbers cards by position. No size limit is enforced here; keeping
/// every hand at [`HAND_SIZE`] is the engine's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(HAND_SIZE),
        }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn receive(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first matching card. Returns whether a card was removed.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(i) => {
                self.cards.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// True when at least one card can be played on `sum` without passing 50.
    pub fn has_playable_move(&self, sum: i32) -> bool {
        self.cards.iter().any(|c| is_playable(c, sum))
    }

    /// Empties the hand, returning the cards in hand order.
    pub fn drain(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        Hand::from_cards(ranks.iter().map(|&r| Card::new(Suit::Hearts, r)).collect())
    }

    #[test]
    fn remove_only_takes_held_cards() {
        let mut h = hand(&[Rank::Two, Rank::Three]);
        assert!(h.remove(&Card::new(Suit::Hearts, Rank::Two)));
        assert!(!h.remove(&Card::new(Suit::Hearts, Rank::Two)));
        assert!(!h.remove(&Card::new(Suit::Spades, Rank::Three)));
        assert_eq!(h.size(), 1);
    }

    #[test]
    fn playable_move_checks_every_card() {
        let h = hand(&[Rank::Ten, Rank::Eight, Rank::Seven]);
        assert!(h.has_playable_move(43));
        assert!(!h.has_playable_move(44));

        let with_face = hand(&[Rank::Ten, Rank::Queen]);
        assert!(with_face.has_playable_move(50));
    }

    #[test]
    fn lone_ace_playable_as_one_near_the_ceiling() {
        let h = hand(&[Rank::Ace]);
        assert!(h.has_playable_move(45));
        assert!(h.has_playable_move(49));
        assert!(!h.has_playable_move(50));
    }

    #[test]
    fn empty_hand_has_no_move() {
        assert!(!Hand::new().has_playable_move(0));
    }

    #[test]
    fn drain_returns_everything_in_order() {
        let mut h = hand(&[Rank::Four, Rank::Nine, Rank::King]);
        let drained = h.drain();
        assert_eq!(
            drained.iter().map(|c| c.rank).collect::<Vec<_>>(),
            vec![Rank::Four, Rank::Nine, Rank::King]
        );
        assert!(h.is_empty());
    }
}
