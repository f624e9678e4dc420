use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The draw pile.
///
/// Cards are stored bottom-to-top: `draw` pops from the back, the
/// `return_*` methods push onto the front. The RNG is seeded once at
/// construction and keeps advancing across reshuffles, so a given seed
/// reproduces the whole game.
#[derive(Debug)]
pub struct Deck {
    cards: VecDeque<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Full 52-card deck, already shuffled.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self {
            cards: VecDeque::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Deck holding exactly `cards` in the given order (last element on top).
    /// No shuffle is applied.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards: cards.into(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Rebuilds the full 52-card set and shuffles it.
    pub fn reset(&mut self) {
        self.cards = full_deck().into();
        self.shuffle();
    }

    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop_back().ok_or(GameError::EmptyDeck)
    }

    pub fn return_to_bottom(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Puts `cards` under the deck, keeping their relative order: read from
    /// the bottom, the deck starts with the batch as given.
    pub fn return_batch_to_bottom<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
        I::IntoIter: DoubleEndedIterator,
    {
        for card in cards.into_iter().rev() {
            self.cards.push_front(card);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Bottom-to-top view of the cards still in the deck.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    pub fn peek_top(&self) -> Option<Card> {
        self.cards.back().copied()
    }
}
