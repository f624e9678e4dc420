use crate::cards::Card;
use crate::deck::Deck;
use crate::rules::starting_sum;

/// Cards played since the last recycle, plus the running sum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    history: Vec<Card>,
    sum: i32,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding only the opening card, with the sum it starts from.
    pub fn seeded(card: Card) -> Self {
        Self {
            history: vec![card],
            sum: starting_sum(&card),
        }
    }

    pub fn from_parts(history: Vec<Card>, sum: i32) -> Self {
        Self { history, sum }
    }

    /// Appends `card` and adds `value` to the sum. The caller has already
    /// checked that the new sum stays within the ceiling.
    pub fn record(&mut self, card: Card, value: i32) {
        self.history.push(card);
        self.sum += value;
    }

    pub fn last_card(&self) -> Option<Card> {
        self.history.last().copied()
    }

    pub fn current_sum(&self) -> i32 {
        self.sum
    }

    pub fn history(&self) -> &[Card] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.sum = 0;
    }

    /// Moves every card but the last played one under `deck` and reshuffles.
    ///
    /// Called only when a draw has just failed. With one card or fewer on the
    /// table there is nothing to recycle and `false` is returned. The sum is
    /// left as it is.
    pub fn recycle_into(&mut self, deck: &mut Deck) -> bool {
        let Some(last) = self.history.pop() else {
            return false;
        };
        if self.history.is_empty() {
            self.history.push(last);
            return false;
        }
        let recycled = std::mem::replace(&mut self.history, vec![last]);
        let count = recycled.len();
        deck.return_batch_to_bottom(recycled);
        deck.shuffle();
        tracing::info!(
            recycled = count,
            deck_remaining = deck.remaining(),
            last_card = %last,
            "deck exhausted, table recycled"
        );
        true
    }
}
