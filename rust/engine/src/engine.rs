use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::deck::Deck;
use crate::errors::{GameError, MoveError};
use crate::hand::Hand;
use crate::player::{ai_name, Player, PlayerView, HUMAN_NAME};
use crate::rules::{
    check_ceiling, preferred_ace_value, resolve_value, Play, ValidatedPlay, CEILING, HAND_SIZE,
    MAX_OPPONENTS, MIN_OPPONENTS,
};
use crate::table::Table;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Core game engine: owns the deck, the seated players and the table.
///
/// Every mutating call either validates and applies completely or fails
/// without touching state. The engine never advances turns on its own; after
/// each accepted move the caller drives [`Engine::advance_turn`] and
/// [`Engine::check_current_player_can_move`] until a player who can move is
/// reached or the game is over.
///
/// # Examples
///
/// ```
/// use fifty_engine::engine::Engine;
///
/// let mut engine = Engine::new(Some(12345));
/// engine.start(2).expect("valid opponent count");
///
/// assert_eq!(engine.players().len(), 3);
/// assert!(engine.players().iter().all(|p| p.hand_size() == 4));
/// assert!(engine.current_player().unwrap().is_human());
/// assert!(engine.last_played().is_some());
/// assert_eq!(engine.deck_remaining(), 52 - 3 * 4 - 1);
/// ```
#[derive(Debug)]
pub struct Engine {
    /// The draw pile
    deck: Deck,
    /// Players still in the game, in seating order
    players: Vec<Player>,
    /// Played cards and running sum
    table: Table,
    /// Index into `players` of whoever is to move
    current: usize,
    seed: u64,
}

impl Engine {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        Self {
            deck: Deck::new_with_seed(seed),
            players: Vec::new(),
            table: Table::new(),
            current: 0,
            seed,
        }
    }

    /// Builds an engine in an arbitrary mid-game position.
    ///
    /// Every card not placed in a seat or on the table goes to the deck in
    /// canonical order, so the 52-card set is always complete.
    pub fn from_layout(seed: u64, layout: Layout) -> Result<Self, GameError> {
        let mut seen = HashSet::new();
        let placed = layout
            .seats
            .iter()
            .flat_map(|s| s.hand.iter())
            .chain(layout.table.iter());
        for card in placed {
            if !seen.insert(*card) {
                return Err(GameError::InvalidSetup(format!(
                    "card {} placed twice",
                    card
                )));
            }
        }
        if layout.sum > CEILING {
            return Err(GameError::InvalidSetup(format!(
                "sum {} is above {}",
                layout.sum, CEILING
            )));
        }
        if layout.turn >= layout.seats.len().max(1) {
            return Err(GameError::InvalidSetup(format!(
                "turn {} out of range for {} players",
                layout.turn,
                layout.seats.len()
            )));
        }

        let rest: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| !seen.contains(c))
            .collect();
        let players = layout
            .seats
            .into_iter()
            .map(|s| Player::with_hand(s.name, s.is_human, Hand::from_cards(s.hand)))
            .collect();
        Ok(Self {
            deck: Deck::from_cards(rest, seed),
            players,
            table: Table::from_parts(layout.table, layout.sum),
            current: layout.turn,
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Starts a fresh game against `num_opponents` AI players (1 to 3).
    ///
    /// The deck is rebuilt and shuffled, the human seat is created first,
    /// four cards are dealt round-robin and one card is turned over to seed
    /// the table. The human moves first.
    pub fn start(&mut self, num_opponents: usize) -> Result<(), GameError> {
        if !(MIN_OPPONENTS..=MAX_OPPONENTS).contains(&num_opponents) {
            return Err(GameError::InvalidSetup(format!(
                "number of opponents must be between {} and {}, got {}",
                MIN_OPPONENTS, MAX_OPPONENTS, num_opponents
            )));
        }

        self.deck.reset();
        self.table.clear();
        self.players.clear();
        self.players.push(Player::new(HUMAN_NAME, true));
        for n in 1..=num_opponents {
            self.players.push(Player::new(ai_name(n), false));
        }

        for _ in 0..HAND_SIZE {
            for player in &mut self.players {
                let card = self.deck.draw()?;
                player.hand_mut().receive(card);
            }
        }

        let opening = self.deck.draw()?;
        self.table = Table::seeded(opening);
        self.current = 0;

        tracing::info!(
            opponents = num_opponents,
            opening_card = %opening,
            sum = self.table.current_sum(),
            seed = self.seed,
            "game started"
        );
        Ok(())
    }

    /// Plays a non-ace card for the current player.
    pub fn play_card(&mut self, card: Card) -> Result<(), GameError> {
        self.play(Play::Card(card)).map(|_| ())
    }

    /// Plays an ace for the current player as 1 or 10.
    pub fn play_ace(&mut self, card: Card, chosen_value: i32) -> Result<(), GameError> {
        self.play(Play::Ace(card, chosen_value)).map(|_| ())
    }

    /// Plays `card` choosing the ace value on the player's behalf (10 when it
    /// fits, 1 otherwise). Returns the value added to the sum.
    pub fn play_resolved(&mut self, card: Card) -> Result<i32, GameError> {
        let play = if card.is_ace() {
            Play::Ace(card, preferred_ace_value(self.table.current_sum()))
        } else {
            Play::Card(card)
        };
        self.play(play).map(|p| p.value)
    }

    /// Validates and applies `play` for the current player, then draws the
    /// replacement card.
    pub fn play(&mut self, play: Play) -> Result<ValidatedPlay, GameError> {
        let index = self.current_index()?;
        let validated = resolve_value(play)?;
        if !self.players[index].hand().contains(&validated.card) {
            return Err(MoveError::CardNotInHand(validated.card).into());
        }
        check_ceiling(self.table.current_sum(), &validated)?;

        let player = &mut self.players[index];
        player.hand_mut().remove(&validated.card);
        self.table.record(validated.card, validated.value);
        tracing::debug!(
            player = %self.players[index].name(),
            card = %validated.card,
            value = validated.value,
            sum = self.table.current_sum(),
            "card played"
        );

        self.draw_replacement(index);
        Ok(validated)
    }

    /// Draws one card for `players[index]`, recycling the table once if the
    /// deck is empty. If nothing can be drawn the player stays a card short.
    fn draw_replacement(&mut self, index: usize) {
        let drawn = self.deck.draw().or_else(|_| {
            self.table.recycle_into(&mut self.deck);
            self.deck.draw()
        });
        match drawn {
            Ok(card) => self.players[index].hand_mut().receive(card),
            Err(e) => tracing::warn!(
                player = %self.players[index].name(),
                hand_size = self.players[index].hand_size(),
                error = %e,
                "no card available after recycling, player left short"
            ),
        }
    }

    /// Eliminates the current player if no card in their hand can be played.
    ///
    /// Returns `true` when the current player can move. On elimination the
    /// hand goes under the deck, the player leaves the seating order and the
    /// turn index now points at the next seat; `false` is returned.
    pub fn check_current_player_can_move(&mut self) -> bool {
        let Some(player) = self.players.get(self.current) else {
            return false;
        };
        if player.hand().has_playable_move(self.table.current_sum()) {
            return true;
        }
        self.eliminate_current();
        false
    }

    fn eliminate_current(&mut self) {
        let mut player = self.players.remove(self.current);
        let returned = player.hand_mut().drain();
        let count = returned.len();
        self.deck.return_batch_to_bottom(returned);
        self.current = if self.players.is_empty() {
            0
        } else {
            self.current % self.players.len()
        };

        tracing::info!(
            player = %player.name(),
            returned_cards = count,
            sum = self.table.current_sum(),
            remaining_players = self.players.len(),
            "player eliminated"
        );
        if let Some(winner) = self.winner() {
            tracing::info!(winner = %winner.name(), "game over");
        }
    }

    /// Passes the turn to the next seat.
    pub fn advance_turn(&mut self) {
        if self.players.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.players.len();
    }

    pub fn is_over(&self) -> bool {
        self.players.len() <= 1
    }

    pub fn winner(&self) -> Option<&Player> {
        if self.is_over() {
            self.players.first()
        } else {
            None
        }
    }

    fn current_index(&self) -> Result<usize, GameError> {
        if self.current < self.players.len() {
            Ok(self.current)
        } else {
            Err(MoveError::NoActivePlayer.into())
        }
    }

    pub fn current_sum(&self) -> i32 {
        self.table.current_sum()
    }

    pub fn last_played(&self) -> Option<Card> {
        self.table.last_card()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    pub fn current_turn_index(&self) -> usize {
        self.current
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            sum: self.table.current_sum(),
            last_played: self.table.last_card(),
            current_player: self.current_player().map(|_| self.current),
            players: self.players.iter().map(Player::view).collect(),
            deck_remaining: self.deck.remaining(),
            table_cards: self.table.len(),
            is_over: self.is_over(),
            winner: self.winner().map(|p| p.name().to_string()),
        }
    }
}

/// Owned, serializable copy of everything a presentation layer may show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub sum: i32,
    pub last_played: Option<Card>,
    pub current_player: Option<usize>,
    pub players: Vec<PlayerView>,
    pub deck_remaining: usize,
    pub table_cards: usize,
    pub is_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Explicit position used by [`Engine::from_layout`].
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub seats: Vec<SeatLayout>,
    /// Table history, oldest first
    pub table: Vec<Card>,
    pub sum: i32,
    /// Index of the player to move
    pub turn: usize,
}

#[derive(Debug, Clone)]
pub struct SeatLayout {
    pub name: String,
    pub is_human: bool,
    pub hand: Vec<Card>,
}

impl SeatLayout {
    pub fn human(name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            is_human: true,
            hand,
        }
    }

    pub fn ai(name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            is_human: false,
            hand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn c(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn start_rejects_bad_opponent_counts() {
        let mut engine = Engine::new(Some(1));
        assert!(matches!(engine.start(0), Err(GameError::InvalidSetup(_))));
        assert!(matches!(engine.start(4), Err(GameError::InvalidSetup(_))));
        assert!(engine.players().is_empty());
    }

    #[test]
    fn start_deals_round_robin() {
        let seed = 77;
        let mut engine = Engine::new(Some(seed));
        engine.start(3).unwrap();

        // Replay the same shuffle to know the draw order.
        let mut deck = Deck::new_with_seed(seed);
        deck.reset();
        let order: Vec<Card> = (0..17).map(|_| deck.draw().unwrap()).collect();

        for (seat, player) in engine.players().iter().enumerate() {
            let expected: Vec<Card> = (0..4).map(|pass| order[pass * 4 + seat]).collect();
            assert_eq!(player.hand_cards(), &expected[..], "seat {}", seat);
        }
        assert_eq!(engine.last_played(), Some(order[16]));
    }

    #[test]
    fn names_and_seat_kinds() {
        let mut engine = Engine::new(Some(5));
        engine.start(2).unwrap();
        let names: Vec<&str> = engine.players().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Player 1", "CPU 1", "CPU 2"]);
        assert!(engine.players()[0].is_human());
        assert!(!engine.players()[1].is_human());
    }

    #[test]
    fn play_without_players_is_rejected() {
        let mut engine = Engine::new(Some(1));
        assert_eq!(
            engine.play_card(c(Suit::Clubs, Rank::Two)),
            Err(GameError::InvalidMove(MoveError::NoActivePlayer))
        );
        assert!(!engine.check_current_player_can_move());
    }

    #[test]
    fn hand_is_checked_before_the_ceiling() {
        let layout = Layout {
            seats: vec![
                SeatLayout::human("A", vec![c(Suit::Clubs, Rank::Two)]),
                SeatLayout::ai("B", vec![c(Suit::Hearts, Rank::Three)]),
            ],
            table: vec![c(Suit::Spades, Rank::Eight)],
            sum: 50,
            turn: 0,
        };
        let mut engine = Engine::from_layout(1, layout).unwrap();
        let not_held = c(Suit::Diamonds, Rank::Ten);
        assert_eq!(
            engine.play_card(not_held),
            Err(GameError::InvalidMove(MoveError::CardNotInHand(not_held)))
        );
    }

    #[test]
    fn layout_rejects_duplicates_and_bad_turns() {
        let two = c(Suit::Clubs, Rank::Two);
        let dup = Layout {
            seats: vec![SeatLayout::human("A", vec![two])],
            table: vec![two],
            ..Layout::default()
        };
        assert!(matches!(
            Engine::from_layout(1, dup),
            Err(GameError::InvalidSetup(_))
        ));

        let bad_turn = Layout {
            seats: vec![SeatLayout::human("A", vec![two])],
            turn: 1,
            ..Layout::default()
        };
        assert!(matches!(
            Engine::from_layout(1, bad_turn),
            Err(GameError::InvalidSetup(_))
        ));
    }
}
