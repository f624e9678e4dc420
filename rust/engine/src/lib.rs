//! # fifty-engine: Fifty-Point Card Game Engine Core
//!
//! Rules engine for the fifty-point elimination game. Players hold four
//! cards, play one per turn onto a shared running sum and are eliminated when
//! every card in their hand would push the sum above 50. The last player
//! seated wins.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and game values
//! - [`deck`] - Seedable draw pile with bottom insertion
//! - [`hand`] - A player's cards and the "can move" query
//! - [`player`] - Seated player (name, human flag, hand)
//! - [`table`] - Played cards, running sum and the recycling policy
//! - [`rules`] - Constants and move validation
//! - [`engine`] - Game orchestration: setup, moves, elimination, turns
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use fifty_engine::engine::Engine;
//!
//! let mut engine = Engine::new(Some(42));
//! engine.start(1).expect("one opponent is valid");
//!
//! let sum = engine.current_sum();
//! let human = engine.current_player().expect("game in progress");
//! let playable: Vec<_> = human
//!     .hand_cards()
//!     .iter()
//!     .filter(|c| fifty_engine::rules::is_playable(c, sum))
//!     .collect();
//! println!("sum {} - playable: {:?}", sum, playable);
//! ```
//!
//! ## Turn Protocol
//!
//! The engine never skips players by itself. After a successful move the
//! caller advances the turn and checks the new current player; if that
//! player was eliminated the turn index already points at the next seat:
//!
//! ```rust
//! use fifty_engine::engine::Engine;
//!
//! let mut engine = Engine::new(Some(7));
//! engine.start(2).unwrap();
//!
//! engine.advance_turn();
//! while !engine.is_over() && !engine.check_current_player_can_move() {
//!     // a player was eliminated; report it and check the next one
//! }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Shuffles use a seeded ChaCha20 generator, so the same seed replays the
//! same game:
//!
//! ```rust
//! use fifty_engine::engine::Engine;
//!
//! let mut a = Engine::new(Some(42));
//! let mut b = Engine::new(Some(42));
//! a.start(3).unwrap();
//! b.start(3).unwrap();
//! assert_eq!(a.snapshot(), b.snapshot());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod player;
pub mod rules;
pub mod table;
