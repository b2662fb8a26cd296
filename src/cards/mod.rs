//! Cards, deck and hand ranking.
//!
//! ## Modules
//!
//! - `card`: Card, suit and card-set representations
//! - `deck`: The per-trial working deck
//! - `hand_eval`: 5-card ranking and the 2-hole + 3-board best hand search

pub mod card;
pub mod deck;
pub mod hand_eval;

pub use card::{Card, CardSet, Suit, CARDS_PER_SUIT, DECK_SIZE};
pub use deck::{Deck, DrawFilter};
pub use hand_eval::{HandCategory, HandEvaluator, HandRank, HandRanker, BOARD_CARDS, HOLE_CARDS};
