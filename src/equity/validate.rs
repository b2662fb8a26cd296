//! Cross-hand validation.
//!
//! Validation scans hands in input order and tokens left to right and
//! stops at the first problem. It checks, in order:
//! 1. each hand has exactly six tokens
//! 2. each token is well formed
//! 3. no known card appears twice across all hands
//! 4. placeholders name a real suit
//! 5. placeholder demand per suit fits the cards of that suit left over
//!    (suits checked hearts, diamonds, spades, clubs)
//! 6. all hands plus the board fit in one deck

use crate::cards::{CardSet, Suit, BOARD_CARDS, CARDS_PER_SUIT, DECK_SIZE, HOLE_CARDS};
use crate::error::ValidationError;

use super::spec::{split_tokens, HandSpec, Slot};

/// Order in which suits are checked for placeholder supply.
const SUPPLY_CHECK_ORDER: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

/// Largest number of hands one deck can serve.
pub const MAX_HANDS: usize = (DECK_SIZE - BOARD_CARDS) / HOLE_CARDS;

/// Check a set of hand strings without parsing them for later use.
pub fn validate<S: AsRef<str>>(hands: &[S]) -> Result<(), ValidationError> {
    validate_and_parse(hands).map(|_| ())
}

/// Validate a set of hand strings and return their parsed specifications.
pub fn validate_and_parse<S: AsRef<str>>(hands: &[S]) -> Result<Vec<HandSpec>, ValidationError> {
    if hands.is_empty() {
        return Err(ValidationError::NoHands);
    }

    let mut known = CardSet::new();
    let mut demand = [0usize; 4];
    let mut specs = Vec::with_capacity(hands.len());

    for hand in hands {
        let hand: &str = hand.as_ref();
        let tokens = split_tokens(hand)?;
        let mut slots = [Slot::Wildcard; HOLE_CARDS];

        for (slot, token) in slots.iter_mut().zip(tokens) {
            *slot = Slot::parse(token, hand)?;
            match *slot {
                Slot::Known(card) => {
                    if !known.insert(card) {
                        return Err(ValidationError::DuplicateCard {
                            hand: hand.to_string(),
                            card,
                        });
                    }
                }
                Slot::SuitPlaceholder(suit) => demand[suit.index()] += 1,
                Slot::Wildcard => {}
            }
        }

        specs.push(HandSpec::from_slots(hand, slots));
    }

    for suit in SUPPLY_CHECK_ORDER {
        let available = CARDS_PER_SUIT - known.count_suit(suit);
        let needed = demand[suit.index()];
        if needed > available {
            return Err(ValidationError::InsufficientSuitSupply {
                suit,
                needed,
                available,
            });
        }
    }

    let needed = hands.len() * HOLE_CARDS + BOARD_CARDS;
    if needed > DECK_SIZE {
        return Err(ValidationError::TooManyPlayers {
            players: hands.len(),
            needed,
        });
    }

    Ok(specs)
}
