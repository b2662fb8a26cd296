//! Hand specification parsing.
//!
//! A hand string is six dot-separated tokens, e.g. `Ah.Ac.oh.oc.x.x`:
//! - `<Rank><Suit>` is a known card (`Ah`, `Td`, `2c`)
//! - `o<Suit>` is a placeholder for some card of that suit (`oh`)
//! - `x` is a wildcard for any card

use std::fmt;

use crate::cards::{Card, Suit, HOLE_CARDS};
use crate::error::ValidationError;

/// Separator between tokens of a hand string.
pub const TOKEN_SEPARATOR: char = '.';

/// One of the six positions of a hand specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A fully known card.
    Known(Card),
    /// Some card of the given suit, drawn per trial.
    SuitPlaceholder(Suit),
    /// Any card, drawn per trial.
    Wildcard,
}

impl Slot {
    /// Parse a single token. `hand` is only used to label errors.
    pub fn parse(token: &str, hand: &str) -> Result<Self, ValidationError> {
        if token == "x" {
            return Ok(Slot::Wildcard);
        }

        let invalid_format = || ValidationError::InvalidCardFormat {
            hand: hand.to_string(),
            token: token.to_string(),
        };

        let mut chars = token.chars();
        let (first, second) = match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => (first, second),
            _ => return Err(invalid_format()),
        };

        if first == 'o' {
            return Suit::from_char(second)
                .map(Slot::SuitPlaceholder)
                .ok_or_else(|| ValidationError::InvalidSuitPlaceholder {
                    hand: hand.to_string(),
                    token: token.to_string(),
                });
        }

        Card::parse(token).map(Slot::Known).ok_or_else(invalid_format)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Known(card) => write!(f, "{}", card),
            Slot::SuitPlaceholder(suit) => write!(f, "o{}", suit),
            Slot::Wildcard => write!(f, "x"),
        }
    }
}

/// A parsed hand string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandSpec {
    text: String,
    slots: [Slot; HOLE_CARDS],
}

impl HandSpec {
    /// Parse a hand string on its own, without cross-hand checks.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let tokens = split_tokens(text)?;
        let mut slots = [Slot::Wildcard; HOLE_CARDS];
        for (slot, token) in slots.iter_mut().zip(tokens) {
            *slot = Slot::parse(token, text)?;
        }
        Ok(Self::from_slots(text, slots))
    }

    pub(crate) fn from_slots(text: &str, slots: [Slot; HOLE_CARDS]) -> Self {
        Self {
            text: text.to_string(),
            slots,
        }
    }

    /// The original hand string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The six slots in input order.
    pub fn slots(&self) -> &[Slot; HOLE_CARDS] {
        &self.slots
    }

    /// Known cards in input order.
    pub fn known_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Known(card) => Some(*card),
            _ => None,
        })
    }

    /// Placeholder count per suit, indexed by [`Suit::index`].
    pub fn placeholder_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for slot in &self.slots {
            if let Slot::SuitPlaceholder(suit) = slot {
                counts[suit.index()] += 1;
            }
        }
        counts
    }

    /// Number of wildcard slots.
    pub fn wildcard_count(&self) -> usize {
        self.slots.iter().filter(|s| matches!(s, Slot::Wildcard)).count()
    }
}

impl fmt::Display for HandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Split a hand string into exactly six tokens.
pub(crate) fn split_tokens(text: &str) -> Result<Vec<&str>, ValidationError> {
    let tokens: Vec<&str> = text.split(TOKEN_SEPARATOR).collect();
    if tokens.len() != HOLE_CARDS {
        return Err(ValidationError::WrongCardCount {
            hand: text.to_string(),
            found: tokens.len(),
        });
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_hand() {
        let spec = HandSpec::parse("Ah.Ac.oh.oc.x.x").unwrap();
        let known: Vec<String> = spec.known_cards().map(|c| c.to_string()).collect();
        assert_eq!(known, vec!["Ah", "Ac"]);

        let counts = spec.placeholder_counts();
        assert_eq!(counts[Suit::Hearts.index()], 1);
        assert_eq!(counts[Suit::Clubs.index()], 1);
        assert_eq!(counts[Suit::Spades.index()], 0);
        assert_eq!(spec.wildcard_count(), 2);
        assert_eq!(spec.text(), "Ah.Ac.oh.oc.x.x");
    }

    #[test]
    fn test_slot_shapes() {
        assert_eq!(Slot::parse("x", "h").unwrap(), Slot::Wildcard);
        assert_eq!(Slot::parse("od", "h").unwrap(), Slot::SuitPlaceholder(Suit::Diamonds));
        assert_eq!(
            Slot::parse("Ts", "h").unwrap(),
            Slot::Known(Card::parse("Ts").unwrap())
        );
    }

    #[test]
    fn test_invalid_tokens() {
        for token in ["1h", "A", "Ahh", "", "X", "Az", "xx"] {
            assert!(
                matches!(
                    Slot::parse(token, "hand"),
                    Err(ValidationError::InvalidCardFormat { .. })
                ),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_invalid_placeholder() {
        let err = Slot::parse("oz", "oz.x.x.x.x.x").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidSuitPlaceholder {
                hand: "oz.x.x.x.x.x".to_string(),
                token: "oz".to_string(),
            }
        );
    }

    #[test]
    fn test_wrong_count() {
        let err = HandSpec::parse("Ah.Ac.oh.oc.x").unwrap_err();
        assert!(matches!(err, ValidationError::WrongCardCount { found: 5, .. }));
        let err = HandSpec::parse("x.x.x.x.x.x.x").unwrap_err();
        assert!(matches!(err, ValidationError::WrongCardCount { found: 7, .. }));
    }

    #[test]
    fn test_display_round_trips_slots() {
        let spec = HandSpec::parse("Kd.os.x.2c.oh.x").unwrap();
        let rendered: Vec<String> = spec.slots().iter().map(|s| s.to_string()).collect();
        assert_eq!(rendered.join("."), spec.text());
    }
}
