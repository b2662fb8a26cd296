//! Working deck for a single trial.
//!
//! The deck holds every card not known to any hand. It is built once from
//! the dead-card set and reset to that template at the start of each trial.
//! Draws are uniform over the eligible cards and remove by swapping with the
//! last live slot, so no draw ever searches for a card by value.

use rand::Rng;
use std::fmt;

use super::card::{Card, CardSet, Suit, DECK_SIZE};
use crate::error::SimulationError;

/// Restriction applied to a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawFilter {
    /// Any remaining card.
    Any,
    /// Only cards of the given suit.
    Suit(Suit),
}

impl DrawFilter {
    #[inline]
    fn accepts(self, card: Card) -> bool {
        match self {
            DrawFilter::Any => true,
            DrawFilter::Suit(suit) => card.suit() == suit,
        }
    }
}

impl fmt::Display for DrawFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawFilter::Any => write!(f, "any card"),
            DrawFilter::Suit(suit) => write!(f, "suit '{}'", suit),
        }
    }
}

/// A deck of undealt cards.
#[derive(Clone)]
pub struct Deck {
    /// Cards available at the start of every trial.
    template: [Card; DECK_SIZE],
    /// Number of cards in the template.
    size: usize,
    /// Live cards; only `cards[..remaining]` are undealt.
    cards: [Card; DECK_SIZE],
    /// Number of undealt cards.
    remaining: usize,
}

impl Deck {
    /// Create a full 52-card deck.
    pub fn new() -> Self {
        Self::without(CardSet::EMPTY)
    }

    /// Create a deck with the given dead cards removed.
    pub fn without(dead: CardSet) -> Self {
        let mut template = [Card::from_id(0); DECK_SIZE];
        let mut size = 0;
        for card in Card::all().filter(|&c| !dead.contains(c)) {
            template[size] = card;
            size += 1;
        }
        Self {
            template,
            size,
            cards: template,
            remaining: size,
        }
    }

    /// Restore the deck to its initial state.
    #[inline]
    pub fn reset(&mut self) {
        self.cards = self.template;
        self.remaining = self.size;
    }

    /// Remove and return one uniformly random card accepted by `filter`.
    pub fn draw_uniform<R: Rng>(
        &mut self,
        rng: &mut R,
        filter: DrawFilter,
    ) -> Result<Card, SimulationError> {
        let index = match filter {
            DrawFilter::Any => {
                if self.remaining == 0 {
                    return Err(SimulationError::DeckExhausted { filter });
                }
                rng.gen_range(0..self.remaining)
            }
            DrawFilter::Suit(_) => {
                let live = &self.cards[..self.remaining];
                let eligible = live.iter().filter(|&&c| filter.accepts(c)).count();
                if eligible == 0 {
                    return Err(SimulationError::DeckExhausted { filter });
                }
                let nth = rng.gen_range(0..eligible);
                live.iter()
                    .enumerate()
                    .filter(|(_, &c)| filter.accepts(c))
                    .nth(nth)
                    .map(|(i, _)| i)
                    .ok_or(SimulationError::DeckExhausted { filter })?
            }
        };
        Ok(self.take(index))
    }

    /// Draw `n` cards from anything that remains.
    pub fn draw_n<R: Rng>(&mut self, rng: &mut R, n: usize) -> Result<Vec<Card>, SimulationError> {
        (0..n).map(|_| self.draw_uniform(rng, DrawFilter::Any)).collect()
    }

    #[inline]
    fn take(&mut self, index: usize) -> Card {
        let card = self.cards[index];
        self.remaining -= 1;
        self.cards[index] = self.cards[self.remaining];
        card
    }

    /// Get the number of remaining cards.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Get remaining cards as a slice.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[..self.remaining]
    }

    /// Number of remaining cards of a suit.
    pub fn remaining_of(&self, suit: Suit) -> usize {
        self.remaining_cards().iter().filter(|c| c.suit() == suit).count()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn set(cards: &[&str]) -> CardSet {
        cards.iter().map(|s| Card::parse(s).unwrap()).collect()
    }

    #[test]
    fn test_deck_without() {
        let deck = Deck::without(set(&["As", "Ah"]));
        assert_eq!(deck.remaining(), 50);
        assert!(!deck.remaining_cards().contains(&Card::parse("As").unwrap()));
        assert_eq!(deck.remaining_of(Suit::Hearts), 12);
    }

    #[test]
    fn test_draw_until_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::new();
        let drawn: CardSet = deck.draw_n(&mut rng, 52).unwrap().into_iter().collect();
        assert_eq!(drawn.len(), 52);
        assert_eq!(deck.remaining(), 0);
        assert_eq!(
            deck.draw_uniform(&mut rng, DrawFilter::Any),
            Err(SimulationError::DeckExhausted { filter: DrawFilter::Any })
        );
    }

    #[test]
    fn test_suit_draws() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut deck = Deck::without(set(&["Ah", "Kh"]));
        let filter = DrawFilter::Suit(Suit::Hearts);
        let mut hearts = CardSet::new();
        for _ in 0..11 {
            let card = deck.draw_uniform(&mut rng, filter).unwrap();
            assert_eq!(card.suit(), Suit::Hearts);
            assert!(hearts.insert(card));
        }
        assert_eq!(deck.remaining_of(Suit::Hearts), 0);
        assert_eq!(deck.remaining(), 39);
        assert!(matches!(
            deck.draw_uniform(&mut rng, filter),
            Err(SimulationError::DeckExhausted { .. })
        ));
    }

    #[test]
    fn test_reset() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = Deck::without(set(&["2c"]));
        deck.draw_n(&mut rng, 20).unwrap();
        assert_eq!(deck.remaining(), 31);
        deck.reset();
        assert_eq!(deck.remaining(), 51);
        let live: CardSet = deck.remaining_cards().iter().copied().collect();
        assert_eq!(live.len(), 51);
        assert!(!live.contains(Card::parse("2c").unwrap()));
    }

    #[test]
    fn test_uniform_over_suit() {
        // Every remaining spade should come up as the first spade drawn.
        let mut rng = StdRng::seed_from_u64(99);
        let mut deck = Deck::new();
        let mut seen = CardSet::new();
        for _ in 0..2000 {
            deck.reset();
            seen.insert(deck.draw_uniform(&mut rng, DrawFilter::Suit(Suit::Spades)).unwrap());
        }
        assert_eq!(seen.len(), 13);
    }
}
