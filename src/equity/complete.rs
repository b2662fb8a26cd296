//! Per-trial hand completion and board dealing.
//!
//! Draw order is fixed so a seeded run is reproducible:
//! 1. every hand's suit placeholders (hands in input order, suits in
//!    [`Suit::ALL`] order)
//! 2. every hand's wildcards (hands in input order)
//! 3. the five board cards
//!
//! Placeholders go first across all hands so that no wildcard can take a
//! card a later placeholder depends on.

use rand::Rng;

use crate::cards::{Card, CardSet, Deck, DrawFilter, Suit, BOARD_CARDS, HOLE_CARDS};
use crate::error::SimulationError;

use super::spec::HandSpec;

/// One concrete deal: a six-card hand per player plus the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<[Card; HOLE_CARDS]>,
    pub board: [Card; BOARD_CARDS],
}

impl Deal {
    fn empty(players: usize) -> Self {
        let blank = Card::from_id(0);
        Self {
            hands: vec![[blank; HOLE_CARDS]; players],
            board: [blank; BOARD_CARDS],
        }
    }

    /// Every dealt card, hands first then board.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hands.iter().flatten().chain(self.board.iter()).copied()
    }
}

/// Resolves hand specifications into concrete deals, one trial at a time.
#[derive(Debug, Clone)]
pub struct Dealer<'a> {
    specs: &'a [HandSpec],
    deck: Deck,
    /// Number of known cards at the front of each hand.
    known: Vec<usize>,
    /// Cards placed so far in each hand during the current trial.
    fill: Vec<usize>,
    deal: Deal,
}

impl<'a> Dealer<'a> {
    /// Create a dealer whose deck excludes every known card of `specs`.
    pub fn new(specs: &'a [HandSpec]) -> Self {
        let dead: CardSet = specs.iter().flat_map(|s| s.known_cards()).collect();
        let mut deal = Deal::empty(specs.len());
        let mut known = Vec::with_capacity(specs.len());

        for (hand, spec) in deal.hands.iter_mut().zip(specs) {
            let mut n = 0;
            for card in spec.known_cards() {
                hand[n] = card;
                n += 1;
            }
            known.push(n);
        }

        Self {
            specs,
            deck: Deck::without(dead),
            fill: known.clone(),
            known,
            deal,
        }
    }

    /// Deal one trial. The returned deal is overwritten by the next call.
    pub fn deal<R: Rng>(&mut self, rng: &mut R) -> Result<&Deal, SimulationError> {
        self.deck.reset();
        self.fill.copy_from_slice(&self.known);

        for ((hand, spec), n) in self.deal.hands.iter_mut().zip(self.specs).zip(self.fill.iter_mut()) {
            let counts = spec.placeholder_counts();
            for suit in Suit::ALL {
                for _ in 0..counts[suit.index()] {
                    hand[*n] = self.deck.draw_uniform(rng, DrawFilter::Suit(suit))?;
                    *n += 1;
                }
            }
        }

        for ((hand, spec), n) in self.deal.hands.iter_mut().zip(self.specs).zip(self.fill.iter_mut()) {
            for _ in 0..spec.wildcard_count() {
                hand[*n] = self.deck.draw_uniform(rng, DrawFilter::Any)?;
                *n += 1;
            }
        }

        for slot in self.deal.board.iter_mut() {
            *slot = self.deck.draw_uniform(rng, DrawFilter::Any)?;
        }

        Ok(&self.deal)
    }
}
