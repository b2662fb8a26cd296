//! Poker hand evaluation.
//!
//! This module ranks 5-card poker hands and finds the best hand a player
//! can make under the 6-card community rule: exactly two of the six hole
//! cards plus exactly three of the five board cards.
//!
//! Ranking is exposed through the [`HandRanker`] trait, which follows the
//! usual evaluator convention (lower value = stronger hand). The built-in
//! [`HandEvaluator`] computes a packed [`HandRank`] strength and maps it onto
//! that scale.

use super::card::Card;
use std::cmp::Ordering;

/// Number of hole cards per player.
pub const HOLE_CARDS: usize = 6;

/// Number of community cards.
pub const BOARD_CARDS: usize = 5;

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Strength of a 5-card hand. Higher values are better hands.
/// Format: category (4 bits) | kicker1 (4 bits) | kicker2 (4 bits) | ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandRank(u32);

impl HandRank {
    /// Strictly greater than any real strength.
    const CEILING: u32 = (HandCategory::StraightFlush as u32 + 1) << 20;

    fn new(category: HandCategory, kickers: &[u8]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, &k) in kickers.iter().take(5).enumerate() {
            value |= (k as u32) << (16 - i * 4);
        }
        Self(value)
    }

    /// Get the raw strength value for comparison.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Value on the lower-is-stronger scale used by [`HandRanker`].
    pub fn to_rank(&self) -> u32 {
        Self::CEILING - self.0
    }

    /// Get the hand category.
    pub fn category(&self) -> HandCategory {
        match self.0 >> 20 {
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            8 => HandCategory::StraightFlush,
            _ => HandCategory::HighCard,
        }
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// A 5-card hand ranking function.
///
/// Implementations return a value where lower means stronger and equal
/// values mean the hands tie. The simulator only ever compares ranks, so any
/// evaluator honoring that order can be plugged in.
pub trait HandRanker: Sync {
    /// Rank exactly five cards.
    fn rank5(&self, cards: &[Card; 5]) -> u32;

    /// Best (lowest) rank over every choice of 2 hole cards and 3 board cards.
    fn best_rank(&self, hole: &[Card; HOLE_CARDS], board: &[Card; BOARD_CARDS]) -> u32 {
        let mut best = u32::MAX;
        for i in 0..HOLE_CARDS {
            for j in (i + 1)..HOLE_CARDS {
                for a in 0..BOARD_CARDS {
                    for b in (a + 1)..BOARD_CARDS {
                        for c in (b + 1)..BOARD_CARDS {
                            let hand = [hole[i], hole[j], board[a], board[b], board[c]];
                            best = best.min(self.rank5(&hand));
                        }
                    }
                }
            }
        }
        best
    }
}

/// Hand evaluator for poker hands.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandEvaluator;

impl HandEvaluator {
    /// Create a new hand evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a 5-card hand.
    pub fn evaluate_5(&self, cards: &[Card; 5]) -> HandRank {
        let mut rank_counts = [0u8; 13];
        let mut rank_bits = 0u16;

        for card in cards {
            rank_counts[card.rank() as usize] += 1;
            rank_bits |= 1 << card.rank();
        }

        let suit = cards[0].suit();
        let is_flush = cards.iter().all(|c| c.suit() == suit);
        let straight_high = self.find_straight(rank_bits);

        if let Some(high) = straight_high {
            let category = if is_flush {
                HandCategory::StraightFlush
            } else {
                HandCategory::Straight
            };
            return HandRank::new(category, &[high]);
        }

        // Group ranks by multiplicity, larger groups first, then higher ranks.
        let mut kickers = [0u8; 5];
        let mut len = 0;
        let mut shape = [0u8; 5];
        for count in (1..=4u8).rev() {
            for rank in (0..13u8).rev() {
                if rank_counts[rank as usize] == count {
                    kickers[len] = rank;
                    shape[len] = count;
                    len += 1;
                }
            }
        }
        let kickers = &kickers[..len];

        let category = match (shape[0], shape[1]) {
            (4, _) => HandCategory::FourOfAKind,
            (3, 2) => HandCategory::FullHouse,
            _ if is_flush => HandCategory::Flush,
            (3, _) => HandCategory::ThreeOfAKind,
            (2, 2) => HandCategory::TwoPair,
            (2, _) => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        };

        HandRank::new(category, kickers)
    }

    /// Strongest 5-card hand using exactly 2 hole cards and 3 board cards.
    pub fn best_hand(&self, hole: &[Card; HOLE_CARDS], board: &[Card; BOARD_CARDS]) -> HandRank {
        HandRank(HandRank::CEILING - self.best_rank(hole, board))
    }

    /// Find the highest straight from a rank bitmask.
    /// Returns the high card of the straight, or None if no straight.
    fn find_straight(&self, rank_bits: u16) -> Option<u8> {
        // Ace doubles as the low card of the wheel (A-2-3-4-5).
        let bits = (rank_bits << 1) | ((rank_bits >> 12) & 1);

        (0..=9u8)
            .rev()
            .find(|&low| (bits >> low) & 0b11111 == 0b11111)
            .map(|low| low + 3)
    }
}

impl HandRanker for HandEvaluator {
    #[inline]
    fn rank5(&self, cards: &[Card; 5]) -> u32 {
        self.evaluate_5(cards).to_rank()
    }
}
