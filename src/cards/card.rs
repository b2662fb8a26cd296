//! Card representation.
//!
//! This module provides the fundamental card types used by the simulator:
//! - `Suit`: one of the four suits
//! - `Card`: a single playing card with rank and suit
//! - `CardSet`: a bitmask over the 52-card universe

use std::fmt;

/// Rank of a card (0-12: 2-A).
pub const RANK_2: u8 = 0;
pub const RANK_3: u8 = 1;
pub const RANK_4: u8 = 2;
pub const RANK_5: u8 = 3;
pub const RANK_6: u8 = 4;
pub const RANK_7: u8 = 5;
pub const RANK_8: u8 = 6;
pub const RANK_9: u8 = 7;
pub const RANK_T: u8 = 8;
pub const RANK_J: u8 = 9;
pub const RANK_Q: u8 = 10;
pub const RANK_K: u8 = 11;
pub const RANK_A: u8 = 12;

/// Number of cards in the universe.
pub const DECK_SIZE: usize = 52;

/// Number of cards of each suit.
pub const CARDS_PER_SUIT: usize = 13;

/// Rank characters for display and parsing.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters for display and parsing.
const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// Suit of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit from its index (0-3).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index & 3) as usize]
    }

    /// Parse a lowercase suit character (`c`, `d`, `h`, `s`).
    pub fn from_char(c: char) -> Option<Self> {
        SUIT_CHARS
            .iter()
            .position(|&s| s == c)
            .map(|i| Self::ALL[i])
    }

    /// Index of the suit (0-3).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Character used in hand strings.
    pub fn to_char(self) -> char {
        SUIT_CHARS[self.index()]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// Card index 0-51: rank * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank (0-12) and suit.
    #[inline]
    pub fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!(rank < 13, "rank must be 0-12");
        Self { id: rank * 4 + suit as u8 }
    }

    /// Create a card from its ID (0-51).
    #[inline]
    pub fn from_id(id: u8) -> Self {
        debug_assert!((id as usize) < DECK_SIZE, "card id must be 0-51");
        Self { id }
    }

    /// Parse a card from a two-character token like "As", "Kh", "2c".
    ///
    /// Ranks must be uppercase (`23456789TJQKA`) and suits lowercase
    /// (`cdhs`), matching the hand-string grammar exactly.
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let (r, s) = (chars.next()?, chars.next()?);
        if chars.next().is_some() {
            return None;
        }

        let rank = RANK_CHARS.iter().position(|&c| c == r)?;
        let suit = Suit::from_char(s)?;

        Some(Self::new(rank as u8, suit))
    }

    /// Iterate the full 52-card universe in id order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE as u8).map(Card::from_id)
    }

    /// Get the card's ID (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank (0-12: 2-A).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id / 4
    }

    /// Get the card's suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        Suit::from_index(self.id % 4)
    }

    /// Get rank character for display.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[self.rank() as usize]
    }

    /// Get suit character for display.
    pub fn suit_char(&self) -> char {
        self.suit().to_char()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A set of cards stored as a bitmask over card ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardSet(u64);

impl CardSet {
    /// The empty set.
    pub const EMPTY: CardSet = CardSet(0);

    /// Create an empty set.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Add a card. Returns false if it was already present.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.id();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Check membership.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1u64 << card.id()) != 0
    }

    /// Number of cards in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Number of cards of the given suit in the set.
    pub fn count_suit(&self, suit: Suit) -> usize {
        self.iter().filter(|c| c.suit() == suit).count()
    }

    /// Iterate members in id order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        Card::all().filter(move |&c| self.contains(c))
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let ace_spades = Card::new(RANK_A, Suit::Spades);
        assert_eq!(ace_spades.rank(), RANK_A);
        assert_eq!(ace_spades.suit(), Suit::Spades);
        assert_eq!(ace_spades.to_string(), "As");

        let two_clubs = Card::new(RANK_2, Suit::Clubs);
        assert_eq!(two_clubs.rank(), RANK_2);
        assert_eq!(two_clubs.suit(), Suit::Clubs);
        assert_eq!(two_clubs.to_string(), "2c");
    }

    #[test]
    fn test_card_parsing() {
        assert_eq!(Card::parse("As").unwrap().to_string(), "As");
        assert_eq!(Card::parse("Kh").unwrap().to_string(), "Kh");
        assert_eq!(Card::parse("Td").unwrap().to_string(), "Td");
        assert!(Card::parse("1h").is_none());
        assert!(Card::parse("ah").is_none());
        assert!(Card::parse("AH").is_none());
        assert!(Card::parse("A").is_none());
        assert!(Card::parse("Ahh").is_none());
    }

    #[test]
    fn test_universe() {
        let all: CardSet = Card::all().collect();
        assert_eq!(all.len(), DECK_SIZE);
        for suit in Suit::ALL {
            assert_eq!(all.count_suit(suit), CARDS_PER_SUIT);
        }
    }

    #[test]
    fn test_card_set() {
        let mut set = CardSet::new();
        let ah = Card::parse("Ah").unwrap();
        assert!(set.insert(ah));
        assert!(!set.insert(ah));
        assert!(set.contains(ah));
        assert!(!set.contains(Card::parse("Ac").unwrap()));
        assert_eq!(set.len(), 1);
        assert_eq!(set.count_suit(Suit::Hearts), 1);
    }

    #[test]
    fn test_suit_chars() {
        for suit in Suit::ALL {
            assert_eq!(Suit::from_char(suit.to_char()), Some(suit));
        }
        assert_eq!(Suit::from_char('x'), None);
        assert_eq!(Suit::from_char('H'), None);
    }
}
