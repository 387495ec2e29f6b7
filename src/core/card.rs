use std::fmt;
use std::str::FromStr;

use super::ParseCardError;

/// Card rank.
///
/// The discriminant is the rank's numeric value, two is 2 and ace is 14.
/// Ace is always high here; the one place it plays low (the five high
/// straight) is handled by the hand ranking code.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Rank {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Constant of all the ranks, lowest first.
/// This is what `Rank::ranks()` returns
const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    /// Get all of the `Rank`'s that are possible, in ascending order.
    /// This is used to iterate through all possible
    /// ranks when creating a new deck.
    pub fn ranks() -> [Rank; 13] {
        RANKS
    }

    /// The numeric value of this rank, from 2 for a two up to 14 for an ace.
    ///
    /// ```
    /// use cardrank::core::Rank;
    ///
    /// assert_eq!(2, Rank::Two.value());
    /// assert_eq!(14, Rank::Ace.value());
    /// ```
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Take a numeric value and convert it to a rank.
    /// Anything outside of 2..=14 has no rank.
    pub fn from_value(v: u8) -> Option<Rank> {
        RANKS.iter().copied().find(|r| r.value() == v)
    }

    /// The rank directly below this one, if there is one.
    pub fn below(self) -> Option<Rank> {
        Rank::from_value(self.value() - 1)
    }

    /// Parse the single character form used in card text: `A K Q J T` and
    /// `9` down to `2`.
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            'A' => Some(Rank::Ace),
            'K' => Some(Rank::King),
            'Q' => Some(Rank::Queen),
            'J' => Some(Rank::Jack),
            'T' => Some(Rank::Ten),
            '9' => Some(Rank::Nine),
            '8' => Some(Rank::Eight),
            '7' => Some(Rank::Seven),
            '6' => Some(Rank::Six),
            '5' => Some(Rank::Five),
            '4' => Some(Rank::Four),
            '3' => Some(Rank::Three),
            '2' => Some(Rank::Two),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ace => write!(f, "A"),
            Rank::King => write!(f, "K"),
            Rank::Queen => write!(f, "Q"),
            Rank::Jack => write!(f, "J"),
            r => write!(f, "{}", r.value()),
        }
    }
}

/// Enum for the four different suits.
///
/// Suits are only compared for equality or used to group cards. They have
/// no ordering.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Hearts
    Heart,
    /// Spades
    Spade,
    /// Diamonds
    Diamond,
    /// Clubs
    Club,
}

/// All of the `Suit`'s in the order a new deck is laid out.
/// This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Spade, Suit::Club];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse `h`, `s`, `d` or `c`.
    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'h' => Some(Suit::Heart),
            's' => Some(Suit::Spade),
            'd' => Some(Suit::Diamond),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    /// The glyph used when displaying this suit.
    pub fn glyph(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Spade => '♠',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Rank combined.
///
/// Two cards are equal when both their suit and rank match. Cards are not
/// ordered; sort them by `rank` when an order is needed.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub rank: Rank,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

/// Glyph then rank, "♥A", "♣10".
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

/// Parse a card from its two character form, rank then suit, "Ah" or "Td".
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let rank = chars
            .next()
            .ok_or(ParseCardError::TooFewChars)
            .and_then(|c| Rank::from_char(c).ok_or(ParseCardError::UnexpectedRankChar(c)))?;
        let suit = chars
            .next()
            .ok_or(ParseCardError::TooFewChars)
            .and_then(|c| Suit::from_char(c).ok_or(ParseCardError::UnexpectedSuitChar(c)))?;

        if chars.next().is_some() {
            return Err(ParseCardError::UnparsedCharsRemaining);
        }

        Ok(Card::new(rank, suit))
    }
}
