use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use rand::{Rng, rng};
use tracing::{Level, event};

use super::{Card, CardQuery, DeckError, ParseCardError, Rank, Suit, combinations};

/// How many random swaps `Deck::shuffle` makes unless told otherwise.
pub const DEFAULT_SHUFFLE_ITERATIONS: usize = 50;

/// `Deck` is an ordered run of cards.
///
/// Order matters for dealing, cutting and burying but not for ranking.
/// None of the operations mutate the deck they are called on, they hand
/// back a new one instead. A deck isn't a set: building one by hand can
/// put the same card in twice, only `Deck::default()` promises 52 unique
/// cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a standard deck.
    pub const SIZE: usize = 52;

    /// Create an empty deck.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Create the standard 52 card deck.
    ///
    /// Cards are laid out hearts, diamonds, spades then clubs, each suit
    /// from two up to ace. There's no randomness involved.
    ///
    /// ```
    /// use cardrank::core::{Card, Deck, Rank, Suit};
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(52, deck.len());
    /// assert_eq!(Card::new(Rank::Two, Suit::Heart), deck[0]);
    /// assert_eq!(Card::new(Rank::Ace, Suit::Club), deck[51]);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::suits()
            .into_iter()
            .flat_map(|s| Rank::ranks().into_iter().map(move |r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// A standard deck that has been through `shuffle` with the default
    /// number of swaps.
    pub fn shuffled() -> Self {
        Self::standard().shuffle(DEFAULT_SHUFFLE_ITERATIONS)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Add a card to the bottom of the deck.
    /// This does not check if the card is already in the deck.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Get an iterator from this deck
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Shuffle using the thread local random generator.
    /// See `shuffle_with`.
    pub fn shuffle(&self, iterations: usize) -> Deck {
        self.shuffle_with(&mut rng(), iterations)
    }

    /// Make `iterations` random swaps of two cards and return the result.
    ///
    /// Both positions are picked independently so a swap can land on the
    /// same card twice and do nothing. That's fine for play but it isn't
    /// a uniform shuffle. Zero iterations hands back an unchanged copy.
    ///
    /// ```
    /// use cardrank::core::Deck;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let deck = Deck::standard();
    /// let one = deck.shuffle_with(&mut StdRng::seed_from_u64(7), 50);
    /// let two = deck.shuffle_with(&mut StdRng::seed_from_u64(7), 50);
    /// assert_eq!(one, two);
    /// assert_eq!(deck, deck.shuffle_with(&mut StdRng::seed_from_u64(7), 0));
    /// ```
    pub fn shuffle_with<R: Rng>(&self, rng: &mut R, iterations: usize) -> Deck {
        let mut cards = self.cards.clone();
        let n = cards.len();
        if n > 1 {
            for _ in 0..iterations {
                let i = rng.random_range(0..n);
                let j = rng.random_range(0..n);
                if i != j {
                    cards.swap(i, j);
                }
            }
        }
        event!(Level::TRACE, cards = n, iterations, "shuffled deck");
        Deck { cards }
    }

    /// Cut using the thread local random generator.
    /// See `cut_with`.
    pub fn cut(&self) -> Result<Deck, DeckError> {
        self.cut_with(&mut rng())
    }

    /// Cut the deck at a random point.
    ///
    /// The cut point is picked uniformly from `1..len`, and the cards from
    /// the cut point on come first followed by the cards before it. Every
    /// card is kept and both halves keep their order.
    ///
    /// Fails with `DeckError::NotEnoughCards` when there are fewer than two
    /// cards, since there's nowhere to cut.
    pub fn cut_with<R: Rng>(&self, rng: &mut R) -> Result<Deck, DeckError> {
        let n = self.cards.len();
        if n <= 1 {
            return Err(DeckError::NotEnoughCards {
                requested: 2,
                available: n,
            });
        }

        let point = rng.random_range(1..n);
        let mut cards = self.cards.clone();
        cards.rotate_left(point);
        event!(Level::TRACE, cards = n, point, "cut deck");
        Ok(Deck { cards })
    }

    /// Drop the top `count` cards.
    ///
    /// The buried cards aren't tracked, they are just gone from the deck
    /// that comes back. Burying more cards than there are leaves an empty
    /// deck, and burying from an empty deck gives back an empty deck.
    pub fn bury(&self, count: usize) -> Deck {
        if self.cards.is_empty() {
            return self.clone();
        }
        let start = count.min(self.cards.len());
        Deck {
            cards: self.cards[start..].to_vec(),
        }
    }

    /// Deal `count` cards off the top.
    ///
    /// Returns the dealt cards and what's left of the deck, both in their
    /// original order. Nothing is lost or duplicated, together they hold
    /// every card of this deck.
    ///
    /// Fails with `DeckError::NotEnoughCards` rather than dealing short.
    ///
    /// ```
    /// use cardrank::core::{Deck, DeckError};
    ///
    /// let (hand, rest) = Deck::standard().deal_hand(5).unwrap();
    /// assert_eq!(5, hand.len());
    /// assert_eq!(47, rest.len());
    ///
    /// assert_eq!(
    ///     Err(DeckError::NotEnoughCards { requested: 6, available: 5 }),
    ///     hand.deal_hand(6)
    /// );
    /// ```
    pub fn deal_hand(&self, count: usize) -> Result<(Deck, Deck), DeckError> {
        if self.cards.len() < count {
            return Err(DeckError::NotEnoughCards {
                requested: count,
                available: self.cards.len(),
            });
        }

        let (dealt, remaining) = self.cards.split_at(count);
        event!(
            Level::TRACE,
            dealt = dealt.len(),
            remaining = remaining.len(),
            "dealt hand"
        );
        Ok((Deck::from(dealt.to_vec()), Deck::from(remaining.to_vec())))
    }

    /// Calls the `f` closure for each `size` card hand that can be made
    /// from this deck.
    ///
    /// Nothing is called when `size` is zero or larger than the deck.
    pub fn each_hand<F>(&self, size: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        for hand in combinations(&self.cards[..], size) {
            f(&hand);
        }
    }
}

/// The default deck is the standard 52 cards, see `Deck::standard`.
impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deref for Deck {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

impl From<Deck> for Vec<Card> {
    fn from(value: Deck) -> Self {
        value.cards
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Compact form, every card separated by a space.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.cards {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
            first = false;
        }
        Ok(())
    }
}

/// Parse a run of two character cards, "AhKhQhJhTh" or "Ah Kh Qh".
/// Whitespace between cards is ignored. The same card twice is an error.
impl FromStr for Deck {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars().filter(|c| !c.is_whitespace());
        let mut deck = Deck::new();

        // Keep looping until we run out of characters.
        while let Some(rc) = chars.next() {
            let rank = Rank::from_char(rc).ok_or(ParseCardError::UnexpectedRankChar(rc))?;
            let sc = chars.next().ok_or(ParseCardError::TooFewChars)?;
            let suit = Suit::from_char(sc).ok_or(ParseCardError::UnexpectedSuitChar(sc))?;

            let c = Card::new(rank, suit);
            if deck.has_card(&c) {
                return Err(ParseCardError::DuplicateCard(c));
            }
            deck.push(c);
        }

        Ok(deck)
    }
}
