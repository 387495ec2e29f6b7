//! This is the core module. It has cards, the deck and hand ranking.

/// card.rs has rank and suit.
mod card;
/// Re-export Card, Rank, and Suit
pub use self::card::{Card, Rank, Suit};

/// All the ways things can go wrong.
mod error;
/// Export the errors
pub use self::error::{DeckError, ParseCardError};

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Queries over any slice of cards.
mod query;
/// Export the trait
pub use self::query::CardQuery;

/// Deck is an ordered pile of cards, normally the 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::{DEFAULT_SHUFFLE_ITERATIONS, Deck};

/// Hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{HAND_SIZE, HandRanking, HandScore, PokerHand, Rankable};
