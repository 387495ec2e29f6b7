//! cardrank is a library for playing cards and poker hand ranking.
//!
//! It covers the 52 card deck (building, shuffling, cutting, burying and
//! dealing), queries over any set of cards, and ranking sets of cards of any
//! size into the standard poker categories along with the cards that made
//! the ranking and the kickers left over.
//!
//! ```
//! use cardrank::core::{Deck, HandRanking, Rankable};
//!
//! let deck = Deck::shuffled();
//! let (hand, rest) = deck.deal_hand(7).unwrap();
//! assert_eq!(45, rest.len());
//!
//! let score = hand.score();
//! assert!(score.category > HandRanking::Empty);
//! ```
//!
//! Randomness comes from `rand`. Every random operation has a `_with`
//! version that takes the generator, so seeded runs are reproducible.

/// Allow all the core card functionality to be used
/// externally.
pub mod core;
