use thiserror::Error;

use super::Card;

/// The error raised by deck operations that can't produce a result of the
/// size they were asked for. Everything else in the library either
/// succeeds or reports absence with an `Option`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeckError {
    #[error("Not enough cards: {requested} needed but only {available} in the deck")]
    NotEnoughCards { requested: usize, available: usize },
}

/// Errors from reading cards written as text, "Ah" or "AhKhQhJhTh".
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseCardError {
    #[error("Unable to parse rank from {0:?}")]
    UnexpectedRankChar(char),
    #[error("Unable to parse suit from {0:?}")]
    UnexpectedSuitChar(char),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card already added to deck {0}")]
    DuplicateCard(Card),
}
