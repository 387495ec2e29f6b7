use std::collections::HashMap;

use super::{Card, Rank, Suit};

/// Questions that can be asked about any run of cards.
///
/// Implemented for `[Card]`, so it works on slices, `Vec<Card>` and `Deck`
/// alike. Nothing here mutates; every answer is a fresh collection.
pub trait CardQuery {
    /// How many cards of each suit there are. Suits with no cards are left out.
    fn suit_counts(&self) -> HashMap<Suit, usize>;

    /// All the cards of the given suit, in their original order.
    fn of_suit(&self, suit: Suit) -> Vec<Card>;

    /// All the cards of the given rank, in their original order.
    fn of_rank(&self, rank: Rank) -> Vec<Card>;

    /// Is this exact card (suit and rank) present?
    fn has_card(&self, card: &Card) -> bool;

    /// Every card that shares the highest rank present, in their original
    /// order. Empty when there are no cards.
    fn high_cards(&self) -> Vec<Card>;

    /// A copy sorted by descending rank. The sort is stable so cards of the
    /// same rank keep their original order; suit never breaks a tie.
    fn sorted_by_rank(&self) -> Vec<Card>;
}

impl CardQuery for [Card] {
    fn suit_counts(&self) -> HashMap<Suit, usize> {
        let mut suits = HashMap::new();
        for c in self {
            *suits.entry(c.suit).or_insert(0) += 1;
        }
        suits
    }

    fn of_suit(&self, suit: Suit) -> Vec<Card> {
        self.iter().filter(|c| c.suit == suit).copied().collect()
    }

    fn of_rank(&self, rank: Rank) -> Vec<Card> {
        self.iter().filter(|c| c.rank == rank).copied().collect()
    }

    fn has_card(&self, card: &Card) -> bool {
        self.contains(card)
    }

    fn high_cards(&self) -> Vec<Card> {
        match self.iter().map(|c| c.rank).max() {
            Some(top) => self.of_rank(top),
            None => vec![],
        }
    }

    fn sorted_by_rank(&self) -> Vec<Card> {
        let mut sorted = self.to_vec();
        sorted.sort_by(|a, b| b.rank.cmp(&a.rank));
        sorted
    }
}
