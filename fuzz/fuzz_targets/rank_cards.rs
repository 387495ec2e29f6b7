#![no_main]

extern crate arbitrary;
extern crate cardrank;
extern crate libfuzzer_sys;

use cardrank::core::{Card, CardQuery, HAND_SIZE, HandRanking, Rankable, combinations};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub cards: Vec<Card>,
}

fuzz_target!(|input: Input| {
    // Keep the five card enumeration small.
    if input.cards.len() > 9 {
        return;
    }
    let cards = input.cards;
    let score = cards.score();

    if cards.is_empty() {
        assert_eq!(HandRanking::Empty, score.category);
        return;
    }

    if score.category.is_run() {
        assert_eq!(HAND_SIZE, score.winning_cards.len());
        assert!(score.kickers.is_empty());
    } else {
        assert_eq!(cards.len(), score.winning_cards.len() + score.kickers.len());
    }
    for c in score.winning_cards.iter().chain(score.kickers.iter()) {
        assert!(cards.has_card(c));
    }

    if cards.len() >= HAND_SIZE {
        let best_five = combinations(&cards[..], HAND_SIZE)
            .map(|five| five.score().category)
            .max();
        assert_eq!(best_five, Some(score.category));
    }
});
