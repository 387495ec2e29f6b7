use std::fmt;

use tracing::{Level, event};

use super::{Card, CardQuery, Rank, Suit, combinations};

/// How many cards make up a straight or a flush.
pub const HAND_SIZE: usize = 5;

/// All the different possible hand rankings, lowest first.
///
/// The derived ordering follows the declaration order, so a higher
/// category always beats a lower one and within a category the carried
/// ranks decide. An ace to five straight carries `Rank::Five`, which puts it
/// below a six high straight.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandRanking {
    /// There were no cards to rank.
    Empty,
    /// No matches. Carries the highest rank.
    HighCard(Rank),
    /// One card matches another.
    Pair(Rank),
    /// Two diffent pair of matching cards, the higher pair first.
    TwoPair(Rank, Rank),
    /// Three of the same rank.
    ThreeOfAKind(Rank),
    /// Five cards in a sequence. Carries the top of the run.
    Straight(Rank),
    /// Five cards of the same suit. Carries the highest card of the suit.
    Flush(Rank),
    /// Three of one rank and two of another, the three first.
    FullHouse(Rank, Rank),
    /// Four of the same rank.
    FourOfAKind(Rank),
    /// Five cards in a sequence all of the same suit.
    StraightFlush(Rank),
    /// Ace, king, queen, jack and ten of one suit.
    RoyalFlush,
}

impl HandRanking {
    /// The rank that decides this ranking: the matched rank for pairs,
    /// trips and quads, the higher one for two pair and full house, and the
    /// top card for runs and high card.
    pub fn high_rank(&self) -> Option<Rank> {
        match *self {
            HandRanking::Empty => None,
            HandRanking::RoyalFlush => Some(Rank::Ace),
            HandRanking::HighCard(r)
            | HandRanking::Pair(r)
            | HandRanking::TwoPair(r, _)
            | HandRanking::ThreeOfAKind(r)
            | HandRanking::Straight(r)
            | HandRanking::Flush(r)
            | HandRanking::FullHouse(r, _)
            | HandRanking::FourOfAKind(r)
            | HandRanking::StraightFlush(r) => Some(r),
        }
    }

    /// Is this one of the five card runs (straight, flush, straight flush,
    /// royal flush)? Those never have kickers.
    pub fn is_run(&self) -> bool {
        matches!(
            self,
            HandRanking::Straight(_)
                | HandRanking::Flush(_)
                | HandRanking::StraightFlush(_)
                | HandRanking::RoyalFlush
        )
    }
}

impl fmt::Display for HandRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandRanking::Empty => write!(f, "No cards"),
            HandRanking::HighCard(r) => write!(f, "High card ({r})"),
            HandRanking::Pair(r) => write!(f, "Pair ({r})"),
            HandRanking::TwoPair(high, low) => write!(f, "Two pair ({high}, {low})"),
            HandRanking::ThreeOfAKind(r) => write!(f, "Three of a kind ({r})"),
            HandRanking::Straight(r) => write!(f, "Straight ({r} high)"),
            HandRanking::Flush(r) => write!(f, "Flush ({r} high)"),
            HandRanking::FullHouse(three, two) => write!(f, "Full house ({three} over {two})"),
            HandRanking::FourOfAKind(r) => write!(f, "Four of a kind ({r})"),
            HandRanking::StraightFlush(r) => write!(f, "Straight flush ({r} high)"),
            HandRanking::RoyalFlush => write!(f, "Royal flush"),
        }
    }
}

/// The result of ranking a set of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandScore {
    /// The best ranking found.
    pub category: HandRanking,
    /// Just the cards that make the ranking: the four matching cards of
    /// four of a kind, three then two for a full house, the five cards of
    /// a run, the single top card for high card.
    pub winning_cards: Vec<Card>,
    /// Every other card from the input, highest rank first. Always empty
    /// for runs, only the five cards of the run count there.
    pub kickers: Vec<Card>,
}

impl HandScore {
    fn empty() -> Self {
        Self {
            category: HandRanking::Empty,
            winning_cards: vec![],
            kickers: vec![],
        }
    }

    fn run(category: HandRanking, winning_cards: Vec<Card>) -> Self {
        Self {
            category,
            winning_cards,
            kickers: vec![],
        }
    }
}

/// Hand ranking engine over one fixed set of cards.
///
/// The cards can be any size. Rankings that need five cards just never
/// match on fewer. Every query is side effect free, so they can be called
/// in any order and as often as needed.
///
/// ```
/// use cardrank::core::{Card, HandRanking, PokerHand, Rank, Suit};
///
/// let cards: Vec<Card> = ["Ah", "2c", "3d", "4s", "5d"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let score = PokerHand::new(&cards).hand_ranking();
///
/// assert_eq!(HandRanking::Straight(Rank::Five), score.category);
/// assert_eq!(Card::new(Rank::Ace, Suit::Heart), score.winning_cards[4]);
/// assert!(score.kickers.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PokerHand<'a> {
    cards: &'a [Card],
}

impl<'a> PokerHand<'a> {
    /// Wrap the cards to rank. Nothing is computed until a query is made.
    pub fn new(cards: &'a [Card]) -> Self {
        Self { cards }
    }

    /// The cards this hand was built from.
    pub fn cards(&self) -> &'a [Card] {
        self.cards
    }

    /// Find the best ranking these cards hold, the cards that make it and
    /// the kickers.
    ///
    /// Categories are tried from the royal flush down and the first one
    /// that matches wins. This never fails: anything non empty is at least
    /// a high card, and no cards at all is `HandRanking::Empty`.
    pub fn hand_ranking(&self) -> HandScore {
        let score = self.best_category();
        event!(
            Level::TRACE,
            cards = self.cards.len(),
            category = %score.category,
            "ranked hand"
        );
        score
    }

    fn best_category(&self) -> HandScore {
        let Some(top) = self.high_card() else {
            return HandScore::empty();
        };

        if let Some(cards) = self.royal_flush() {
            return HandScore::run(HandRanking::RoyalFlush, cards);
        }
        if let Some((high, cards)) = self.straight_flush() {
            return HandScore::run(HandRanking::StraightFlush(high), cards);
        }

        let mut split = Split::new(self.cards);
        if let Some(four) = self.four_of_a_kind() {
            split.take(four, 4);
            return split.finish(HandRanking::FourOfAKind(four));
        }
        if let Some((three, two)) = self.full_house() {
            split.take(three, 3);
            split.take(two, 2);
            return split.finish(HandRanking::FullHouse(three, two));
        }
        if let Some((high, cards)) = self.flush() {
            return HandScore::run(HandRanking::Flush(high), cards);
        }
        if let Some((high, cards)) = self.straight() {
            return HandScore::run(HandRanking::Straight(high), cards);
        }
        if let Some(three) = self.three_of_a_kind() {
            split.take(three, 3);
            return split.finish(HandRanking::ThreeOfAKind(three));
        }
        if let Some((high, low)) = self.two_pair() {
            split.take(high, 2);
            split.take(low, 2);
            return split.finish(HandRanking::TwoPair(high, low));
        }
        if let Some(pair) = self.pair() {
            split.take(pair, 2);
            return split.finish(HandRanking::Pair(pair));
        }

        split.take(top, 1);
        split.finish(HandRanking::HighCard(top))
    }

    /// The ace, king, queen, jack and ten of one suit, in that order, if
    /// they are all here. The cards don't need to be next to each other.
    pub fn royal_flush(&self) -> Option<Vec<Card>> {
        const ROYAL: [Rank; 5] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];

        Suit::suits().into_iter().find_map(|suit| {
            let royal: Vec<Card> = ROYAL.iter().map(|r| Card::new(*r, suit)).collect();
            let found = royal.iter().all(|c| self.cards.has_card(c));
            found.then_some(royal)
        })
    }

    /// The highest five card straight that is also a flush, with its top
    /// rank and the cards from the top of the run down.
    pub fn straight_flush(&self) -> Option<(Rank, Vec<Card>)> {
        if !self.has_five_suited() {
            return None;
        }
        self.best_five(|five| {
            if is_flush(five) {
                as_straight(five)
            } else {
                None
            }
        })
    }

    /// The highest rank with four cards.
    pub fn four_of_a_kind(&self) -> Option<Rank> {
        self.highest_of_a_kind(4, None)
    }

    /// The highest rank with three cards, then the highest other rank
    /// with at least two.
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        let three = self.highest_of_a_kind(3, None)?;
        let two = self.highest_of_a_kind(2, Some(three))?;
        Some((three, two))
    }

    /// The best five cards of one suit, highest first, with the top rank.
    ///
    /// When more than one suit (or more than five cards of a suit) could
    /// make a flush the one with the higher cards wins.
    pub fn flush(&self) -> Option<(Rank, Vec<Card>)> {
        if !self.has_five_suited() {
            return None;
        }
        self.best_five(|five| {
            if !is_flush(five) {
                return None;
            }
            let sorted = five.sorted_by_rank();
            let ranks: Vec<Rank> = sorted.iter().map(|c| c.rank).collect();
            Some((ranks, sorted))
        })
        .map(|(ranks, cards)| (ranks[0], cards))
    }

    /// The highest five card straight, with its top rank and the cards from
    /// the top of the run down. An ace to five straight is five high and
    /// has the ace last.
    pub fn straight(&self) -> Option<(Rank, Vec<Card>)> {
        self.best_five(as_straight)
    }

    /// The highest rank with three cards.
    pub fn three_of_a_kind(&self) -> Option<Rank> {
        self.highest_of_a_kind(3, None)
    }

    /// The two highest ranks with at least two cards, higher first.
    pub fn two_pair(&self) -> Option<(Rank, Rank)> {
        let high = self.highest_of_a_kind(2, None)?;
        let low = self.highest_of_a_kind(2, Some(high))?;
        Some((high, low))
    }

    /// The highest rank with two cards.
    pub fn pair(&self) -> Option<Rank> {
        self.highest_of_a_kind(2, None)
    }

    /// The highest rank present.
    pub fn high_card(&self) -> Option<Rank> {
        self.cards.iter().map(|c| c.rank).max()
    }

    /// Highest rank that has at least `count` cards, skipping `except`.
    fn highest_of_a_kind(&self, count: usize, except: Option<Rank>) -> Option<Rank> {
        let mut counts = [0usize; 15];
        for c in self.cards {
            counts[c.rank.value() as usize] += 1;
        }
        Rank::ranks()
            .into_iter()
            .rev()
            .find(|r| Some(*r) != except && counts[r.value() as usize] >= count)
    }

    fn has_five_suited(&self) -> bool {
        self.cards
            .suit_counts()
            .values()
            .any(|count| *count >= HAND_SIZE)
    }

    /// Try every five card combination and keep the one with the highest
    /// key. The first one found wins a tie.
    fn best_five<K, F>(&self, score: F) -> Option<(K, Vec<Card>)>
    where
        K: Ord,
        F: Fn(&[Card]) -> Option<(K, Vec<Card>)>,
    {
        let mut best: Option<(K, Vec<Card>)> = None;
        for five in combinations(self.cards, HAND_SIZE) {
            if let Some((key, cards)) = score(&five) {
                if best.as_ref().is_none_or(|(best_key, _)| key > *best_key) {
                    best = Some((key, cards));
                }
            }
        }
        best
    }
}

/// Are all of these cards the same suit?
fn is_flush(cards: &[Card]) -> bool {
    cards.len() == HAND_SIZE && cards.iter().all(|c| c.suit == cards[0].suit)
}

/// Does every card sit exactly one rank below the one before it?
fn is_descending_run(sorted: &[Card]) -> bool {
    sorted.windows(2).all(|w| w[0].rank.below() == Some(w[1].rank))
}

/// If these five cards are a straight, the top rank and the cards in run
/// order.
///
/// Cards are sorted by descending rank and each one has to be one below
/// the card before it, so a repeated rank breaks the run. Failing that, an
/// ace on top gets a second chance as the low card: the other four have to
/// run from five down to two, and the straight is five high.
fn as_straight(cards: &[Card]) -> Option<(Rank, Vec<Card>)> {
    if cards.len() != HAND_SIZE {
        return None;
    }

    let sorted = cards.sorted_by_rank();
    if is_descending_run(&sorted) {
        return Some((sorted[0].rank, sorted));
    }

    let ace = sorted[0];
    if ace.rank != Rank::Ace {
        return None;
    }
    let mut low: Vec<Card> = sorted[1..].to_vec();
    if low[0].rank != Rank::Five || !is_descending_run(&low) {
        return None;
    }
    low.push(ace);
    Some((Rank::Five, low))
}

/// Splits the input into winning cards and kickers. Cards are taken by
/// position so repeated cards are never lost or counted twice.
struct Split<'a> {
    cards: &'a [Card],
    used: Vec<bool>,
    winning: Vec<Card>,
}

impl<'a> Split<'a> {
    fn new(cards: &'a [Card]) -> Self {
        Self {
            cards,
            used: vec![false; cards.len()],
            winning: Vec::with_capacity(HAND_SIZE),
        }
    }

    /// Move the first `count` unused cards of `rank` into the winning cards.
    fn take(&mut self, rank: Rank, count: usize) {
        let mut left = count;
        for (c, used) in self.cards.iter().zip(self.used.iter_mut()) {
            if left == 0 {
                break;
            }
            if !*used && c.rank == rank {
                *used = true;
                self.winning.push(*c);
                left -= 1;
            }
        }
    }

    fn finish(self, category: HandRanking) -> HandScore {
        let rest: Vec<Card> = self
            .cards
            .iter()
            .zip(self.used.iter())
            .filter(|(_, used)| !**used)
            .map(|(c, _)| *c)
            .collect();
        HandScore {
            category,
            winning_cards: self.winning,
            kickers: rest.sorted_by_rank(),
        }
    }
}

/// Anything that can be turned into a `HandScore`.
pub trait Rankable {
    /// Rank these cards. It doesn't do any caching so it's left up to the
    /// user to understand that duplicate work will be done if this is
    /// called more than once.
    fn score(&self) -> HandScore;
}

impl Rankable for [Card] {
    fn score(&self) -> HandScore {
        PokerHand::new(self).hand_ranking()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::Deck;

    /// Space separated cards. Unlike parsing a `Deck` this allows the same
    /// card more than once.
    fn hand(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn ranks(cards: &[Card]) -> Vec<Rank> {
        cards.iter().map(|c| c.rank).collect()
    }

    fn royal_flush_hand() -> Vec<Card> {
        hand("Ah Kh Qh Jh Th")
    }

    #[test]
    fn test_cmp() {
        assert!(HandRanking::HighCard(Rank::Ace) < HandRanking::Pair(Rank::Two));
        assert!(HandRanking::Straight(Rank::Five) < HandRanking::Straight(Rank::Six));
        assert!(HandRanking::StraightFlush(Rank::King) < HandRanking::RoyalFlush);
        assert!(
            HandRanking::TwoPair(Rank::King, Rank::Three)
                < HandRanking::TwoPair(Rank::King, Rank::Four)
        );
        assert!(HandRanking::Empty < HandRanking::HighCard(Rank::Two));
    }

    #[test]
    fn test_royal_flush() {
        let cards = royal_flush_hand();
        let h = PokerHand::new(&cards);

        let royal = h.royal_flush().unwrap();
        assert_eq!(
            vec![Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten],
            ranks(&royal)
        );

        // A royal flush is always a straight flush, a flush and a straight.
        assert_eq!(Some(Rank::Ace), h.straight_flush().map(|(r, _)| r));
        assert_eq!(Some(Rank::Ace), h.straight().map(|(r, _)| r));
        assert_eq!(Some(Rank::Ace), h.flush().map(|(r, _)| r));

        let score = h.hand_ranking();
        assert_eq!(HandRanking::RoyalFlush, score.category);
        assert_eq!(cards, score.winning_cards);
        assert!(score.kickers.is_empty());
    }

    #[test]
    fn test_royal_flush_buried() {
        let cards = hand("7c Ah Kh Qh Jh Th 2c");
        let score = cards.score();
        assert_eq!(HandRanking::RoyalFlush, score.category);
        assert_eq!(royal_flush_hand(), score.winning_cards);
        assert!(score.kickers.is_empty());
    }

    #[test]
    fn test_royal_flush_scattered() {
        let cards = hand("Th 3c Ah 9d Qh Kh 5s Jh");
        assert_eq!(HandRanking::RoyalFlush, cards.score().category);
    }

    #[test]
    fn test_not_royal_flush() {
        let cards = hand("As Kh Qh Jh Th");
        let h = PokerHand::new(&cards);
        assert!(h.royal_flush().is_none());
        assert_eq!(HandRanking::Straight(Rank::Ace), h.hand_ranking().category);
    }

    #[test]
    fn test_straight_flush() {
        let cards = hand("9h Kh Qh Jh Th");
        let h = PokerHand::new(&cards);

        let (high, run) = h.straight_flush().unwrap();
        assert_eq!(Rank::King, high);
        assert_eq!(
            vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine],
            ranks(&run)
        );
        assert!(h.straight().is_some());
        assert!(h.flush().is_some());

        let score = h.hand_ranking();
        assert_eq!(HandRanking::StraightFlush(Rank::King), score.category);
        assert_eq!(5, score.winning_cards.len());
        assert!(score.kickers.is_empty());
    }

    #[test]
    fn test_not_straight_flush() {
        let cards = hand("9s Kh Qh Jh Th");
        let h = PokerHand::new(&cards);
        assert!(h.straight_flush().is_none());
        assert_eq!(HandRanking::Straight(Rank::King), h.hand_ranking().category);
    }

    #[test]
    fn test_straight_flush_ace_low() {
        let cards = hand("Ad 2d 3d 4d 5d Kc");
        let score = cards.score();
        assert_eq!(HandRanking::StraightFlush(Rank::Five), score.category);
        assert_eq!(
            vec![Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace],
            ranks(&score.winning_cards)
        );
    }

    #[test]
    fn test_straight_flush_in_seven_with_other_flush_cards() {
        // Hearts make both a flush and a straight flush, the straight flush wins.
        let cards = hand("Ah 8h 7h 6h 5h 4h 2c");
        let score = cards.score();
        assert_eq!(HandRanking::StraightFlush(Rank::Eight), score.category);
        assert_eq!(
            vec![Rank::Eight, Rank::Seven, Rank::Six, Rank::Five, Rank::Four],
            ranks(&score.winning_cards)
        );
    }

    #[test]
    fn test_four_of_a_kind() {
        let cards = hand("Kh 3h 3d 3s 3c");
        let h = PokerHand::new(&cards);
        assert_eq!(Some(Rank::Three), h.four_of_a_kind());

        let score = h.hand_ranking();
        assert_eq!(HandRanking::FourOfAKind(Rank::Three), score.category);
        assert_eq!(hand("3h 3d 3s 3c"), score.winning_cards);
        assert_eq!(hand("Kh"), score.kickers);
    }

    #[test]
    fn test_four_of_a_kind_seven_cards() {
        let cards = hand("Kc 2h 5h 3h 3s 3d 3c");
        let score = cards.score();
        assert_eq!(HandRanking::FourOfAKind(Rank::Three), score.category);
        assert_eq!(4, score.winning_cards.len());
        assert_eq!(vec![Rank::King, Rank::Five, Rank::Two], ranks(&score.kickers));
    }

    #[test]
    fn test_not_four_of_a_kind() {
        let cards = hand("Kh 2h 3h 3d 3s");
        assert!(PokerHand::new(&cards).four_of_a_kind().is_none());
    }

    #[test]
    fn test_full_house() {
        let cards = hand("3h 3d 3s Kh Kd");
        let h = PokerHand::new(&cards);
        assert_eq!(Some((Rank::Three, Rank::King)), h.full_house());

        let score = h.hand_ranking();
        assert_eq!(HandRanking::FullHouse(Rank::Three, Rank::King), score.category);
        assert_eq!(cards, score.winning_cards);
        assert!(score.kickers.is_empty());
    }

    #[test]
    fn test_full_house_from_two_trips() {
        let cards = hand("3h Kh 3d Kd 3s Ks 2c");
        let score = cards.score();
        assert_eq!(HandRanking::FullHouse(Rank::King, Rank::Three), score.category);
        assert_eq!(hand("Kh Kd Ks 3h 3d"), score.winning_cards);
        assert_eq!(hand("3s 2c"), score.kickers);
    }

    #[test]
    fn test_full_house_beats_flush() {
        let cards = hand("Qh Qd Qs 9h 9c 4h 2h 7h");
        assert_eq!(HandRanking::FullHouse(Rank::Queen, Rank::Nine), cards.score().category);
    }

    #[test]
    fn test_flush() {
        let cards = hand("Kh 3h 4h Jh 8h");
        let h = PokerHand::new(&cards);
        let (high, flush) = h.flush().unwrap();
        assert_eq!(Rank::King, high);
        assert_eq!(
            vec![Rank::King, Rank::Jack, Rank::Eight, Rank::Four, Rank::Three],
            ranks(&flush)
        );

        let score = h.hand_ranking();
        assert_eq!(HandRanking::Flush(Rank::King), score.category);
        assert!(score.kickers.is_empty());
    }

    #[test]
    fn test_not_flush() {
        let four = hand("Kh 3h 4h Jh");
        assert!(PokerHand::new(&four).flush().is_none());

        let mixed = hand("Kh 3h 4h Js 8h");
        assert!(PokerHand::new(&mixed).flush().is_none());
    }

    #[test]
    fn test_flush_picks_top_five_of_suit() {
        let cards = hand("2h Kh 3h 9h 4h Jh 5c");
        let score = cards.score();
        assert_eq!(HandRanking::Flush(Rank::King), score.category);
        assert_eq!(
            vec![Rank::King, Rank::Jack, Rank::Nine, Rank::Four, Rank::Three],
            ranks(&score.winning_cards)
        );
    }

    #[test]
    fn test_flush_picks_higher_suit() {
        let cards = hand("2h 9h 4h 6h Th 3s 5s 7s 8s Ks");
        let (high, flush) = PokerHand::new(&cards).flush().unwrap();
        assert_eq!(Rank::King, high);
        assert!(flush.iter().all(|c| c.suit == Suit::Spade));
    }

    #[test]
    fn test_flush_beats_straight() {
        let cards = hand("9h 8c 7h 6d 5h 2h Kh");
        assert_eq!(HandRanking::Flush(Rank::King), cards.score().category);
    }

    #[test]
    fn test_straight_five_cards() {
        let cards = hand("Jh Tc 9d 8s 7d");
        let score = cards.score();
        assert_eq!(HandRanking::Straight(Rank::Jack), score.category);
        assert_eq!(cards, score.winning_cards);
        assert!(score.kickers.is_empty());
    }

    #[test]
    fn test_straight_seven_cards() {
        let cards = hand("Th 9c 8d 7s 6d Qc 2s");
        let (high, _) = PokerHand::new(&cards).straight().unwrap();
        assert_eq!(Rank::Ten, high);
    }

    #[test]
    fn test_straight_with_pairs() {
        let cards = hand("Jh Tc 9d 8s 7d 3h 3s");
        let score = cards.score();
        assert_eq!(HandRanking::Straight(Rank::Jack), score.category);
        assert!(score.kickers.is_empty());
    }

    #[test]
    fn test_straight_not_next_to_each_other() {
        // The run is spread out through the input order.
        let cards = hand("9h 2c 8d 3s 7c Kd 6h 5s");
        let (high, run) = PokerHand::new(&cards).straight().unwrap();
        assert_eq!(Rank::Nine, high);
        assert_eq!(
            vec![Rank::Nine, Rank::Eight, Rank::Seven, Rank::Six, Rank::Five],
            ranks(&run)
        );
    }

    #[test]
    fn test_straight_picks_highest_run() {
        let cards = hand("4h 5c 6d 7s 8c 9d Th");
        assert_eq!(HandRanking::Straight(Rank::Ten), cards.score().category);
    }

    #[test]
    fn test_not_straight() {
        let cards = hand("2h Kc Qd Js Td");
        assert!(PokerHand::new(&cards).straight().is_none());
        assert_eq!(HandRanking::HighCard(Rank::King), cards.score().category);
    }

    #[test]
    fn test_not_straight_long_hand() {
        let cards = hand("Td Th Kc 8d 7s 6d 5c 2s");
        let h = PokerHand::new(&cards);
        assert!(h.straight().is_none());
        assert_eq!(HandRanking::Pair(Rank::Ten), h.hand_ranking().category);
    }

    #[test]
    fn test_not_straight_less_than_five_cards() {
        let cards = hand("Kc Qd Js Td");
        assert!(PokerHand::new(&cards).straight().is_none());
    }

    #[test]
    fn test_straight_with_ace_low() {
        let cards = hand("Ah 2c 3d 4s 5d");
        let score = cards.score();
        assert_eq!(HandRanking::Straight(Rank::Five), score.category);
        assert_eq!(hand("5d 4s 3d 2c Ah"), score.winning_cards);
        assert!(score.kickers.is_empty());
    }

    #[test]
    fn test_long_straight_with_ace_low() {
        let cards = hand("Ah 2c 3d 4s 5d Kc Qd");
        assert_eq!(HandRanking::Straight(Rank::Five), cards.score().category);
    }

    #[test]
    fn test_ace_low_loses_to_six_high() {
        let cards = hand("Ah 2c 3d 4s 5d 6c");
        assert_eq!(HandRanking::Straight(Rank::Six), cards.score().category);
    }

    #[test]
    fn test_ace_does_not_wrap_around() {
        let cards = hand("Qh Kc Ad 2s 3d");
        assert!(PokerHand::new(&cards).straight().is_none());
    }

    #[test]
    fn test_three_of_a_kind() {
        let cards = hand("Kh 3h 3d 3s");
        let h = PokerHand::new(&cards);
        assert_eq!(Some(Rank::Three), h.three_of_a_kind());

        let score = h.hand_ranking();
        assert_eq!(HandRanking::ThreeOfAKind(Rank::Three), score.category);
        assert_eq!(hand("3h 3d 3s"), score.winning_cards);
        assert_eq!(hand("Kh"), score.kickers);
    }

    #[test]
    fn test_three_of_a_kind_kickers_sorted() {
        let cards = hand("4c 9s 9h 2d 9d Qh Jc");
        let score = cards.score();
        assert_eq!(HandRanking::ThreeOfAKind(Rank::Nine), score.category);
        assert_eq!(
            vec![Rank::Queen, Rank::Jack, Rank::Four, Rank::Two],
            ranks(&score.kickers)
        );
    }

    #[test]
    fn test_two_pair() {
        let cards = hand("3h 3h Kh Kh Ad");
        let h = PokerHand::new(&cards);
        assert_eq!(Some((Rank::King, Rank::Three)), h.two_pair());

        let score = h.hand_ranking();
        assert_eq!(HandRanking::TwoPair(Rank::King, Rank::Three), score.category);
        assert_eq!(hand("Kh Kh 3h 3h"), score.winning_cards);
        assert_eq!(hand("Ad"), score.kickers);
    }

    #[test]
    fn test_two_pair_from_three_pairs() {
        let cards = hand("2c Ah Ks 2d Qh Ad Kc");
        let score = cards.score();
        assert_eq!(HandRanking::TwoPair(Rank::Ace, Rank::King), score.category);
        assert_eq!(
            vec![Rank::Queen, Rank::Two, Rank::Two],
            ranks(&score.kickers)
        );
    }

    #[test]
    fn test_pair() {
        let cards = hand("Kh 3h 3d");
        let h = PokerHand::new(&cards);
        assert_eq!(Some(Rank::Three), h.pair());

        let score = h.hand_ranking();
        assert_eq!(HandRanking::Pair(Rank::Three), score.category);
        assert_eq!(hand("3h 3d"), score.winning_cards);
        assert_eq!(hand("Kh"), score.kickers);
    }

    #[test]
    fn test_two_card_hands() {
        assert_eq!(HandRanking::Pair(Rank::Ace), hand("Ah As").score().category);
        assert_eq!(HandRanking::HighCard(Rank::Ace), hand("7c Ah").score().category);
    }

    #[test]
    fn test_high_card() {
        let cards = hand("3h 4h 3s 7d Kh");
        let h = PokerHand::new(&cards);
        assert_eq!(Some(Rank::King), h.high_card());
        assert_eq!(HandRanking::Pair(Rank::Three), h.hand_ranking().category);

        let cards = hand("3h 4h 9s 7d Kc");
        let score = cards.score();
        assert_eq!(HandRanking::HighCard(Rank::King), score.category);
        assert_eq!(hand("Kc"), score.winning_cards);
        assert_eq!(
            vec![Rank::Nine, Rank::Seven, Rank::Four, Rank::Three],
            ranks(&score.kickers)
        );
    }

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<Card> = vec![];
        let h = PokerHand::new(&empty);
        assert!(h.high_card().is_none());
        assert!(h.pair().is_none());
        assert!(h.straight().is_none());
        assert!(h.flush().is_none());
        assert!(h.royal_flush().is_none());
        assert_eq!(HandScore::empty(), h.hand_ranking());

        let single = hand("5c");
        let score = single.score();
        assert_eq!(HandRanking::HighCard(Rank::Five), score.category);
        assert_eq!(single, score.winning_cards);
        assert!(score.kickers.is_empty());
    }

    #[test]
    fn test_queries_are_repeatable() {
        let cards = hand("Kc 2h 5h 3h 3s 3d 3c");
        let h = PokerHand::new(&cards);
        let first = h.hand_ranking();
        assert_eq!(Some(Rank::Three), h.three_of_a_kind());
        assert_eq!(Some(Rank::Three), h.pair());
        assert_eq!(first, h.hand_ranking());
        assert_eq!(cards, h.cards());
    }

    #[test]
    fn test_high_rank() {
        assert_eq!(None, HandRanking::Empty.high_rank());
        assert_eq!(Some(Rank::Ace), HandRanking::RoyalFlush.high_rank());
        assert_eq!(
            Some(Rank::Queen),
            HandRanking::FullHouse(Rank::Queen, Rank::Two).high_rank()
        );
        assert!(HandRanking::Flush(Rank::Nine).is_run());
        assert!(!HandRanking::FourOfAKind(Rank::Nine).is_run());
    }

    #[test]
    fn test_display() {
        assert_eq!("Royal flush", HandRanking::RoyalFlush.to_string());
        assert_eq!("Straight (5 high)", HandRanking::Straight(Rank::Five).to_string());
        assert_eq!(
            "Full house (3 over K)",
            HandRanking::FullHouse(Rank::Three, Rank::King).to_string()
        );
        assert_eq!(
            "Two pair (K, 3)",
            HandRanking::TwoPair(Rank::King, Rank::Three).to_string()
        );
    }

    #[test_log::test]
    fn test_random_deals_keep_every_card() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..500 {
            let deck = Deck::standard().shuffle_with(&mut rng, 200);
            let (dealt, _) = deck.deal_hand(7).unwrap();
            let score = dealt.score();

            assert_ne!(HandRanking::Empty, score.category);
            if score.category.is_run() {
                assert_eq!(HAND_SIZE, score.winning_cards.len());
                assert!(score.kickers.is_empty());
            } else {
                assert_eq!(dealt.len(), score.winning_cards.len() + score.kickers.len());
                for c in &score.kickers {
                    assert!(!score.winning_cards.contains(c));
                }
            }
            for c in score.winning_cards.iter().chain(score.kickers.iter()) {
                assert!(dealt.has_card(c));
            }
            assert!(score.kickers.windows(2).all(|w| w[0].rank >= w[1].rank));
        }
    }

    #[test]
    fn test_seven_cards_match_best_five() {
        // The best ranking of seven cards is the best ranking of any five of them.
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let deck = Deck::standard().shuffle_with(&mut rng, 200);
            let (dealt, _) = deck.deal_hand(7).unwrap();
            let best_five = combinations(&dealt[..], HAND_SIZE)
                .map(|five| five.score().category)
                .max()
                .unwrap();
            assert_eq!(best_five, dealt.score().category);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_score() {
        let score = hand("Kh 3h 3d 3s 3c").score();
        let json = serde_json::to_string(&score).unwrap();
        let back: HandScore = serde_json::from_str(&json).unwrap();
        assert_eq!(score, back);
    }
}
