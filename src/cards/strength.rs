use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's strength at showdown.
///
/// Always constructed from a Hand, an unordered set of 5 to 7 cards.
/// Total order: the Ranking decides, Kickers break ties. Two hands
/// tie exactly when their best five cards tie.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn value(&self) -> Ranking {
        self.value
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let value = e.find_ranking();
        let kicks = e.find_kickers(value);
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.value, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    fn strength(cards: Vec<(Rank, Suit)>) -> Strength {
        Strength::from(Hand::from(
            cards.into_iter().map(Card::from).collect::<Vec<Card>>(),
        ))
    }

    #[test]
    fn full_house_beats_flush() {
        let boat = strength(vec![
            (Rank::Two, Suit::Spade),
            (Rank::Two, Suit::Heart),
            (Rank::Two, Suit::Diamond),
            (Rank::Three, Suit::Club),
            (Rank::Three, Suit::Spade),
        ]);
        let flush = strength(vec![
            (Rank::Ace, Suit::Spade),
            (Rank::King, Suit::Spade),
            (Rank::Queen, Suit::Spade),
            (Rank::Jack, Suit::Spade),
            (Rank::Nine, Suit::Spade),
        ]);
        assert!(boat > flush);
    }

    #[test]
    fn flush_ties_break_below_the_top_card() {
        let board = vec![
            (Rank::Ace, Suit::Heart),
            (Rank::Nine, Suit::Heart),
            (Rank::Seven, Suit::Heart),
            (Rank::Two, Suit::Heart),
            (Rank::Five, Suit::Club),
        ];
        let mut king = board.clone();
        king.push((Rank::King, Suit::Heart));
        king.push((Rank::Four, Suit::Diamond));
        let mut queen = board.clone();
        queen.push((Rank::Queen, Suit::Heart));
        queen.push((Rank::Four, Suit::Spade));
        assert!(strength(king) > strength(queen));
    }

    #[test]
    fn pair_kickers_decide() {
        let board = vec![
            (Rank::Ace, Suit::Heart),
            (Rank::Ace, Suit::Club),
            (Rank::Nine, Suit::Diamond),
            (Rank::Six, Suit::Spade),
            (Rank::Two, Suit::Heart),
        ];
        let mut king = board.clone();
        king.push((Rank::King, Suit::Spade));
        king.push((Rank::Three, Suit::Diamond));
        let mut jack = board.clone();
        jack.push((Rank::Jack, Suit::Spade));
        jack.push((Rank::Three, Suit::Heart));
        assert!(strength(king) > strength(jack));
    }

    #[test]
    fn identical_boards_tie() {
        let playing_the_board = vec![
            (Rank::Ace, Suit::Heart),
            (Rank::King, Suit::Club),
            (Rank::Queen, Suit::Diamond),
            (Rank::Jack, Suit::Spade),
            (Rank::Ten, Suit::Heart),
        ];
        let mut one = playing_the_board.clone();
        one.push((Rank::Two, Suit::Club));
        one.push((Rank::Three, Suit::Club));
        let mut two = playing_the_board.clone();
        two.push((Rank::Four, Suit::Diamond));
        two.push((Rank::Five, Suit::Diamond));
        assert!(strength(one) == strength(two));
    }
}
