use super::rank::Rank;

/// A poker hand's value class.
///
/// Variant order is showdown order; ties within a class fall through
/// to the Rank payloads and then to Kickers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kicker
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, all from the flush suit
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kicker
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::Flush(_) => 4,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showdown_order() {
        assert!(Ranking::StraightFlush(Rank::Five) > Ranking::FourOAK(Rank::Ace));
        assert!(Ranking::FourOAK(Rank::Two) > Ranking::FullHouse(Rank::Ace, Rank::King));
        assert!(Ranking::FullHouse(Rank::Two, Rank::Three) > Ranking::Flush(Rank::Ace));
        assert!(Ranking::Flush(Rank::Seven) > Ranking::Straight(Rank::Ace));
        assert!(Ranking::Straight(Rank::Six) > Ranking::ThreeOAK(Rank::Ace));
        assert!(Ranking::ThreeOAK(Rank::Two) > Ranking::TwoPair(Rank::Ace, Rank::King));
        assert!(Ranking::TwoPair(Rank::Three, Rank::Two) > Ranking::OnePair(Rank::Ace));
        assert!(Ranking::OnePair(Rank::Two) > Ranking::HighCard(Rank::Ace));
    }

    #[test]
    fn ties_break_on_payload() {
        assert!(Ranking::TwoPair(Rank::Ace, Rank::Three) > Ranking::TwoPair(Rank::King, Rank::Queen));
        assert!(Ranking::FullHouse(Rank::Five, Rank::Two) > Ranking::FullHouse(Rank::Four, Rank::Ace));
    }
}
