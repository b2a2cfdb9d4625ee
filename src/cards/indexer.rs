use super::street::Street;
use hand_indexer::HandIndexer;

/// Street-keyed wrapper over the suit-isomorphism indexer.
///
/// Canonical ids are dense per street: two (hole, board) deals share
/// an id iff they are the same configuration up to relabeling suits.
/// Every operation here addresses the wrapped indexer's final round,
/// i.e. the full configuration of the street, so callers never see
/// round arithmetic. Card bytes use the 4 * rank + suit keying shared
/// with Card.
pub struct Indexer {
    indexer: HandIndexer,
    last: u8,
}

impl From<Street> for Indexer {
    fn from(street: Street) -> Self {
        let indexer = match street {
            Street::Pref => HandIndexer::init(1, vec![2]),
            Street::Flop => HandIndexer::init(2, vec![2, 3]),
            Street::Turn => HandIndexer::init(2, vec![2, 4]),
            Street::Rive => HandIndexer::init(2, vec![2, 5]),
        };
        let last = match street {
            Street::Pref => 0,
            _ => 1,
        };
        Self { indexer, last }
    }
}

impl Indexer {
    /// number of canonical configurations
    pub fn count(&self) -> usize {
        self.indexer.size(self.last as _) as usize
    }
    /// materialize one representative deal for a canonical id
    pub fn unindex(&self, index: u64, cards: &mut [u8]) {
        self.indexer.get_hand(self.last as _, index as _, cards);
    }
    /// canonical id of a deal
    pub fn index(&self, cards: &[u8]) -> u64 {
        self.indexer.get_index(cards) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinalities_match_streets() {
        for street in Street::all() {
            let indexer = Indexer::from(*street);
            assert_eq!(indexer.count(), street.n_canonical(), "{}", street);
        }
    }

    #[test]
    fn preflop_is_a_bijection() {
        let indexer = Indexer::from(Street::Pref);
        let mut cards = [0u8; 2];
        for id in 0..indexer.count() as u64 {
            indexer.unindex(id, &mut cards);
            assert!(cards[0] < 52 && cards[1] < 52);
            assert_ne!(cards[0], cards[1]);
            assert_eq!(indexer.index(&cards), id);
        }
    }

    #[test]
    fn postflop_sampled_bijection() {
        for street in [Street::Flop, Street::Turn, Street::Rive] {
            let indexer = Indexer::from(street);
            let n = indexer.count() as u64;
            let mut cards = vec![0u8; street.n_dealt()];
            for id in (0..n).step_by((n / 997).max(1) as usize) {
                indexer.unindex(id, &mut cards);
                let mut seen = [false; 52];
                for &card in cards.iter() {
                    assert!((card as usize) < 52);
                    assert!(!seen[card as usize], "representative repeats a card");
                    seen[card as usize] = true;
                }
                assert_eq!(indexer.index(&cards), id, "{} id {}", street, id);
            }
        }
    }

    #[test]
    fn representatives_are_stable() {
        let indexer = Indexer::from(Street::Turn);
        let mut one = [0u8; 6];
        let mut two = [0u8; 6];
        for id in [0u64, 42, 1_000_000, 13_000_000] {
            indexer.unindex(id, &mut one);
            indexer.unindex(id, &mut two);
            assert_eq!(one, two);
        }
    }

    #[test]
    fn suit_relabeling_collides() {
        let indexer = Indexer::from(Street::Rive);
        // same deal under the c<->d swap
        let deal = [0u8, 5, 10, 22, 33, 44, 51];
        let swap = |c: u8| match c % 4 {
            0 => c + 1,
            1 => c - 1,
            _ => c,
        };
        let swapped = deal.map(swap);
        assert_eq!(indexer.index(&deal), indexer.index(&swapped));
    }
}
