use crate::OCHS_CLUSTERS;

/// Preflop classes of an opposing hole pair, bucketed into eight
/// strength tiers (0 weakest, 7 strongest).
///
/// The grid is the conventional preflop chart: rows and columns are
/// ranks (deuce first), pairs on the diagonal, suited combos above
/// it, offsuit below. The assignment itself is precomputed data; it
/// only has to stay fixed for the lifetime of the persisted tables.
#[rustfmt::skip]
const GRID: [[u8; 13]; 13] = [
    // 2  3  4  5  6  7  8  9  T  J  Q  K  A
    [  4, 1, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 4 ], // 2
    [  0, 4, 1, 2, 1, 1, 2, 2, 2, 2, 3, 3, 4 ], // 3
    [  0, 0, 4, 2, 2, 1, 2, 2, 2, 2, 3, 3, 4 ], // 4
    [  0, 0, 1, 5, 2, 2, 2, 2, 2, 2, 3, 3, 4 ], // 5
    [  0, 0, 0, 1, 5, 2, 3, 2, 2, 2, 3, 3, 4 ], // 6
    [  0, 0, 0, 0, 1, 5, 3, 3, 3, 3, 3, 3, 4 ], // 7
    [  1, 1, 1, 1, 1, 1, 6, 3, 3, 3, 3, 3, 4 ], // 8
    [  1, 1, 1, 1, 1, 1, 2, 6, 4, 4, 4, 4, 5 ], // 9
    [  1, 1, 1, 1, 1, 1, 2, 2, 6, 5, 5, 5, 5 ], // T
    [  1, 1, 1, 1, 1, 1, 1, 2, 3, 7, 5, 5, 6 ], // J
    [  2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 7, 5, 6 ], // Q
    [  2, 2, 2, 2, 2, 2, 2, 2, 3, 4, 4, 7, 6 ], // K
    [  3, 3, 3, 3, 3, 3, 3, 3, 4, 5, 5, 6, 7 ], // A
];

/// cluster of a distinct card pair. symmetric in its arguments.
pub fn preflop_cluster(a: u8, b: u8) -> u8 {
    debug_assert!(a != b && a < 52 && b < 52);
    let (ra, sa) = ((a / 4) as usize, a % 4);
    let (rb, sb) = ((b / 4) as usize, b % 4);
    let hi = ra.max(rb);
    let lo = ra.min(rb);
    if sa == sb {
        GRID[lo][hi]
    } else {
        GRID[hi][lo]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_in_arguments() {
        for a in 0u8..52 {
            for b in 0u8..52 {
                if a != b {
                    assert_eq!(preflop_cluster(a, b), preflop_cluster(b, a));
                }
            }
        }
    }

    #[test]
    fn clusters_are_in_range() {
        for a in 0u8..52 {
            for b in (a + 1)..52 {
                assert!((preflop_cluster(a, b) as usize) < OCHS_CLUSTERS);
            }
        }
    }

    #[test]
    fn every_cluster_is_inhabited() {
        let mut seen = [false; OCHS_CLUSTERS];
        for a in 0u8..52 {
            for b in (a + 1)..52 {
                seen[preflop_cluster(a, b) as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn suitedness_distinguishes() {
        // A2 suited vs offsuit
        let ace_clubs = 48;
        let two_clubs = 0;
        let two_hearts = 2;
        assert_eq!(preflop_cluster(ace_clubs, two_clubs), 4);
        assert_eq!(preflop_cluster(ace_clubs, two_hearts), 3);
    }

    #[test]
    fn pocket_aces_top_the_grid() {
        let ace_clubs = 48;
        let ace_spades = 51;
        assert_eq!(preflop_cluster(ace_clubs, ace_spades), 7);
    }
}
