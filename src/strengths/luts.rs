use super::showdown::ShowdownStrength;
use crate::cards::combos::CardCombinations;
use crate::cards::indexer::Indexer;
use crate::cards::street::Street;
use crate::linear::matrix::Matrix;
use crate::linear::Count;
use crate::progress::Progress;
use crate::EQUITY_BUCKETS;
use crate::OCHS_CLUSTERS;
use anyhow::ensure;
use anyhow::Result;
use rayon::prelude::*;

/// Equity-histogram LUT for a street that still has cards to come.
///
/// Row i counts, over every completion of configuration i to a full
/// 7-card river, which equity bucket the completed hand's showdown
/// strength lands in. Row sums are C(52 - dealt, rollout), constant
/// within a street; the count width C is chosen per street to fit
/// the worst-case bucket.
pub fn histogram_lut<C: Count>(street: Street, showdown: &[ShowdownStrength]) -> Matrix<C> {
    assert!(street != Street::Rive, "river rows have no cards to come");
    assert!(
        showdown.len() == Street::Rive.n_canonical(),
        "showdown table covers every canonical river"
    );
    let ref indexer = Indexer::from(street);
    let ref river = Indexer::from(Street::Rive);
    let n = indexer.count();
    let dealt = street.n_dealt();
    let ref progress = Progress::new(n);
    log::info!(
        "building {} histograms over {} rollout cards",
        street,
        street.n_rollout()
    );
    let mut lut = Matrix::<C>::new(n, EQUITY_BUCKETS);
    lut.data_mut()
        .par_chunks_mut(EQUITY_BUCKETS)
        .enumerate()
        .for_each(|(i, row)| {
            let mut rollout = [0u8; 7];
            let mut sims = CardCombinations::new(street.n_rollout());
            indexer.unindex(i as u64, &mut rollout[..dealt]);
            sims.reset(&rollout[..dealt]);
            while !sims.done() {
                rollout[dealt..].copy_from_slice(sims.current());
                let ehs = showdown[river.index(&rollout) as usize].ehs;
                let bucket = ((ehs * EQUITY_BUCKETS as f64) as usize).min(EQUITY_BUCKETS - 1);
                row[bucket] += C::ONE;
                sims.advance();
            }
            progress.tick();
        });
    lut
}

/// preflop rows roll out C(50,5) = 2,118,760 boards, so u16 would wrap
pub fn preflop_lut(showdown: &[ShowdownStrength]) -> Matrix<u32> {
    histogram_lut::<u32>(Street::Pref, showdown)
}

/// flop rows sum to C(47,2) = 1,081
pub fn flop_lut(showdown: &[ShowdownStrength]) -> Matrix<u16> {
    histogram_lut::<u16>(Street::Flop, showdown)
}

/// turn rows sum to C(46,1) = 46
pub fn turn_lut(showdown: &[ShowdownStrength]) -> Matrix<u16> {
    histogram_lut::<u16>(Street::Turn, showdown)
}

/// Per-cluster equities for every canonical river.
///
/// A zero cluster total cannot arise from a well-formed showdown
/// table; it means the table on disk is corrupt, so we stop rather
/// than emit NaN rows into the clustering input.
pub fn river_lut(showdown: &[ShowdownStrength]) -> Result<Matrix<f64>> {
    let n = showdown.len();
    let progress = Progress::new(n);
    log::info!("deriving river equities for {} rivers", n);
    let mut lut = Matrix::<f64>::new(n, OCHS_CLUSTERS);
    for (i, row) in showdown.iter().enumerate() {
        for k in 0..OCHS_CLUSTERS {
            ensure!(
                row.ochs_totals[k] != 0,
                "empty opponent cluster {} at river index {}",
                k,
                i
            );
            lut[(i, k)] = row.ochs_wins[k] / row.ochs_totals[k] as f64;
        }
        progress.tick();
    }
    Ok(lut)
}

/// Preflop OCHS LUT: cluster equities aggregated over every rollout.
///
/// Wins and totals accumulate separately across the C(50,5) boards
/// and divide once at the end, exactly like a single wider showdown.
pub fn ochs_preflop_lut(showdown: &[ShowdownStrength]) -> Matrix<f64> {
    assert!(
        showdown.len() == Street::Rive.n_canonical(),
        "showdown table covers every canonical river"
    );
    let ref indexer = Indexer::from(Street::Pref);
    let ref river = Indexer::from(Street::Rive);
    let n = indexer.count();
    let ref progress = Progress::new(n);
    log::info!("building preflop cluster equities");
    let mut lut = Matrix::<f64>::new(n, OCHS_CLUSTERS);
    lut.data_mut()
        .par_chunks_mut(OCHS_CLUSTERS)
        .enumerate()
        .for_each(|(i, row)| {
            let mut rollout = [0u8; 7];
            let mut sims = CardCombinations::new(5);
            let mut totals = [0u64; OCHS_CLUSTERS];
            indexer.unindex(i as u64, &mut rollout[..2]);
            sims.reset(&rollout[..2]);
            while !sims.done() {
                rollout[2..].copy_from_slice(sims.current());
                let strength = &showdown[river.index(&rollout) as usize];
                for k in 0..OCHS_CLUSTERS {
                    row[k] += strength.ochs_wins[k];
                    totals[k] += strength.ochs_totals[k] as u64;
                }
                sims.advance();
            }
            for k in 0..OCHS_CLUSTERS {
                row[k] /= totals[k] as f64;
            }
            progress.tick();
        });
    lut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(wins: [f64; OCHS_CLUSTERS], totals: [u32; OCHS_CLUSTERS]) -> ShowdownStrength {
        ShowdownStrength {
            ehs: 0.5,
            ochs_wins: wins,
            ochs_totals: totals,
        }
    }

    #[test]
    fn river_rows_divide_elementwise() {
        let showdown = vec![
            strength([1.0; OCHS_CLUSTERS], [2; OCHS_CLUSTERS]),
            strength(
                [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
                [10, 10, 10, 10, 10, 10, 10, 10],
            ),
        ];
        let lut = river_lut(&showdown).unwrap();
        assert_eq!(lut.rows(), 2);
        assert_eq!(lut.cols(), OCHS_CLUSTERS);
        assert!(lut.row(0).iter().all(|&v| v == 0.5));
        assert_eq!(lut.row(1)[7], 0.7);
    }

    #[test]
    fn river_rejects_empty_clusters() {
        let mut totals = [5u32; OCHS_CLUSTERS];
        totals[3] = 0;
        let showdown = vec![strength([1.0; OCHS_CLUSTERS], totals)];
        let error = river_lut(&showdown).unwrap_err().to_string();
        assert!(error.contains("cluster 3"));
        assert!(error.contains("index 0"));
    }
}
