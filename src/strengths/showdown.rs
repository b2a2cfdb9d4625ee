use super::ochs::preflop_cluster;
use crate::cards::combos::CardCombinations;
use crate::cards::hand::Hand;
use crate::cards::indexer::Indexer;
use crate::cards::street::Street;
use crate::cards::strength::Strength;
use crate::progress::Progress;
use crate::OCHS_CLUSTERS;
use crate::RIVER_VILLAINS;
use crate::save::disk::Bytes;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::io::Read;
use std::io::Write;

/// Showdown aggregates for one canonical river configuration.
///
/// ehs is the win + half-tie fraction against a uniformly drawn
/// opposing pair from the remaining 45 cards. The ochs arrays carry
/// the same mass partitioned by the opponent's preflop cluster, with
/// wins left undivided so downstream builders can re-aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShowdownStrength {
    pub ehs: f64,
    pub ochs_wins: [f64; OCHS_CLUSTERS],
    pub ochs_totals: [u32; OCHS_CLUSTERS],
}

impl Bytes for ShowdownStrength {
    fn put<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        self.ehs.put(w)?;
        for wins in &self.ochs_wins {
            wins.put(w)?;
        }
        for totals in &self.ochs_totals {
            totals.put(w)?;
        }
        Ok(())
    }
    fn get<R: Read>(r: &mut R) -> std::io::Result<Self> {
        let mut this = Self::default();
        this.ehs = f64::get(r)?;
        for wins in this.ochs_wins.iter_mut() {
            *wins = f64::get(r)?;
        }
        for totals in this.ochs_totals.iter_mut() {
            *totals = u32::get(r)?;
        }
        Ok(this)
    }
}

/// rows this many at a time per worker
const CHUNK: usize = 1 << 14;

/// Compute the full showdown table, one row per canonical river.
///
/// Rows are independent, so workers own disjoint chunks and nothing
/// synchronizes beyond the progress counter.
pub fn showdown_table() -> Vec<ShowdownStrength> {
    let ref indexer = Indexer::from(Street::Rive);
    let n = indexer.count();
    let ref progress = Progress::new(n);
    log::info!("building showdown table over {} rivers", n);
    let mut table = vec![ShowdownStrength::default(); n];
    table
        .par_chunks_mut(CHUNK)
        .enumerate()
        .for_each(|(chunk, rows)| {
            let mut rollout = [0u8; 7];
            let mut villains = CardCombinations::new(2);
            for (offset, row) in rows.iter_mut().enumerate() {
                let index = (chunk * CHUNK + offset) as u64;
                indexer.unindex(index, &mut rollout);
                *row = showdown_row(&rollout, &mut villains);
                progress.tick();
            }
        });
    table
}

/// One row: hero evaluated once, all 990 opposing pairs enumerated.
pub fn showdown_row(rollout: &[u8; 7], villains: &mut CardCombinations) -> ShowdownStrength {
    let hero = Strength::from(Hand::from(&rollout[..]));
    let board = Hand::from(&rollout[2..]);
    let mut row = ShowdownStrength::default();
    villains.reset(rollout);
    while !villains.done() {
        let (o1, o2) = (villains.get(0), villains.get(1));
        let villain = Strength::from(board | Hand::from(&[o1, o2][..]));
        let value = match hero.cmp(&villain) {
            Ordering::Greater => 1.0,
            Ordering::Equal => 0.5,
            Ordering::Less => 0.0,
        };
        let cluster = preflop_cluster(o1, o2) as usize;
        row.ehs += value;
        row.ochs_wins[cluster] += value;
        row.ochs_totals[cluster] += 1;
        villains.advance();
    }
    row.ehs /= RIVER_VILLAINS as f64;
    row
}
