use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// A tracker for long-running sweeps over canonical indices.
///
/// tick() is callable from worker threads; reporting rides on an
/// atomic counter so nothing here blocks the hot loop.
pub struct Progress {
    total: usize,
    check: usize,
    ticks: AtomicUsize,
    begin: Instant,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            check: (total / 100).max(1),
            ticks: AtomicUsize::new(0),
            begin: Instant::now(),
        }
    }
    pub fn tick(&self) {
        let ticks = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        if ticks % self.check == 0 {
            let elapsed = self.begin.elapsed();
            log::info!(
                "progress: {:8.0?} {:>12} {:6.2}%   mean {:8.0}/s",
                elapsed,
                ticks,
                ticks as f64 / self.total as f64 * 100f64,
                ticks as f64 / elapsed.as_secs_f64(),
            );
        }
    }
}
