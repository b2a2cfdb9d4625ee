use super::distance::Distance;
use crate::linear::matrix::Matrix;
use crate::linear::triangle::Triangle;
use crate::linear::Scalar;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::marker::PhantomData;

/// centroid initialization procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Init {
    PlusPlus,
    RandomSum,
    RandomProb,
}

/// rows per accumulation block. blocks are summed in block order, so
/// results are independent of worker count.
const BLOCK: usize = 1 << 16;

/// Elkan-accelerated k-means over the rows of a feature matrix.
///
/// The engine keeps, per point, an upper bound on the distance to its
/// assigned centroid and a lower bound to every other centroid; the
/// triangle inequality against the packed inter-centroid distances
/// prunes most exact metric evaluations. Centroids always live in
/// f64 regardless of the element type of the data.
///
/// Seeds are u64 end to end and every source of randomness is an
/// explicit argument, so equal (data, seed, initializer) reproduces
/// centroids, assignments, and loss bit for bit at any worker count.
pub struct KMeans<T, D> {
    k: usize,
    centroids: Option<Matrix<f64>>,
    assignments: Option<Vec<u32>>,
    loss: f64,
    losses: Vec<f64>,
    ghost: PhantomData<(T, D)>,
}

impl<T: Scalar, D: Distance> KMeans<T, D> {
    pub fn new(k: usize) -> Self {
        assert!(k > 0, "cluster count must be positive");
        Self {
            k,
            centroids: None,
            assignments: None,
            loss: f64::INFINITY,
            losses: Vec::new(),
            ghost: PhantomData,
        }
    }

    /// start from explicit centroids instead of an initializer
    pub fn seeded(k: usize, centroids: Matrix<f64>) -> Self {
        assert!(k == centroids.rows(), "one centroid row per cluster");
        let mut this = Self::new(k);
        this.centroids = Some(centroids);
        this
    }

    pub fn k(&self) -> usize {
        self.k
    }
    pub fn centroids(&self) -> Option<&Matrix<f64>> {
        self.centroids.as_ref()
    }
    pub fn assignments(&self) -> Option<&[u32]> {
        self.assignments.as_deref()
    }
    pub fn loss(&self) -> f64 {
        self.loss
    }
    /// per-iteration loss trail of the last elkan() run
    pub fn losses(&self) -> &[f64] {
        &self.losses
    }

    /// Run several independent clusterings and keep the best.
    ///
    /// Sub-seeds come off a dedicated stream, two per trial (one for
    /// the initializer, one for empty-cluster repair), so trials are
    /// reproducible individually as well as in sequence.
    pub fn multiple_restarts(&mut self, data: &Matrix<T>, restarts: usize, init: Init, seed: u64) {
        assert!(restarts > 0, "at least one restart");
        let mut stream = SmallRng::seed_from_u64(seed);
        let mut best: Option<(Matrix<f64>, Vec<u32>, f64)> = None;
        let mut winner = 0;
        for trial in 0..restarts {
            log::info!("starting trial {}", trial);
            self.centroids = None;
            self.assignments = None;
            match init {
                Init::PlusPlus => self.init_plusplus(data, stream.random::<u64>()),
                Init::RandomSum => self.init_random_sum(data, stream.random::<u64>()),
                Init::RandomProb => self.init_random_prob(data, stream.random::<u64>()),
            }
            self.elkan(data, stream.random::<u64>());
            if best.as_ref().map_or(true, |(_, _, loss)| self.loss < *loss) {
                winner = trial;
                best = Some((
                    self.centroids.take().expect("trained"),
                    self.assignments.take().expect("trained"),
                    self.loss,
                ));
            }
        }
        let (centroids, assignments, loss) = best.expect("at least one trial ran");
        log::info!("best trial {} loss {:.17}", winner, loss);
        self.centroids = Some(centroids);
        self.assignments = Some(assignments);
        self.loss = loss;
    }

    /// k-means++ D^2 seeding: the first centroid is uniform, each
    /// subsequent one is a data row drawn with probability
    /// proportional to its squared distance from the nearest pick.
    pub fn init_plusplus(&mut self, data: &Matrix<T>, seed: u64) {
        let n = data.rows();
        assert!(self.k <= n, "more clusters than data points");
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut dists = vec![f64::INFINITY; n];
        let mut total = n as f64;
        let mut centroids = Matrix::<f64>::new(self.k, data.cols());
        for c in 0..self.k {
            let draw = rng.random::<f64>();
            let x = Self::select(data, &mut dists, &mut total, draw);
            for (dst, src) in centroids.row_mut(c).iter_mut().zip(data.row(x)) {
                *dst = src.real();
            }
            log::debug!("assigned cluster {}: row {}", c, x);
        }
        self.centroids = Some(centroids);
    }

    /// centroids whose component sums mimic the data's row sum,
    /// scattered over random buckets
    pub fn init_random_sum(&mut self, data: &Matrix<T>, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let row_sum: f64 = data.row(0).iter().map(|x| x.real()).sum();
        let mut centroids = Matrix::<f64>::new(self.k, data.cols());
        for c in 0..self.k {
            let mut remaining = row_sum;
            while remaining > 0.0 {
                let bucket = rng.random_range(0..data.cols());
                let amount = rng.random_range(0.0..row_sum + 1.0).min(remaining);
                centroids.row_mut(c)[bucket] += amount;
                remaining -= amount;
            }
        }
        self.centroids = Some(centroids);
    }

    /// centroids of iid uniform [0,1) components
    pub fn init_random_prob(&mut self, data: &Matrix<T>, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut centroids = Matrix::<f64>::new(self.k, data.cols());
        for c in 0..self.k {
            for slot in centroids.row_mut(c).iter_mut() {
                *slot = rng.random::<f64>();
            }
        }
        self.centroids = Some(centroids);
    }

    /// Lloyd iteration with Elkan's triangle-inequality pruning,
    /// until centroids stop moving exactly. Falls back to k-means++
    /// seeding when no centroids are present; the same seed also
    /// drives empty-cluster repair.
    pub fn elkan(&mut self, data: &Matrix<T>, seed: u64) {
        let n = data.rows();
        let d = data.cols();
        let k = self.k;
        assert!(k <= n, "more clusters than data points");
        if self.centroids.is_none() {
            self.init_plusplus(data, seed);
        }
        let mut centroids = self.centroids.take().expect("centroids initialized");
        assert!(centroids.cols() == d, "centroid dimensionality");
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut lower = Matrix::<f64>::new(n, k);
        let mut upper = vec![0f64; n];
        let mut loose = vec![false; n];
        let mut assignments = vec![0u32; n];

        let mut pairs = Triangle::new(k);
        let mut half_min = vec![0f64; k];
        Self::pairwise(&centroids, &mut pairs);

        // first assignment pass: exact distance to centroid 0, then
        // the lemma 1 filter against each other candidate
        {
            let ref centroids = centroids;
            let ref pairs = pairs;
            lower
                .data_mut()
                .par_chunks_mut(k)
                .zip(upper.par_iter_mut())
                .zip(assignments.par_iter_mut())
                .enumerate()
                .for_each(|(x, ((lo, up), a))| {
                    *up = D::measure(data.row(x), centroids.row(0));
                    lo[0] = *up;
                    for c in 1..k {
                        if pairs.get(*a as usize, c) / 2.0 < *up {
                            let dist = D::measure(data.row(x), centroids.row(c));
                            lo[c] = dist;
                            if dist < *up {
                                *a = c as u32;
                                *up = dist;
                            }
                        }
                    }
                });
        }

        self.losses.clear();
        let mut iteration = 0usize;
        loop {
            // step 1: inter-centroid distances and half-min margins
            Self::pairwise(&centroids, &mut pairs);
            for c in 0..k {
                half_min[c] = (0..k)
                    .filter(|&other| other != c)
                    .map(|other| pairs.get(c, other) / 2.0)
                    .fold(f64::INFINITY, f64::min);
            }

            // steps 2-3: reassign points, tightening bounds lazily
            {
                let ref centroids = centroids;
                let ref pairs = pairs;
                let ref half_min = half_min;
                lower
                    .data_mut()
                    .par_chunks_mut(k)
                    .zip(upper.par_iter_mut())
                    .zip(loose.par_iter_mut())
                    .zip(assignments.par_iter_mut())
                    .enumerate()
                    .for_each(|(x, (((lo, up), stale), a))| {
                        if *up <= half_min[*a as usize] {
                            return;
                        }
                        for c in 0..k {
                            if c == *a as usize {
                                continue;
                            }
                            if *up <= lo[c] {
                                continue;
                            }
                            if *up <= pairs.get(*a as usize, c) / 2.0 {
                                continue;
                            }
                            if *stale {
                                *up = D::measure(data.row(x), centroids.row(*a as usize));
                                lo[*a as usize] = *up;
                                *stale = false;
                            }
                            if *up > lo[c] || *up > pairs.get(*a as usize, c) / 2.0 {
                                let dist = D::measure(data.row(x), centroids.row(c));
                                lo[c] = dist;
                                if dist < *up {
                                    *a = c as u32;
                                    *up = dist;
                                }
                            }
                        }
                    });
            }

            // step 4: accumulate per-cluster sums and counts
            let (mut sums, mut counts) = Self::accumulate(data, &assignments, k);

            // empty-cluster repair: one k-means++ selection per hole,
            // weighted by squared distance to the current centroid
            let holes = (0..k).filter(|&c| counts[c] == 0).collect::<Vec<_>>();
            if !holes.is_empty() {
                log::info!("empty clusters: {}", holes.len());
                let mut dists = upper.iter().map(|u| u * u).collect::<Vec<_>>();
                let mut total = dists.iter().sum::<f64>();
                for hole in holes {
                    let donor = loop {
                        let draw = rng.random::<f64>();
                        let x = Self::select(data, &mut dists, &mut total, draw);
                        // a donor from a singleton would just move the hole
                        if counts[assignments[x] as usize] > 1 {
                            break x;
                        }
                        dists[x] = 0.0;
                        total = dists.iter().sum::<f64>();
                    };
                    let was = assignments[donor] as usize;
                    for (slot, v) in sums.row_mut(was).iter_mut().zip(data.row(donor)) {
                        *slot -= v.real();
                    }
                    for (slot, v) in sums.row_mut(hole).iter_mut().zip(data.row(donor)) {
                        *slot += v.real();
                    }
                    counts[was] -= 1;
                    counts[hole] += 1;
                    assignments[donor] = hole as u32;
                    lower.row_mut(donor)[hole] = 0.0;
                }
            }

            // step 5: divide sums into means
            for c in 0..k {
                let count = counts[c] as f64;
                debug_assert!(counts[c] > 0, "repair left an empty cluster");
                for slot in sums.row_mut(c).iter_mut() {
                    *slot /= count;
                }
            }

            // step 6: widen bounds by how far each centroid moved
            let shifts = (0..k)
                .map(|c| D::measure(centroids.row(c), sums.row(c)))
                .collect::<Vec<_>>();
            {
                let ref shifts = shifts;
                lower.data_mut().par_chunks_mut(k).for_each(|lo| {
                    for c in 0..k {
                        lo[c] = (lo[c] - shifts[c]).max(0.0);
                    }
                });
                upper
                    .par_iter_mut()
                    .zip(loose.par_iter_mut())
                    .zip(assignments.par_iter())
                    .for_each(|((up, stale), a)| {
                        *up += shifts[*a as usize];
                        *stale = true;
                    });
            }

            // step 7: exact-equality convergence
            let converged = centroids == sums;
            centroids = sums;
            let loss = Self::loss_of(data, &centroids, &assignments);
            self.losses.push(loss);
            iteration += 1;
            log::info!(
                "iteration {} loss {:.17} converged {}",
                iteration,
                loss,
                converged
            );
            if converged {
                self.loss = loss;
                break;
            }
        }

        self.centroids = Some(centroids);
        self.assignments = Some(assignments);
    }

    /// refresh the packed inter-centroid distance matrix
    fn pairwise(centroids: &Matrix<f64>, pairs: &mut Triangle) {
        let k = centroids.rows();
        for c1 in 0..k {
            for c2 in (c1 + 1)..k {
                pairs.set(c1, c2, D::measure(centroids.row(c1), centroids.row(c2)));
            }
        }
    }

    /// One D^2 selection: walk the cumulative distribution against a
    /// uniform draw, then refresh every point's nearest-pick squared
    /// distance. INFINITY marks the uniform first draw.
    fn select(data: &Matrix<T>, dists: &mut [f64], total: &mut f64, draw: f64) -> usize {
        let n = data.rows();
        let mut winner = 0;
        let mut cumulative = 0f64;
        for x in 0..n {
            // INFINITY marks the first draw; zero total means every
            // point sits on a pick already. both degrade to uniform.
            cumulative += if dists[x] == f64::INFINITY || *total == 0.0 {
                1.0 / n as f64
            } else {
                dists[x] / *total
            };
            if draw < cumulative {
                winner = x;
                break;
            }
        }
        dists.par_iter_mut().enumerate().for_each(|(x, slot)| {
            let dist = D::measure(data.row(winner), data.row(x));
            let squared = dist * dist;
            if squared < *slot {
                *slot = squared;
            }
        });
        *total = dists.iter().sum();
        winner
    }

    /// per-cluster sums and counts, blocked so the fold order is
    /// fixed no matter how many workers run
    fn accumulate(data: &Matrix<T>, assignments: &[u32], k: usize) -> (Matrix<f64>, Vec<usize>) {
        let n = data.rows();
        let d = data.cols();
        let blocks = n.div_ceil(BLOCK);
        (0..blocks)
            .into_par_iter()
            .map(|block| {
                let mut sums = Matrix::<f64>::new(k, d);
                let mut counts = vec![0usize; k];
                for x in block * BLOCK..((block + 1) * BLOCK).min(n) {
                    let c = assignments[x] as usize;
                    for (slot, v) in sums.row_mut(c).iter_mut().zip(data.row(x)) {
                        *slot += v.real();
                    }
                    counts[c] += 1;
                }
                (sums, counts)
            })
            .collect::<Vec<_>>()
            .into_iter()
            .reduce(|(mut sums, mut counts), (s, c)| {
                for (dst, src) in sums.data_mut().iter_mut().zip(s.data()) {
                    *dst += src;
                }
                for (dst, src) in counts.iter_mut().zip(c) {
                    *dst += src;
                }
                (sums, counts)
            })
            .expect("at least one block")
    }

    /// mean squared distance of points to their assigned centroids
    fn loss_of(data: &Matrix<T>, centroids: &Matrix<f64>, assignments: &[u32]) -> f64 {
        let n = data.rows();
        let blocks = n.div_ceil(BLOCK);
        (0..blocks)
            .into_par_iter()
            .map(|block| {
                (block * BLOCK..((block + 1) * BLOCK).min(n))
                    .map(|x| {
                        let c = assignments[x] as usize;
                        let dist = D::measure(data.row(x), centroids.row(c));
                        dist * dist
                    })
                    .sum::<f64>()
            })
            .collect::<Vec<_>>()
            .into_iter()
            .sum::<f64>()
            / n as f64
    }
}
