use crate::linear::Scalar;

/// Distance strategy over equal-length feature vectors.
///
/// The metric is a type parameter on the k-means engine, so the
/// dispatch is static: EMD for equity histograms, Euclidean for the
/// river's cluster-equity vectors. Mixed element types are fine; the
/// accumulator is always f64.
pub trait Distance: Send + Sync {
    fn measure<P: Scalar, Q: Scalar>(p: &[P], q: &[Q]) -> f64;
}

/// One-dimensional earth mover's distance between histograms of
/// equal total mass: the prefix-difference recurrence
///   d_0 = 0,  d_i = d_{i-1} + p_{i-1} - q_{i-1},  emd = sum |d_i|.
pub struct Emd;

impl Distance for Emd {
    fn measure<P: Scalar, Q: Scalar>(p: &[P], q: &[Q]) -> f64 {
        debug_assert!(p.len() == q.len(), "histograms must share bucket count");
        let mut prev = 0f64;
        let mut sum = 0f64;
        for (p, q) in p.iter().zip(q.iter()) {
            let next = p.real() + prev - q.real();
            sum += next.abs();
            prev = next;
        }
        sum
    }
}

pub struct Euclidean;

impl Distance for Euclidean {
    fn measure<P: Scalar, Q: Scalar>(p: &[P], q: &[Q]) -> f64 {
        debug_assert!(p.len() == q.len(), "vectors must share dimensionality");
        p.iter()
            .zip(q.iter())
            .map(|(p, q)| q.real() - p.real())
            .map(|d| d * d)
            .sum::<f64>()
            .sqrt()
    }
}
