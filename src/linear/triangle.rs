/// Packed storage for a symmetric distance matrix with zero diagonal.
///
/// Only the strict upper half is kept, K(K-1)/2 slots, so the
/// (i,j) <-> (j,i) identity holds by construction. A row sweep at
/// fixed i is a plain O(K) loop over get().
#[derive(Debug, Clone)]
pub struct Triangle {
    k: usize,
    data: Vec<f64>,
}

impl Triangle {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            data: vec![0f64; k * (k - 1) / 2],
        }
    }
    pub fn k(&self) -> usize {
        self.k
    }
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i == j {
            0f64
        } else {
            self.data[self.slot(i, j)]
        }
    }
    pub fn set(&mut self, i: usize, j: usize, distance: f64) {
        assert!(i != j, "diagonal is identically zero");
        let slot = self.slot(i, j);
        self.data[slot] = distance;
    }
    fn slot(&self, i: usize, j: usize) -> usize {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        debug_assert!(hi < self.k);
        lo * (2 * self.k - lo - 1) / 2 + (hi - lo - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_is_zero() {
        let t = Triangle::new(8);
        for i in 0..8 {
            assert_eq!(t.get(i, i), 0f64);
        }
    }

    #[test]
    fn symmetric_by_construction() {
        let mut t = Triangle::new(5);
        t.set(1, 3, 4.25);
        t.set(4, 0, 1.5);
        assert_eq!(t.get(1, 3), 4.25);
        assert_eq!(t.get(3, 1), 4.25);
        assert_eq!(t.get(0, 4), 1.5);
        assert_eq!(t.get(4, 0), 1.5);
    }

    #[test]
    fn slots_are_disjoint() {
        let k = 9;
        let mut t = Triangle::new(k);
        let mut value = 1f64;
        for i in 0..k {
            for j in (i + 1)..k {
                t.set(i, j, value);
                value += 1f64;
            }
        }
        let mut expected = 1f64;
        for i in 0..k {
            for j in (i + 1)..k {
                assert_eq!(t.get(i, j), expected);
                expected += 1f64;
            }
        }
    }

    #[test]
    #[should_panic]
    fn diagonal_writes_rejected() {
        let mut t = Triangle::new(4);
        t.set(2, 2, 1f64);
    }
}
