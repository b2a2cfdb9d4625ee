use super::rank::Rank;

/// A hand's kicker cards, as a bitmask over ranks.
///
/// Masks of equal popcount compare exactly like the kicker lists they
/// stand for: the highest differing rank decides.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

impl From<u16> for Kickers {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> u16 {
        k.0
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in (0u8..13).rev().filter(|r| self.0 & (1 << r) != 0) {
            write!(f, "{}", Rank::from(rank))?;
        }
        Ok(())
    }
}
