use super::*;
use core::cmp::Ordering;

impl<L: Limb> Ord for DoubleWidth<L> {
    /// The high limb dominates, the low limb breaks ties.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.high.cmp(&other.high) {
            Ordering::Equal => self.low.cmp(&other.low),
            ord => ord,
        }
    }
}

impl<L: Limb> PartialOrd for DoubleWidth<L> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
