use super::*;
use core::ops::Add;

/// Wrapping addition. The carry out of the low limb is detected by the sum
/// wrapping below one of its summands.
#[inline]
pub fn add<L: Limb>(lhs: DoubleWidth<L>, rhs: DoubleWidth<L>) -> DoubleWidth<L> {
    let low = lhs.low.wrapping_add(rhs.low);
    let carry = L::from_bit(low < lhs.low);
    let high = lhs.high.wrapping_add(rhs.high).wrapping_add(carry);
    DoubleWidth::from_limbs(low, high)
}

impl<L: Limb> Add for DoubleWidth<L> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        add(self, rhs)
    }
}
