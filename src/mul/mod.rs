use super::*;
use core::ops::Mul;

mod schoolbook;

/// Wrapping multiplication.
#[inline]
pub fn mul<L: Limb>(lhs: DoubleWidth<L>, rhs: DoubleWidth<L>) -> DoubleWidth<L> {
    schoolbook::mul_double_width(lhs, rhs)
}

impl<L: Limb> Mul for DoubleWidth<L> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        mul(self, rhs)
    }
}
