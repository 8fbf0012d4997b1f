use super::*;
use core::ops::{Div, Rem};

mod binary;

/// Quotient and remainder of `dividend / divisor`.
///
/// Fails with [`Error::DivisionByZero`] when `divisor` is zero.
#[inline]
pub fn divmod<L: Limb>(dividend: DoubleWidth<L>, divisor: DoubleWidth<L>) -> Result<(DoubleWidth<L>, DoubleWidth<L>), Error> {
    if divisor.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(binary::divrem_binary(dividend, divisor))
}

/// Division by a divisor known to be non-zero.
#[inline]
pub(crate) fn divmod_nonzero<L: Limb>(dividend: DoubleWidth<L>, divisor: DoubleWidth<L>) -> (DoubleWidth<L>, DoubleWidth<L>) {
    binary::divrem_binary(dividend, divisor)
}

impl<L: Limb> DoubleWidth<L> {
    #[inline]
    pub fn divmod(self, divisor: Self) -> Result<(Self, Self), Error> {
        divmod(self, divisor)
    }
}

impl<L: Limb> Div for DoubleWidth<L> {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn div(self, rhs: Self) -> Self {
        match divmod(self, rhs) {
            Ok((quo, _)) => quo,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<L: Limb> Rem for DoubleWidth<L> {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn rem(self, rhs: Self) -> Self {
        match divmod(self, rhs) {
            Ok((_, rem)) => rem,
            Err(err) => panic!("{err}"),
        }
    }
}
