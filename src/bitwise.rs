use super::*;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

impl<L: Limb> Not for DoubleWidth<L> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::from_limbs(!self.low, !self.high)
    }
}

impl<L: Limb> BitAnd for DoubleWidth<L> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_limbs(self.low & rhs.low, self.high & rhs.high)
    }
}

impl<L: Limb> BitOr for DoubleWidth<L> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_limbs(self.low | rhs.low, self.high | rhs.high)
    }
}

impl<L: Limb> BitXor for DoubleWidth<L> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_limbs(self.low ^ rhs.low, self.high ^ rhs.high)
    }
}

/// Shifts left by `amount` bits. Amounts of at least `BITS` produce zero.
#[inline]
pub fn shl<L: Limb>(x: DoubleWidth<L>, amount: u32) -> DoubleWidth<L> {
    let w = L::BITS;
    if amount >= 2 * w {
        DoubleWidth::ZERO
    } else if amount >= w {
        // the low limb lands entirely in the high limb
        DoubleWidth::from_limbs(L::ZERO, x.low.wrapping_shl(amount - w))
    } else if amount == 0 {
        x
    } else {
        DoubleWidth::from_limbs(
            x.low.wrapping_shl(amount),
            x.high.wrapping_shl(amount) | x.low.wrapping_shr(w - amount),
        )
    }
}

/// Shifts right by `amount` bits. Amounts of at least `BITS` produce zero.
#[inline]
pub fn shr<L: Limb>(x: DoubleWidth<L>, amount: u32) -> DoubleWidth<L> {
    let w = L::BITS;
    if amount >= 2 * w {
        DoubleWidth::ZERO
    } else if amount >= w {
        DoubleWidth::from_limbs(x.high.wrapping_shr(amount - w), L::ZERO)
    } else if amount == 0 {
        x
    } else {
        DoubleWidth::from_limbs(
            x.low.wrapping_shr(amount) | x.high.wrapping_shl(w - amount),
            x.high.wrapping_shr(amount),
        )
    }
}

impl<L: Limb> Shl<u32> for DoubleWidth<L> {
    type Output = Self;

    #[inline]
    fn shl(self, amount: u32) -> Self {
        shl(self, amount)
    }
}

impl<L: Limb> Shr<u32> for DoubleWidth<L> {
    type Output = Self;

    #[inline]
    fn shr(self, amount: u32) -> Self {
        shr(self, amount)
    }
}
