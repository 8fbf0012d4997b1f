use core::{
    fmt,
    hash::Hash,
    ops::{BitAnd, BitOr, BitXor, Not},
};

use bytemuck::Pod;

/// A native unsigned integer used as one half of a [`DoubleWidth`](crate::DoubleWidth).
///
/// Every primitive the double-width arithmetic needs is expressed here, so the
/// algorithms in this crate are written once and bound to a concrete width
/// through the type parameter.
pub trait Limb:
    Pod
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::LowerHex
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
{
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
    /// Selects the low `BITS / 2` bits.
    const HALF_MASK: Self;

    fn from_bit(bit: bool) -> Self;
    fn from_u8(value: u8) -> Self;
    fn truncate_u8(self) -> u8;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// `amount` must be less than `BITS`.
    fn wrapping_shl(self, amount: u32) -> Self;
    /// `amount` must be less than `BITS`.
    fn wrapping_shr(self, amount: u32) -> Self;

    fn leading_zeros(self) -> u32;

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    #[inline]
    fn lo_half(self) -> Self {
        self & Self::HALF_MASK
    }

    #[inline]
    fn hi_half(self) -> Self {
        self.wrapping_shr(Self::BITS / 2)
    }

    /// One-based position of the highest set bit, zero for zero.
    #[inline]
    fn bit_length(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }
}

macro_rules! impl_limb {
    ($($ty: ty),* $(,)?) => {$(
        impl Limb for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$ty>::MAX;
            const HALF_MASK: Self = <$ty>::MAX >> (<$ty>::BITS / 2);

            #[inline]
            fn from_bit(bit: bool) -> Self {
                bit as $ty
            }

            #[inline]
            fn from_u8(value: u8) -> Self {
                value as $ty
            }

            #[inline]
            fn truncate_u8(self) -> u8 {
                self as u8
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$ty>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn wrapping_shl(self, amount: u32) -> Self {
                <$ty>::wrapping_shl(self, amount)
            }

            #[inline]
            fn wrapping_shr(self, amount: u32) -> Self {
                <$ty>::wrapping_shr(self, amount)
            }

            #[inline]
            fn leading_zeros(self) -> u32 {
                <$ty>::leading_zeros(self)
            }
        }
    )*};
}

impl_limb!(u8, u16, u32, u64, u128);
