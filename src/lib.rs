//! Double-width unsigned integers assembled from two native limbs.
//!
//! [`DoubleWidth<L>`] stores a `low` and a `high` limb and implements the full
//! unsigned operator set on top of limb-level primitives only, without assuming
//! that a native integer of twice the width exists. [`U64`] and [`U128`] are the
//! main instantiations; the others are available for any limb implementing
//! [`Limb`].
//!
//! Addition, subtraction, multiplication and shifts wrap modulo `2^BITS`, like
//! native unsigned integers. Division by zero is reported through [`Error`].

use bytemuck::{Pod, Zeroable};
use core::fmt;

extern crate alloc;

mod limb;
pub use limb::Limb;

mod bitwise;
mod cmp;

mod add;
mod sub;

mod bits;

mod mul;

mod div;

mod radix;

mod convert;

#[cfg(test)]
mod reference;

pub type U16 = DoubleWidth<u8>;
pub type U32 = DoubleWidth<u16>;
pub type U64 = DoubleWidth<u32>;
pub type U128 = DoubleWidth<u64>;
pub type U256 = DoubleWidth<u128>;

pub mod math {
    pub use crate::bitwise::{shl, shr};

    pub use crate::add::add;
    pub use crate::sub::sub;

    pub use crate::bits::bit_length;

    pub use crate::mul::mul;

    pub use crate::div::divmod;

    pub use crate::radix::{to_debug_hex, to_decimal, to_decimal_scratch, to_decimal_string};
}

pub mod consts {
    /// Upper bound on the number of decimal digits of a value `bits` wide.
    #[inline]
    pub const fn max_decimal_digits(bits: u32) -> usize {
        // log10(2) ~ 0.30103
        (bits as usize * 30103) / 100000 + 1
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => f.write_str("attempt to divide by zero"),
        }
    }
}

impl std::error::Error for Error {}

/// Unsigned integer of `2 * L::BITS` bits with value `high * 2^L::BITS + low`.
///
/// Every pair of limbs is a valid value. Operations take their operands by value
/// and return new values.
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct DoubleWidth<L: Limb> {
    low: L,
    high: L,
}

unsafe impl<L: Limb> Zeroable for DoubleWidth<L> {}
unsafe impl<L: Limb> Pod for DoubleWidth<L> {}

impl<L: Limb> DoubleWidth<L> {
    pub const BITS: u32 = 2 * L::BITS;

    pub const ZERO: Self = Self::from_limbs(L::ZERO, L::ZERO);
    pub const ONE: Self = Self::from_limbs(L::ONE, L::ZERO);
    pub const MAX: Self = Self::from_limbs(L::MAX, L::MAX);

    #[inline]
    #[must_use]
    pub const fn from_limbs(low: L, high: L) -> Self {
        Self { low, high }
    }

    /// Zero-extends a native unsigned value no wider than one limb.
    #[inline]
    #[must_use]
    pub fn from_native(value: impl Into<L>) -> Self {
        Self::from_limbs(value.into(), L::ZERO)
    }

    #[inline]
    pub fn low(self) -> L {
        self.low
    }

    #[inline]
    pub fn high(self) -> L {
        self.high
    }

    #[inline]
    pub fn into_limbs(self) -> (L, L) {
        (self.low, self.high)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.low.is_zero() && self.high.is_zero()
    }

    #[inline]
    pub fn is_non_zero(self) -> bool {
        !self.is_zero()
    }
}
