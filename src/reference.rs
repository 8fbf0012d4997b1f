//! Conversions between `DoubleWidth` and `rug::Integer`, used as the trusted
//! reference in the differential tests.

use super::*;
use rug::{rand::RandState, Integer};

pub trait Reference: Copy {
    const TOTAL_BITS: u32;

    fn to_integer(self) -> Integer;

    /// Reduces `value` modulo `2^TOTAL_BITS`, negative values included.
    fn from_integer(value: &Integer) -> Self;
}

macro_rules! impl_reference {
    ($($limb: ty),* $(,)?) => {$(
        impl Reference for DoubleWidth<$limb> {
            const TOTAL_BITS: u32 = 2 * <$limb>::BITS;

            fn to_integer(self) -> Integer {
                (Integer::from(self.high()) << <$limb>::BITS) | Integer::from(self.low())
            }

            fn from_integer(value: &Integer) -> Self {
                let value = value.clone().keep_bits(Self::TOTAL_BITS);
                let low = value.clone().keep_bits(<$limb>::BITS);
                let high = value >> <$limb>::BITS;
                Self::from_limbs(low.to_u128_wrapping() as $limb, high.to_u128_wrapping() as $limb)
            }
        }
    )*};
}

impl_reference!(u32, u64, u128);

/// A random value whose bit length is itself uniformly random, so that small
/// and large operands both show up.
pub fn random<T: Reference>(rng: &mut RandState<'_>) -> T {
    let bits = rng.below(T::TOTAL_BITS + 1);
    T::from_integer(&Integer::from(Integer::random_bits(bits, rng)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    #[test]
    fn test_reference_round_trip() {
        let x = U128::from_limbs(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);
        assert!(all(
            U128::from_integer(&x.to_integer()) == x, //
            x.to_integer() == Integer::from(u128::from(x)),
        ));

        let minus_one = Integer::from(-1);
        assert!(U256::from_integer(&minus_one) == U256::MAX);
    }
}
