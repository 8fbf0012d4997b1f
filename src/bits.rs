use super::*;

/// One-based index of the most significant set bit, zero for zero.
#[inline]
pub fn bit_length<L: Limb>(x: DoubleWidth<L>) -> u32 {
    if x.high.is_zero() {
        x.low.bit_length()
    } else {
        L::BITS + x.high.bit_length()
    }
}

impl<L: Limb> DoubleWidth<L> {
    #[inline]
    pub fn bit_length(self) -> u32 {
        bit_length(self)
    }

    /// Whether bit `index` is set. Bits past the top are zero.
    #[inline]
    pub fn bit(self, index: u32) -> bool {
        let w = L::BITS;
        let (limb, index) = if index < w {
            (self.low, index)
        } else if index < 2 * w {
            (self.high, index - w)
        } else {
            return false;
        };
        (limb.wrapping_shr(index) & L::ONE) == L::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{self, Reference};
    use equator::assert;
    use rug::rand::RandState;

    #[test]
    fn test_bit_length_boundaries() {
        assert!(all(
            U64::ZERO.bit_length() == 0,                   //
            U64::ONE.bit_length() == 1,                    //
            U64::from_limbs(0, 1).bit_length() == 33,      //
            U64::from_limbs(u32::MAX, 0).bit_length() == 32, //
            U64::MAX.bit_length() == 64,                   //
            U128::from_limbs(0, 1).bit_length() == 65,     //
            U256::from_limbs(0, 1).bit_length() == 129,
        ));
    }

    #[test]
    fn test_bit() {
        let x = U64::from_limbs(0b101, 0x8000_0001);
        assert!(all(
            x.bit(0),   //
            !x.bit(1),  //
            x.bit(2),   //
            x.bit(32),  //
            !x.bit(33), //
            x.bit(63),  //
            !x.bit(64), //
            !x.bit(u32::MAX),
        ));
    }

    #[test]
    fn test_bit_length_reference() {
        fn check<L: Limb>()
        where
            DoubleWidth<L>: Reference,
        {
            let mut rng = RandState::new();
            for _ in 0..2000 {
                let x: DoubleWidth<L> = reference::random(&mut rng);
                assert!(x.bit_length() == x.to_integer().significant_bits());
            }
        }
        check::<u32>();
        check::<u64>();
        check::<u128>();
    }
}
