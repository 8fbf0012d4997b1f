use super::*;
use core::ops::Sub;

/// Wrapping subtraction. The low limb borrows exactly when its difference
/// wraps above the minuend.
#[inline]
pub fn sub<L: Limb>(lhs: DoubleWidth<L>, rhs: DoubleWidth<L>) -> DoubleWidth<L> {
    let low = lhs.low.wrapping_sub(rhs.low);
    let borrow = L::from_bit(low > lhs.low);
    let high = lhs.high.wrapping_sub(rhs.high).wrapping_sub(borrow);
    DoubleWidth::from_limbs(low, high)
}

impl<L: Limb> Sub for DoubleWidth<L> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        sub(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{self, Reference};
    use equator::assert;
    use rug::rand::RandState;

    #[test]
    fn test_sub_borrow() {
        let x = U64::from_limbs(0, 1);
        let y = U64::from_limbs(1, 0);
        assert!(x - y == U64::from_limbs(0xFFFF_FFFF, 0));

        let x = U64::from_limbs(5, 9);
        let y = U64::from_limbs(7, 3);
        assert!(x - y == U64::from_limbs(0xFFFF_FFFE, 5));
    }

    #[test]
    fn test_sub_wraps() {
        assert!(all(
            U64::ZERO - U64::ONE == U64::MAX, //
            U128::ONE - U128::from_native(2u8) == U128::MAX,
        ));
    }

    #[test]
    fn test_sub_inverts_add() {
        let mut rng = RandState::new();
        for _ in 0..10_000 {
            let x: U128 = reference::random(&mut rng);
            let y: U128 = reference::random(&mut rng);
            assert!(all((x + y) - y == x, (x - y) + y == x));
        }
    }

    #[test]
    fn test_sub_native() {
        let mut rng = RandState::new();
        for _ in 0..10_000 {
            let x: U64 = reference::random(&mut rng);
            let y: U64 = reference::random(&mut rng);
            assert!(u64::from(x - y) == u64::from(x).wrapping_sub(u64::from(y)));

            let x: U128 = reference::random(&mut rng);
            let y: U128 = reference::random(&mut rng);
            assert!(u128::from(x - y) == u128::from(x).wrapping_sub(u128::from(y)));
        }
    }

    #[test]
    fn test_sub_u256() {
        let mut rng = RandState::new();
        for _ in 0..10_000 {
            let x: U256 = reference::random(&mut rng);
            let y: U256 = reference::random(&mut rng);
            assert!(x - y == U256::from_integer(&(x.to_integer() - y.to_integer())));
        }
    }
}
