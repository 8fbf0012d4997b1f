use super::*;
use equator::debug_assert;

/// Product of two double-width values modulo `2^(2 * L::BITS)`.
///
/// The low limbs are split into halves so that every partial product fits in a
/// single limb:
///
/// ```text
///                 [x01 x00]
///               X [y01 y00]
/// ________________________
///                 [x00y00]
///            [x01y00]
///            [x00y01]
///        [x01y01]
///        [x.high * y.low]
///        [x.low * y.high]
/// ```
///
/// `x.high * y.high` only contributes above the top limb and is dropped.
#[inline]
pub fn mul_double_width<L: Limb>(x: DoubleWidth<L>, y: DoubleWidth<L>) -> DoubleWidth<L> {
    debug_assert!(L::BITS % 2 == 0);
    let half = L::BITS / 2;

    let x00 = x.low.lo_half();
    let x01 = x.low.hi_half();
    let y00 = y.low.lo_half();
    let y01 = y.low.hi_half();

    let x01y00 = x01.wrapping_mul(y00);
    let x00y01 = x00.wrapping_mul(y01);
    let mid = x01y00.wrapping_add(x00y01);
    // the sum of the cross terms can carry out of the limb, that carry sits
    // `half` bits into the high limb
    let mid_carry = L::from_bit(mid < x00y01);

    let x00y00 = x00.wrapping_mul(y00);
    let lower = x00y00.wrapping_add(mid.wrapping_shl(half));
    let lower_carry = L::from_bit(lower < x00y00);

    let higher = x
        .high
        .wrapping_mul(y.low)
        .wrapping_add(x.low.wrapping_mul(y.high))
        .wrapping_add(x01.wrapping_mul(y01))
        .wrapping_add(mid.wrapping_shr(half))
        .wrapping_add(mid_carry.wrapping_shl(half))
        .wrapping_add(lower_carry);

    DoubleWidth::from_limbs(lower, higher)
}
