use super::*;
use equator::debug_assert;

/// Restoring binary long division, one dividend bit per step.
///
/// `divisor` must be non-zero. The running remainder stays below `divisor`
/// between steps, but doubling it can push it past the top bit when `divisor`
/// exceeds `2^(BITS - 1)`. The bit shifted out is kept in `overflow`, and a
/// remainder that overflowed is always at least `divisor`, so the wrapping
/// subtraction brings it back in range.
pub fn divrem_binary<L: Limb>(dividend: DoubleWidth<L>, divisor: DoubleWidth<L>) -> (DoubleWidth<L>, DoubleWidth<L>) {
    debug_assert!(divisor.is_non_zero());

    let top = DoubleWidth::<L>::BITS - 1;
    let mut quo = DoubleWidth::<L>::ZERO;
    let mut rem = DoubleWidth::<L>::ZERO;

    let mut i = dividend.bit_length();
    while i != 0 {
        i -= 1;

        let overflow = rem.bit(top);
        quo = quo << 1;
        rem = rem << 1;
        if dividend.bit(i) {
            rem = rem | DoubleWidth::ONE;
        }

        if overflow || rem >= divisor {
            rem = rem - divisor;
            quo = quo | DoubleWidth::ONE;
        }
    }

    debug_assert!(rem < divisor);
    (quo, rem)
}
