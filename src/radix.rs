use super::*;
use alloc::string::{String, ToString};
use dyn_stack::{PodBuffer, PodStack, StackReq};

#[inline]
pub fn to_decimal_scratch<L: Limb>() -> StackReq {
    StackReq::new::<u8>(consts::max_decimal_digits(DoubleWidth::<L>::BITS))
}

/// Writes the digits of `x` into scratch memory, least significant first, then
/// reverses them in place.
fn decimal_digits<L: Limb>(x: DoubleWidth<L>, stack: &mut PodStack) -> &str {
    let (digits, _) = stack.make_raw::<u8>(consts::max_decimal_digits(DoubleWidth::<L>::BITS));

    let ten = DoubleWidth::<L>::from_native(L::from_u8(10));
    let mut x = x;
    let mut len = 0;
    while x.is_non_zero() {
        let (quo, rem) = div::divmod_nonzero(x, ten);
        digits[len] = b'0' + rem.low.truncate_u8();
        len += 1;
        x = quo;
    }
    if len == 0 {
        digits[0] = b'0';
        len = 1;
    }

    let digits = &mut digits[..len];
    digits.reverse();
    // only ascii digits were written
    unsafe { core::str::from_utf8_unchecked(digits) }
}

pub fn to_decimal<L: Limb>(f: &mut dyn fmt::Write, x: DoubleWidth<L>, stack: &mut PodStack) -> fmt::Result {
    f.write_str(decimal_digits(x, stack))
}

pub fn to_decimal_string<L: Limb>(x: DoubleWidth<L>) -> String {
    x.to_string()
}

/// Both limbs in fixed-width hexadecimal, high limb first.
pub fn to_debug_hex<L: Limb>(x: DoubleWidth<L>) -> String {
    alloc::format!("{x:?}")
}

impl<L: Limb> DoubleWidth<L> {
    #[inline]
    pub fn to_decimal_string(self) -> String {
        to_decimal_string(self)
    }

    #[inline]
    pub fn to_debug_hex(self) -> String {
        to_debug_hex(self)
    }
}

impl<L: Limb> fmt::Display for DoubleWidth<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = PodBuffer::new(to_decimal_scratch::<L>());
        f.pad_integral(true, "", decimal_digits(*self, PodStack::new(&mut buf)))
    }
}

impl<L: Limb> fmt::Debug for DoubleWidth<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = L::BITS as usize / 4;
        write!(f, "{:0width$x} {:0width$x}", self.high, self.low)
    }
}
