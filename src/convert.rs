use super::*;

impl<L: Limb> From<L> for DoubleWidth<L> {
    /// Zero-extends a single limb.
    #[inline]
    fn from(value: L) -> Self {
        Self::from_native(value)
    }
}

impl<L: Limb> DoubleWidth<L> {
    /// The limbs in memory order, `[low, high]`.
    #[inline]
    pub fn as_limbs(&self) -> &[L; 2] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn from_limb_array(limbs: [L; 2]) -> Self {
        bytemuck::cast(limbs)
    }
}

/// Values of a width that has a native counterpart convert to and from it
/// without loss.
macro_rules! impl_native {
    ($($limb: ty => $wide: ty),* $(,)?) => {$(
        impl From<$wide> for DoubleWidth<$limb> {
            #[inline]
            fn from(value: $wide) -> Self {
                Self::from_limbs(value as $limb, (value >> <$limb>::BITS) as $limb)
            }
        }

        impl From<DoubleWidth<$limb>> for $wide {
            #[inline]
            fn from(value: DoubleWidth<$limb>) -> Self {
                ((value.high as $wide) << <$limb>::BITS) | value.low as $wide
            }
        }
    )*};
}

impl_native!(
    u8 => u16,
    u16 => u32,
    u32 => u64,
    u64 => u128,
);
