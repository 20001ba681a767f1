use bytemuck::Pod;

/// A fixed-width unsigned integer usable as a storage unit or element value.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. All bit-level arithmetic in
/// the packing layer runs through `u64`, the widest supported width, so the
/// trait only needs lossless widening and truncating narrowing.
pub trait BitUnit: Pod + Copy + PartialEq + Eq + core::fmt::Debug {
    /// Width of this unit in bits.
    const BITS: u32;
    const ZERO: Self;
    const MAX: Self;

    /// Widens to `u64` without loss.
    fn to_u64(self) -> u64;

    /// Narrows from `u64`, keeping the low `Self::BITS` bits.
    fn from_u64(value: u64) -> Self;
}

macro_rules! impl_bit_unit {
    ($($t:ty),*) => {
        $(
            impl BitUnit for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn from_u64(value: u64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_bit_unit!(u8, u16, u32, u64);
