use core::arch::x86_64::*;

use crate::{
    mask32x8,
    backend::*,
};

macro_rules! impl_bit_op {
    { $($trait:ident, $func:ident, $intrin:ident;)* } => {
        $(
            impl $trait<Avx> for mask32x8 {
                #[inline]
                fn $func(self, other: Self) -> Self {
                    unsafe { $intrin(self.into(), other.into()).into() }
                }
            }
        )*
    };
}
impl_bit_op!{
    SimdAndImpl, simd_and_impl, _mm256_and_ps;
    SimdOrImpl , simd_or_impl , _mm256_or_ps;
    SimdXorImpl, simd_xor_impl, _mm256_xor_ps;
}

impl SimdNotImpl<Avx> for mask32x8 {
    #[inline]
    fn simd_not_impl(self) -> Self {
        <Self as SimdXorImpl<Avx>>::simd_xor_impl(self, <Self as SimdSetImpl<Avx>>::simd_true_impl())
    }
}
