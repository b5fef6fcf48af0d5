use core::arch::x86_64::*;

use crate::{
    mask32x8,
    backend::*,
};

macro_rules! impl_bit_op {
    { $($trait:ident, $func:ident, $intrin:ident;)* } => {
        $(
            impl $trait<Sse> for mask32x8 {
                #[inline]
                fn $func(self, other: Self) -> Self {
                    unsafe {
                        let a : [__m128; 2] = self.into();
                        let b : [__m128; 2] = other.into();
                        [$intrin(a[0], b[0]), $intrin(a[1], b[1])].into()
                    }
                }
            }
        )*
    };
}
impl_bit_op!{
    SimdAndImpl, simd_and_impl, _mm_and_ps;
    SimdOrImpl , simd_or_impl , _mm_or_ps;
    SimdXorImpl, simd_xor_impl, _mm_xor_ps;
}

impl SimdNotImpl<Sse> for mask32x8 {
    #[inline]
    fn simd_not_impl(self) -> Self {
        <Self as SimdXorImpl<Sse>>::simd_xor_impl(self, <Self as SimdSetImpl<Sse>>::simd_true_impl())
    }
}
