use core::arch::x86_64::*;

use crate::{
    mask32x8,
    backend::*,
};

#[inline(always)]
fn per_half(mask: mask32x8, f: impl Fn(__m128) -> __m128) -> mask32x8 {
    let a : [__m128; 2] = mask.into();
    [f(a[0]), f(a[1])].into()
}

impl SimdShuffleImpl<Sse> for mask32x8 {
    // NOTE: The shuffle immediate can't be built from const generic parameters on stable, so arbitrary patterns go through the scalar path
    fn simd_permute_impl<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(self) -> Self {
        <Self as SimdShuffleImpl<Scalar>>::simd_permute_impl::<I0, I1, I2, I3>(self)
    }

    fn simd_shuffle_impl<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(self, other: Self) -> Self {
        <Self as SimdShuffleImpl<Scalar>>::simd_shuffle_impl::<I0, I1, I2, I3>(self, other)
    }

    fn simd_dup_even_impl(self) -> Self {
        per_half(self, |x| unsafe { _mm_shuffle_ps::<{ shuffle_imm(0, 0, 2, 2) }>(x, x) })
    }

    fn simd_dup_odd_impl(self) -> Self {
        per_half(self, |x| unsafe { _mm_shuffle_ps::<{ shuffle_imm(1, 1, 3, 3) }>(x, x) })
    }

    fn simd_dup_low_pair_impl(self) -> Self {
        per_half(self, |x| unsafe { _mm_movelh_ps(x, x) })
    }

    fn simd_unpack_lo_impl(self, other: Self) -> Self {
        unsafe {
            let a : [__m128; 2] = self.into();
            let b : [__m128; 2] = other.into();
            [_mm_unpacklo_ps(a[0], b[0]), _mm_unpacklo_ps(a[1], b[1])].into()
        }
    }

    fn simd_unpack_hi_impl(self, other: Self) -> Self {
        unsafe {
            let a : [__m128; 2] = self.into();
            let b : [__m128; 2] = other.into();
            [_mm_unpackhi_ps(a[0], b[0]), _mm_unpackhi_ps(a[1], b[1])].into()
        }
    }

    fn simd_shuffle_halves_impl<const I0: usize, const I1: usize>(self, other: Self) -> Self {
        let a : [__m128; 2] = self.into();
        let b : [__m128; 2] = other.into();
        let halves = [a[0], a[1], b[0], b[1]];
        [halves[I0], halves[I1]].into()
    }
}
