use core::arch::x86_64::*;

use crate::{
    mask32x4, mask32x8,
    backend::*,
};

impl SimdSetImpl<Sse> for mask32x8 {
    fn simd_zero_impl() -> Self {
        unsafe {
            let zero = _mm_setzero_ps();
            [zero, zero].into()
        }
    }

    fn simd_true_impl() -> Self {
        unsafe {
            let zero = _mm_setzero_ps();
            let ones = _mm_cmpeq_ps(zero, zero);
            [ones, ones].into()
        }
    }
}

/// Select on a single half, `blendv` is SSE4.1, so the sign bit is broadcast with an arithmetic shift instead
#[inline(always)]
unsafe fn blend_half(mask: __m128, when_true: __m128, when_false: __m128) -> __m128 {
    let sign = _mm_castsi128_ps(_mm_srai_epi32::<31>(_mm_castps_si128(mask)));
    _mm_or_ps(_mm_and_ps(sign, when_true), _mm_andnot_ps(sign, when_false))
}

impl SimdSelectImpl<Sse> for mask32x8 {
    fn simd_select_impl(self, when_true: Self, when_false: Self) -> Self {
        unsafe {
            let mask : [__m128; 2] = self.into();
            let t : [__m128; 2] = when_true.into();
            let f : [__m128; 2] = when_false.into();
            [blend_half(mask[0], t[0], f[0]),
             blend_half(mask[1], t[1], f[1])].into()
        }
    }
}

impl SimdHalvesImpl<Sse> for mask32x8 {
    fn simd_combine_impl(lo: mask32x4, hi: mask32x4) -> Self {
        let halves : [__m128; 2] = [lo.into(), hi.into()];
        halves.into()
    }

    fn simd_extract_impl<const IDX: usize>(self) -> mask32x4 {
        let halves : [__m128; 2] = self.into();
        halves[IDX].into()
    }

    fn simd_insert_impl<const IDX: usize>(self, half: mask32x4) -> Self {
        let mut halves : [__m128; 2] = self.into();
        halves[IDX] = half.into();
        halves.into()
    }
}
