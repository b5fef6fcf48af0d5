use core::arch::x86_64::*;

use crate::{
    mask32x4, mask32x8,
    backend::*,
};

impl SimdSetImpl<Avx> for mask32x8 {
    fn simd_zero_impl() -> Self {
        unsafe { _mm256_setzero_ps().into() }
    }

    fn simd_true_impl() -> Self {
        unsafe {
            let zero = _mm256_setzero_ps();
            _mm256_cmp_ps::<_CMP_EQ_OQ>(zero, zero).into()
        }
    }
}

impl SimdSelectImpl<Avx> for mask32x8 {
    fn simd_select_impl(self, when_true: Self, when_false: Self) -> Self {
        unsafe { _mm256_blendv_ps(when_false.into(), when_true.into(), self.into()).into() }
    }
}

impl SimdHalvesImpl<Avx> for mask32x8 {
    fn simd_combine_impl(lo: mask32x4, hi: mask32x4) -> Self {
        unsafe { _mm256_insertf128_ps::<1>(_mm256_castps128_ps256(lo.into()), hi.into()).into() }
    }

    fn simd_extract_impl<const IDX: usize>(self) -> mask32x4 {
        unsafe {
            let a : __m256 = self.into();
            match IDX {
                0 => _mm256_castps256_ps128(a).into(),
                _ => _mm256_extractf128_ps::<1>(a).into(),
            }
        }
    }

    fn simd_insert_impl<const IDX: usize>(self, half: mask32x4) -> Self {
        unsafe {
            let a : __m256 = self.into();
            match IDX {
                0 => _mm256_insertf128_ps::<0>(a, half.into()).into(),
                _ => _mm256_insertf128_ps::<1>(a, half.into()).into(),
            }
        }
    }
}
