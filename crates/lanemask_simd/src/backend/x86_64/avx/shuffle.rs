use core::arch::x86_64::*;

use crate::{
    mask32x8,
    backend::*,
};

/// Lanes taken from the second operand of `_mm256_blend_ps` for a 2 operand shuffle
const SHUFFLE_BLEND : i32 = 0b1100_1100;

#[inline(always)]
unsafe fn permute_control<const I0: usize, const I1: usize, const I2: usize, const I3: usize>() -> __m256i {
    let (i0, i1, i2, i3) = (I0 as i32, I1 as i32, I2 as i32, I3 as i32);
    _mm256_setr_epi32(i0, i1, i2, i3, i0, i1, i2, i3)
}

impl SimdShuffleImpl<Avx> for mask32x8 {
    fn simd_permute_impl<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(self) -> Self {
        unsafe { _mm256_permutevar_ps(self.into(), permute_control::<I0, I1, I2, I3>()).into() }
    }

    fn simd_shuffle_impl<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(self, other: Self) -> Self {
        unsafe {
            let control = permute_control::<I0, I1, I2, I3>();
            let a = _mm256_permutevar_ps(self.into(), control);
            let b = _mm256_permutevar_ps(other.into(), control);
            _mm256_blend_ps::<{ SHUFFLE_BLEND }>(a, b).into()
        }
    }

    fn simd_dup_even_impl(self) -> Self {
        unsafe { _mm256_moveldup_ps(self.into()).into() }
    }

    fn simd_dup_odd_impl(self) -> Self {
        unsafe { _mm256_movehdup_ps(self.into()).into() }
    }

    fn simd_dup_low_pair_impl(self) -> Self {
        unsafe { _mm256_castpd_ps(_mm256_movedup_pd(self.into())).into() }
    }

    fn simd_unpack_lo_impl(self, other: Self) -> Self {
        unsafe { _mm256_unpacklo_ps(self.into(), other.into()).into() }
    }

    fn simd_unpack_hi_impl(self, other: Self) -> Self {
        unsafe { _mm256_unpackhi_ps(self.into(), other.into()).into() }
    }

    fn simd_shuffle_halves_impl<const I0: usize, const I1: usize>(self, other: Self) -> Self {
        let halves = [
            <Self as SimdHalvesImpl<Avx>>::simd_extract_impl::<0>(self),
            <Self as SimdHalvesImpl<Avx>>::simd_extract_impl::<1>(self),
            <Self as SimdHalvesImpl<Avx>>::simd_extract_impl::<0>(other),
            <Self as SimdHalvesImpl<Avx>>::simd_extract_impl::<1>(other),
        ];
        <Self as SimdHalvesImpl<Avx>>::simd_combine_impl(halves[I0], halves[I1])
    }
}
