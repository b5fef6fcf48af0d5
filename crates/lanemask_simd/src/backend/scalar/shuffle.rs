use core::array;

use crate::{
    mask32x8,
    backend::*,
};

/// Index of the first lane of the half containing `idx`
#[inline(always)]
const fn half_base(idx: usize) -> usize {
    idx & !3
}

impl SimdShuffleImpl<Scalar> for mask32x8 {
    fn simd_permute_impl<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(self) -> Self {
        let pattern = [I0, I1, I2, I3];
        mask32x8(array::from_fn(|idx| self.0[half_base(idx) + pattern[idx & 3]]))
    }

    fn simd_shuffle_impl<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(self, other: Self) -> Self {
        let pattern = [I0, I1, I2, I3];
        mask32x8(array::from_fn(|idx| {
            let src = if idx & 3 < 2 { &self.0 } else { &other.0 };
            src[half_base(idx) + pattern[idx & 3]]
        }))
    }

    fn simd_dup_even_impl(self) -> Self {
        mask32x8(array::from_fn(|idx| self.0[idx & !1]))
    }

    fn simd_dup_odd_impl(self) -> Self {
        mask32x8(array::from_fn(|idx| self.0[idx | 1]))
    }

    fn simd_dup_low_pair_impl(self) -> Self {
        mask32x8(array::from_fn(|idx| self.0[half_base(idx) + (idx & 1)]))
    }

    fn simd_unpack_lo_impl(self, other: Self) -> Self {
        mask32x8(array::from_fn(|idx| {
            let src = if idx & 1 == 0 { &self.0 } else { &other.0 };
            src[half_base(idx) + ((idx & 3) >> 1)]
        }))
    }

    fn simd_unpack_hi_impl(self, other: Self) -> Self {
        mask32x8(array::from_fn(|idx| {
            let src = if idx & 1 == 0 { &self.0 } else { &other.0 };
            src[half_base(idx) + 2 + ((idx & 3) >> 1)]
        }))
    }

    fn simd_shuffle_halves_impl<const I0: usize, const I1: usize>(self, other: Self) -> Self {
        let halves = [
            <Self as SimdHalvesImpl<Scalar>>::simd_extract_impl::<0>(self),
            <Self as SimdHalvesImpl<Scalar>>::simd_extract_impl::<1>(self),
            <Self as SimdHalvesImpl<Scalar>>::simd_extract_impl::<0>(other),
            <Self as SimdHalvesImpl<Scalar>>::simd_extract_impl::<1>(other),
        ];
        <Self as SimdHalvesImpl<Scalar>>::simd_combine_impl(halves[I0], halves[I1])
    }
}
