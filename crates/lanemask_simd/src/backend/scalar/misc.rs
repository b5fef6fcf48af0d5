use core::array;

use crate::{
    mask32x4, mask32x8,
    backend::*,
    lanes::FALSE_BITS,
};

impl SimdSetImpl<Scalar> for mask32x8 {
    fn simd_zero_impl() -> Self {
        mask32x8([FALSE_BITS; 8])
    }

    #[allow(clippy::eq_op)]
    fn simd_true_impl() -> Self {
        let zero = [FALSE_BITS; 8];
        mask32x8(zero.map(|val| -i32::from(val == val)))
    }
}

impl SimdSelectImpl<Scalar> for mask32x8 {
    fn simd_select_impl(self, when_true: Self, when_false: Self) -> Self {
        mask32x8(array::from_fn(|idx| {
            // Broadcast the sign bit over the whole lane
            let sign = self.0[idx] >> 31;
            (when_true.0[idx] & sign) | (when_false.0[idx] & !sign)
        }))
    }
}

impl SimdHalvesImpl<Scalar> for mask32x8 {
    fn simd_combine_impl(lo: mask32x4, hi: mask32x4) -> Self {
        mask32x8(array::from_fn(|idx| if idx < 4 { lo.0[idx] } else { hi.0[idx - 4] }))
    }

    fn simd_extract_impl<const IDX: usize>(self) -> mask32x4 {
        mask32x4(array::from_fn(|idx| self.0[IDX * 4 + idx]))
    }

    fn simd_insert_impl<const IDX: usize>(mut self, half: mask32x4) -> Self {
        self.0[IDX * 4..IDX * 4 + 4].copy_from_slice(&half.0);
        self
    }
}
