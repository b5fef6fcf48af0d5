use crate::{
    mask32x8,
    backend::*,
    lanes::lane_to_bool,
};

impl SimdMaskOpsImpl<Scalar> for mask32x8 {
    fn simd_movemask_impl(self) -> u8 {
        self.0.iter()
            .enumerate()
            .fold(0, |acc, (idx, &bits)| acc | ((lane_to_bool(bits) as u8) << idx))
    }

    fn simd_all_impl(self) -> bool {
        self.0.iter().all(|&bits| lane_to_bool(bits))
    }

    fn simd_any_impl(self) -> bool {
        self.0.iter().any(|&bits| lane_to_bool(bits))
    }

    fn simd_popcnt_impl(self) -> u32 {
        self.0.iter().map(|&bits| lane_to_bool(bits) as u32).sum()
    }
}
