use core::arch::x86_64::*;

use crate::{
    mask32x8,
    backend::*,
};

impl SimdMaskOpsImpl<Avx> for mask32x8 {
    fn simd_movemask_impl(self) -> u8 {
        unsafe { _mm256_movemask_ps(self.into()) as u8 }
    }

    fn simd_all_impl(self) -> bool {
        unsafe { _mm256_movemask_ps(self.into()) == 0xFF }
    }

    fn simd_any_impl(self) -> bool {
        unsafe {
            let a : __m256 = self.into();
            _mm256_testz_ps(a, a) == 0
        }
    }

    fn simd_none_impl(self) -> bool {
        unsafe {
            let a : __m256 = self.into();
            _mm256_testz_ps(a, a) != 0
        }
    }
}
