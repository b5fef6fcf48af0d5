use core::arch::x86_64::*;

use crate::{
    mask32x8,
    backend::*,
};

impl SimdMaskOpsImpl<Sse> for mask32x8 {
    fn simd_movemask_impl(self) -> u8 {
        unsafe {
            let a : [__m128; 2] = self.into();
            (_mm_movemask_ps(a[0]) | (_mm_movemask_ps(a[1]) << 4)) as u8
        }
    }

    fn simd_all_impl(self) -> bool {
        unsafe {
            let a : [__m128; 2] = self.into();
            _mm_movemask_ps(_mm_and_ps(a[0], a[1])) == 0xF
        }
    }

    fn simd_any_impl(self) -> bool {
        unsafe {
            let a : [__m128; 2] = self.into();
            _mm_movemask_ps(_mm_or_ps(a[0], a[1])) != 0
        }
    }
}
