use core::array;

use crate::{
    mask32x8,
    backend::*,
};

macro_rules! impl_bit_op {
    { $($trait:ident, $func:ident, $op:tt;)* } => {
        $(
            impl $trait<Scalar> for mask32x8 {
                #[inline]
                fn $func(self, other: Self) -> Self {
                    mask32x8(array::from_fn(|idx| self.0[idx] $op other.0[idx]))
                }
            }
        )*
    };
}
impl_bit_op!{
    SimdAndImpl, simd_and_impl, &;
    SimdOrImpl , simd_or_impl , |;
    SimdXorImpl, simd_xor_impl, ^;
}

impl SimdNotImpl<Scalar> for mask32x8 {
    #[inline]
    fn simd_not_impl(self) -> Self {
        <Self as SimdXorImpl<Scalar>>::simd_xor_impl(self, <Self as SimdSetImpl<Scalar>>::simd_true_impl())
    }
}
