//! 8-lane SIMD boolean masks
//!
//! The main type is [`mask32x8`], an 8-wide mask of 32-bit lanes, built out of two 4-wide [`mask32x4`] halves.
//! A lane is either all bits set (`true`) or all bits clear (`false`), which lets the bitwise operators double as boolean logic.
//!
//! Currently no runtime dynamic dispatch is supported, so the instructions sets will be decided at compile time:
//! - AVX, when compiled with the `avx` target feature
//! - SSE, on any other x86_64 target
//! - Scalar, everywhere else
//!
//! Every operation is also available with an explicit backend (e.g. `simd_and::<Scalar>()`), which is mostly useful to compare backends against each other.
//!
#![no_std]
#![allow(non_camel_case_types)]

#[cfg(not(target_pointer_width = "64"))]
compile_error!("Only 64-bit architectures are supported");

mod lanes;
mod backend;
mod half;
mod mask;

pub use lanes::{TRUE_BITS, FALSE_BITS};
pub use backend::*;
pub use half::*;
pub use mask::*;

use static_assertions as sa;

cfg_if::cfg_if!{
    if #[cfg(all(target_arch = "x86_64", target_feature = "avx"))] {
        /// Backend used by all operations that don't take an explicit backend
        pub type DefBackend = Avx;
    } else if #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))] {
        /// Backend used by all operations that don't take an explicit backend
        pub type DefBackend = Sse;
    } else {
        /// Backend used by all operations that don't take an explicit backend
        pub type DefBackend = Scalar;
    }
}

pub const DEF_BACKEND_TYPE : BackendType = <DefBackend as Backend>::TYPE;

/// Check if an intrinsic can be used on the current machine
///
/// #Note
///
/// Currently, no dynamic detection has been implemented, so values returned depend on the machine the binary was compiled for
pub fn has_intrin(intrin: BackendType) -> bool {
    match intrin {
        BackendType::Scalar => true,
        BackendType::SSE => cfg!(all(target_arch = "x86_64", target_feature = "sse2")),
        BackendType::AVX => cfg!(all(target_arch = "x86_64", target_feature = "avx")),
    }
}

sa::assert_eq_size!(mask32x4, [i32; 4]);
sa::assert_eq_size!(mask32x8, [i32; 8]);
sa::assert_eq_size!(mask32x8, [mask32x4; 2]);
sa::const_assert_eq!(core::mem::align_of::<mask32x4>(), 16);
sa::const_assert_eq!(core::mem::align_of::<mask32x8>(), 32);
