//! Boolean masks for 8-wide SIMD code
//!
//! Re-exports [`lanemask_simd`], see [`mask32x8`] for the main mask type.
#![no_std]

pub use lanemask_simd::*;
