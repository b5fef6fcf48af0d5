use core::arch::x86_64::*;

use crate::{mask32x4, mask32x8};

#[cfg(target_feature = "sse2")]
mod sse;

#[cfg(target_feature = "avx")]
mod avx;

from_transmute!{ unsafe mask32x4 =>  __m128 }
from_transmute!{ unsafe mask32x4 =>  __m128i }

from_transmute!{ unsafe mask32x8 =>  __m256 }
from_transmute!{ unsafe mask32x8 =>  __m256i }
from_transmute!{ unsafe mask32x8 =>  __m256d }
from_transmute!{ unsafe mask32x8 => [__m128; 2] }
