use crate::mask32x4;

/// Instruction set used to implement mask operations
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BackendType {
    Scalar,

    // x86-64
    SSE,
    AVX,
}

mod sealed {
    pub trait Sealed {}
}

/// Marker type for an instruction set
///
/// Used as the type parameter of the `Simd*Impl` traits and the `simd_*::<B>()` methods
pub trait Backend : sealed::Sealed + Copy {
    const TYPE : BackendType;
}

macro_rules! backend_marker {
    { $($(#[$docs:meta])* $name:ident => $ty:ident;)* } => {
        $(
            $(#[$docs])*
            #[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
            pub struct $name;

            impl sealed::Sealed for $name {}

            impl Backend for $name {
                const TYPE : BackendType = BackendType::$ty;
            }
        )*
    };
}
backend_marker!{
    /// Portable implementation, always available
    Scalar => Scalar;
    /// Two 128-bit halves, using at most SSE2
    Sse => SSE;
    /// One 256-bit register, requires the `avx` target feature
    Avx => AVX;
}

/// Encode a 4-lane index pattern into an x86 shuffle immediate, i.e. `_MM_SHUFFLE(i3, i2, i1, i0)`
///
/// Lane `n` of each 128-bit half of the result comes from lane `i<n>` of the same half of the source.
pub const fn shuffle_imm(i0: usize, i1: usize, i2: usize, i3: usize) -> i32 {
    ((i3 << 6) | (i2 << 4) | (i1 << 2) | i0) as i32
}

pub trait SimdSetImpl<B: Backend> {
    /// Set all lanes to `false`
    fn simd_zero_impl() -> Self;

    /// Set all lanes to `true`
    ///
    /// Produced by comparing zero with itself, so every lane is guaranteed to have all bits set
    fn simd_true_impl() -> Self;
}

pub trait SimdNotImpl<B: Backend> {
    /// Per lane not, i.e. xor with all lanes set
    fn simd_not_impl(self) -> Self;
}

pub trait SimdAndImpl<B: Backend> {
    /// Per lane and
    fn simd_and_impl(self, other: Self) -> Self;
}

pub trait SimdXorImpl<B: Backend> {
    /// Per lane xor
    fn simd_xor_impl(self, other: Self) -> Self;
}

pub trait SimdOrImpl<B: Backend> {
    /// Per lane or
    fn simd_or_impl(self, other: Self) -> Self;
}

pub trait SimdSelectImpl<B: Backend> {
    /// Per lane, pick `when_true` if the sign bit of the lane in `self` is set, otherwise pick `when_false`
    fn simd_select_impl(self, when_true: Self, when_false: Self) -> Self;
}

/// Trait for mask-specific operations
pub trait SimdMaskOpsImpl<B: Backend> : Sized {
    /// Get an integer with bit `i` set if lane `i` is set
    fn simd_movemask_impl(self) -> u8;

    /// Check if all lanes are set
    fn simd_all_impl(self) -> bool;

    /// Check if any lane is set
    fn simd_any_impl(self) -> bool;

    /// Check if no lane is set
    fn simd_none_impl(self) -> bool {
        !Self::simd_any_impl(self)
    }

    /// Number of set lanes
    fn simd_popcnt_impl(self) -> u32 {
        Self::simd_movemask_impl(self).count_ones()
    }
}

pub trait SimdHalvesImpl<B: Backend> {
    /// Combine 2 halves, `lo` ends up in lanes 0..4, `hi` in lanes 4..8
    fn simd_combine_impl(lo: mask32x4, hi: mask32x4) -> Self;

    /// Get the half at `IDX`
    fn simd_extract_impl<const IDX: usize>(self) -> mask32x4;

    /// Replace the half at `IDX`, leaving the other half untouched
    fn simd_insert_impl<const IDX: usize>(self, half: mask32x4) -> Self;
}

// NOTE: All fine-grained shuffles apply the same 4-lane pattern to each 128-bit half
pub trait SimdShuffleImpl<B: Backend> {
    /// Permute the lanes within each half: `<a[I0], a[I1], a[I2], a[I3]>`
    fn simd_permute_impl<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(self) -> Self;

    /// Shuffle lanes of 2 masks within each half: `<a[I0], a[I1], b[I2], b[I3]>`
    fn simd_shuffle_impl<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(self, other: Self) -> Self;

    /// Same as permuting with `<0, 0, 2, 2>`
    fn simd_dup_even_impl(self) -> Self;

    /// Same as permuting with `<1, 1, 3, 3>`
    fn simd_dup_odd_impl(self) -> Self;

    /// Same as permuting with `<0, 1, 0, 1>`
    fn simd_dup_low_pair_impl(self) -> Self;

    /// Interleave the low lanes of each half: `<a0, b0, a1, b1>`
    fn simd_unpack_lo_impl(self, other: Self) -> Self;

    /// Interleave the high lanes of each half: `<a2, b2, a3, b3>`
    fn simd_unpack_hi_impl(self, other: Self) -> Self;

    /// Pick 2 halves out of `[a.lo, a.hi, b.lo, b.hi]`
    fn simd_shuffle_halves_impl<const I0: usize, const I1: usize>(self, other: Self) -> Self;
}

macro_rules! from_transmute {
    { unsafe $a:ty => $b:ty } => {
        from_transmute!{ @impl $a => $b }
        from_transmute!{ @impl $b => $a }
    };
    { @impl $from:ty => $to:ty } => {
        impl core::convert::From<$from> for $to {
            #[inline]
            fn from(value: $from) -> $to {
                unsafe { core::mem::transmute(value) }
            }
        }
    }
}

mod scalar;

#[cfg(target_arch = "x86_64")]
mod x86_64;
