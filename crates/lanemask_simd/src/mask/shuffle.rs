use super::mask32x8;
use crate::{
    backend::*,
    half::mask32x4,
    DefBackend
};

macro_rules! assert_lane_pattern {
    ($($idx:ident),+) => {
        const { assert!($($idx < 4)&&+, "shuffle lane index out of range") }
    };
}

/// Shuffling within each half
///
/// All of these apply the same 4-lane pattern to both halves, lane `n` of a half can only ever come from the same half of a source.
impl mask32x8 {
    /// Permute the lanes within each half: `<a[I0], a[I1], a[I2], a[I3]>`
    ///
    /// The patterns `<0, 0, 2, 2>`, `<1, 1, 3, 3>` and `<0, 1, 0, 1>` use a dedicated instruction, see [`mask32x8::dup_even`], [`mask32x8::dup_odd`] and [`mask32x8::dup_low_pair`].
    #[inline]
    #[must_use]
    pub fn permute<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(self) -> Self {
        self.simd_permute::<I0, I1, I2, I3, DefBackend>()
    }

    /// Permute the lanes within each half, always using the generic pattern path
    #[inline]
    #[must_use]
    pub fn permute_general<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(self) -> Self {
        self.simd_permute_general::<I0, I1, I2, I3, DefBackend>()
    }

    /// Broadcast lane `I` of each half over that half
    #[inline]
    #[must_use]
    pub fn broadcast_lane<const I: usize>(self) -> Self {
        self.permute::<I, I, I, I>()
    }

    /// Shuffle the lanes of 2 masks within each half: `<a[I0], a[I1], b[I2], b[I3]>`
    #[inline]
    #[must_use]
    pub fn shuffle<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(self, other: Self) -> Self {
        self.simd_shuffle::<I0, I1, I2, I3, DefBackend>(other)
    }

    /// Duplicate the even lanes: `<a0, a0, a2, a2, a4, a4, a6, a6>`
    #[inline]
    #[must_use]
    pub fn dup_even(self) -> Self {
        self.simd_dup_even::<DefBackend>()
    }

    /// Duplicate the odd lanes: `<a1, a1, a3, a3, a5, a5, a7, a7>`
    #[inline]
    #[must_use]
    pub fn dup_odd(self) -> Self {
        self.simd_dup_odd::<DefBackend>()
    }

    /// Duplicate the low pair of each half: `<a0, a1, a0, a1, a4, a5, a4, a5>`
    #[inline]
    #[must_use]
    pub fn dup_low_pair(self) -> Self {
        self.simd_dup_low_pair::<DefBackend>()
    }

    /// Interleave the low lanes of each half: `<a0, b0, a1, b1, a4, b4, a5, b5>`
    #[inline]
    #[must_use]
    pub fn unpack_lo(self, other: Self) -> Self {
        self.simd_unpack_lo::<DefBackend>(other)
    }

    /// Interleave the high lanes of each half: `<a2, b2, a3, b3, a6, b6, a7, b7>`
    #[inline]
    #[must_use]
    pub fn unpack_hi(self, other: Self) -> Self {
        self.simd_unpack_hi::<DefBackend>(other)
    }
}

/// Shuffling of whole halves
impl mask32x8 {
    /// Build a mask out of the halves of `self`, the low half becomes half `I0` and the high half becomes half `I1`
    #[inline]
    #[must_use]
    pub fn permute_halves<const I0: usize, const I1: usize>(self) -> Self {
        const { assert!(I0 < 2 && I1 < 2, "half index out of range") };
        self.shuffle_halves::<I0, I1>(self)
    }

    /// Build a mask by picking 2 halves out of `[self.low(), self.high(), other.low(), other.high()]`
    #[inline]
    #[must_use]
    pub fn shuffle_halves<const I0: usize, const I1: usize>(self, other: Self) -> Self {
        self.simd_shuffle_halves::<I0, I1, DefBackend>(other)
    }

    /// Swap the low and high half
    #[inline]
    #[must_use]
    pub fn swap_halves(self) -> Self {
        self.permute_halves::<1, 0>()
    }

    /// Broadcast the low half over both halves
    #[inline]
    #[must_use]
    pub fn broadcast_low(self) -> Self {
        self.permute_halves::<0, 0>()
    }

    /// Broadcast the high half over both halves
    #[inline]
    #[must_use]
    pub fn broadcast_high(self) -> Self {
        self.permute_halves::<1, 1>()
    }

    /// Replace half `I`, the other half stays untouched
    #[inline]
    #[must_use]
    pub fn insert<const I: usize>(self, half: mask32x4) -> Self {
        self.simd_insert::<I, DefBackend>(half)
    }

    /// Get half `I`
    #[inline]
    #[must_use]
    pub fn extract<const I: usize>(self) -> mask32x4 {
        self.simd_extract::<I, DefBackend>()
    }
}

impl mask32x8 {
    #[inline]
    #[must_use]
    pub fn simd_permute<const I0: usize, const I1: usize, const I2: usize, const I3: usize, B: Backend>(self) -> Self
        where Self : SimdShuffleImpl<B>
    {
        assert_lane_pattern!(I0, I1, I2, I3);
        match (I0, I1, I2, I3) {
            (0, 0, 2, 2) => self.simd_dup_even::<B>(),
            (1, 1, 3, 3) => self.simd_dup_odd::<B>(),
            (0, 1, 0, 1) => self.simd_dup_low_pair::<B>(),
            _ => self.simd_permute_general::<I0, I1, I2, I3, B>(),
        }
    }

    #[inline]
    #[must_use]
    pub fn simd_permute_general<const I0: usize, const I1: usize, const I2: usize, const I3: usize, B: Backend>(self) -> Self
        where Self : SimdShuffleImpl<B>
    {
        assert_lane_pattern!(I0, I1, I2, I3);
        <Self as SimdShuffleImpl<B>>::simd_permute_impl::<I0, I1, I2, I3>(self)
    }

    #[inline]
    #[must_use]
    pub fn simd_shuffle<const I0: usize, const I1: usize, const I2: usize, const I3: usize, B: Backend>(self, other: Self) -> Self
        where Self : SimdShuffleImpl<B>
    {
        assert_lane_pattern!(I0, I1, I2, I3);
        <Self as SimdShuffleImpl<B>>::simd_shuffle_impl::<I0, I1, I2, I3>(self, other)
    }

    #[inline]
    #[must_use]
    pub fn simd_dup_even<B: Backend>(self) -> Self
        where Self : SimdShuffleImpl<B>
    {
        <Self as SimdShuffleImpl<B>>::simd_dup_even_impl(self)
    }

    #[inline]
    #[must_use]
    pub fn simd_dup_odd<B: Backend>(self) -> Self
        where Self : SimdShuffleImpl<B>
    {
        <Self as SimdShuffleImpl<B>>::simd_dup_odd_impl(self)
    }

    #[inline]
    #[must_use]
    pub fn simd_dup_low_pair<B: Backend>(self) -> Self
        where Self : SimdShuffleImpl<B>
    {
        <Self as SimdShuffleImpl<B>>::simd_dup_low_pair_impl(self)
    }

    #[inline]
    #[must_use]
    pub fn simd_unpack_lo<B: Backend>(self, other: Self) -> Self
        where Self : SimdShuffleImpl<B>
    {
        <Self as SimdShuffleImpl<B>>::simd_unpack_lo_impl(self, other)
    }

    #[inline]
    #[must_use]
    pub fn simd_unpack_hi<B: Backend>(self, other: Self) -> Self
        where Self : SimdShuffleImpl<B>
    {
        <Self as SimdShuffleImpl<B>>::simd_unpack_hi_impl(self, other)
    }

    #[inline]
    #[must_use]
    pub fn simd_shuffle_halves<const I0: usize, const I1: usize, B: Backend>(self, other: Self) -> Self
        where Self : SimdShuffleImpl<B>
    {
        const { assert!(I0 < 4 && I1 < 4, "half index out of range") };
        <Self as SimdShuffleImpl<B>>::simd_shuffle_halves_impl::<I0, I1>(self, other)
    }

    #[inline]
    #[must_use]
    pub fn simd_insert<const I: usize, B: Backend>(self, half: mask32x4) -> Self
        where Self : SimdHalvesImpl<B>
    {
        const { assert!(I < 2, "half index out of range") };
        <Self as SimdHalvesImpl<B>>::simd_insert_impl::<I>(self, half)
    }

    #[inline]
    #[must_use]
    pub fn simd_extract<const I: usize, B: Backend>(self) -> mask32x4
        where Self : SimdHalvesImpl<B>
    {
        const { assert!(I < 2, "half index out of range") };
        <Self as SimdHalvesImpl<B>>::simd_extract_impl::<I>(self)
    }
}
