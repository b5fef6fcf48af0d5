use super::mask32x8;
use crate::{
    backend::*,
    half::mask32x4,
    lanes::lane_from_bool,
    DefBackend
};

mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

impl Sealed for mask32x4 {}
impl Sealed for mask32x8 {}

/// Packs a mask into an integer with one bit per lane, lane 0 in the LSB
pub trait ToBitMask : Sealed {
    /// Integer type holding one bit per lane
    type BitMask;

    /// Pack the lanes into a bitmask, same as `movemask`
    fn to_bitmask(self) -> Self::BitMask;

    /// Build a canonical mask from a bitmask, bits past the number of lanes are ignored
    fn from_bitmask(bitmask: Self::BitMask) -> Self;
}

impl ToBitMask for mask32x4 {
    type BitMask = u8;

    fn to_bitmask(self) -> u8 {
        self.movemask()
    }

    fn from_bitmask(bitmask: u8) -> Self {
        mask32x4(core::array::from_fn(|idx| lane_from_bool(bitmask & (1 << idx) != 0)))
    }
}

impl ToBitMask for mask32x8 {
    type BitMask = u8;

    fn to_bitmask(self) -> u8 {
        self.movemask()
    }

    fn from_bitmask(bitmask: u8) -> Self {
        mask32x8(core::array::from_fn(|idx| lane_from_bool(bitmask & (1 << idx) != 0)))
    }
}

impl mask32x8 {
    /// Get an integer where bit `i` is set when lane `i` is set
    ///
    /// All other reductions agree with this value
    #[inline]
    #[must_use]
    pub fn movemask(self) -> u8 {
        self.simd_movemask::<DefBackend>()
    }

    /// Number of set lanes, in the range `0..=8`
    #[inline]
    #[must_use]
    pub fn popcnt(self) -> u32 {
        self.simd_popcnt::<DefBackend>()
    }

    /// Returns true if all lanes are set, or false otherwise
    #[inline]
    #[must_use]
    pub fn all(self) -> bool {
        self.simd_all::<DefBackend>()
    }

    /// Returns true if any lane is set, or false otherwise
    #[inline]
    #[must_use]
    pub fn any(self) -> bool {
        self.simd_any::<DefBackend>()
    }

    /// Returns true if no lane is set, or false otherwise
    #[inline]
    #[must_use]
    pub fn none(self) -> bool {
        self.simd_none::<DefBackend>()
    }

    /// And all lanes together, same as [`mask32x8::all`]
    #[inline]
    #[must_use]
    pub fn reduce_and(self) -> bool {
        self.all()
    }

    /// Or all lanes together, same as [`mask32x8::any`]
    #[inline]
    #[must_use]
    pub fn reduce_or(self) -> bool {
        self.any()
    }
}

impl mask32x8 {
    #[inline]
    #[must_use]
    pub fn simd_movemask<B: Backend>(self) -> u8
        where Self : SimdMaskOpsImpl<B>
    {
        <Self as SimdMaskOpsImpl<B>>::simd_movemask_impl(self)
    }

    #[inline]
    #[must_use]
    pub fn simd_popcnt<B: Backend>(self) -> u32
        where Self : SimdMaskOpsImpl<B>
    {
        <Self as SimdMaskOpsImpl<B>>::simd_popcnt_impl(self)
    }

    #[inline]
    #[must_use]
    pub fn simd_all<B: Backend>(self) -> bool
        where Self : SimdMaskOpsImpl<B>
    {
        <Self as SimdMaskOpsImpl<B>>::simd_all_impl(self)
    }

    #[inline]
    #[must_use]
    pub fn simd_any<B: Backend>(self) -> bool
        where Self : SimdMaskOpsImpl<B>
    {
        <Self as SimdMaskOpsImpl<B>>::simd_any_impl(self)
    }

    #[inline]
    #[must_use]
    pub fn simd_none<B: Backend>(self) -> bool
        where Self : SimdMaskOpsImpl<B>
    {
        <Self as SimdMaskOpsImpl<B>>::simd_none_impl(self)
    }
}
