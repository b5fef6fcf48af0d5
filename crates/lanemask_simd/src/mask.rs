use core::{
    fmt,
    ops::{BitAnd, BitOr, BitXor, Not, BitAndAssign, BitOrAssign, BitXorAssign, Index}
};
use crate::{
    lanes::*,
    backend::*,
    half::mask32x4,
    DefBackend
};

mod shuffle;

mod to_bitmask;
pub use to_bitmask::ToBitMask;

/// An 8-lane mask of 32-bit lanes
///
/// Each lane is either all bits set (`true`) or all bits clear (`false`), this is what allows the bitwise operators to be used as boolean logic.
/// Reading a lane only looks at its sign bit.
///
/// The layout is 8 contiguous 32-bit lanes, with lanes 0..4 forming the low half and lanes 4..8 the high half.
/// This matches a 256-bit register (`__m256`, `__m256i` or `__m256d` on x86_64), as well as 2 [`mask32x4`]s.
#[repr(C, align(32))]
#[derive(Clone, Copy)]
pub struct mask32x8(pub(crate) [i32; 8]);

impl mask32x8 {
    /// Number of lanes
    pub const LANES : usize = 8;

    /// Mask with all lanes set
    #[inline]
    #[must_use]
    pub fn all_true() -> Self {
        Self::simd_all_true::<DefBackend>()
    }

    /// Mask with no lanes set
    #[inline]
    #[must_use]
    pub fn all_false() -> Self {
        Self::simd_all_false::<DefBackend>()
    }

    /// Construct a mask by setting all lanes to the given value
    #[inline]
    #[must_use]
    pub fn splat(value: bool) -> Self {
        Self([lane_from_bool(value); 8])
    }

    /// Construct a mask with the low half set to `a` and the high half set to `b`
    #[inline]
    #[must_use]
    pub fn new2(a: bool, b: bool) -> Self {
        Self::from_halves(mask32x4::splat(a), mask32x4::splat(b))
    }

    /// Construct a mask with the pattern `<a, b, a, b, c, d, c, d>`
    #[inline]
    #[must_use]
    pub fn new4(a: bool, b: bool, c: bool, d: bool) -> Self {
        Self::from_halves(mask32x4::new2(a, b), mask32x4::new2(c, d))
    }

    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: bool, b: bool, c: bool, d: bool, e: bool, f: bool, g: bool, h: bool) -> Self {
        Self::from_array([a, b, c, d, e, f, g, h])
    }

    /// Convert an array of bools to a mask
    #[inline]
    #[must_use]
    pub fn from_array(array: [bool; 8]) -> Self {
        Self(array.map(lane_from_bool))
    }

    /// Convert a mask to an array of bools
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [bool; 8] {
        self.0.map(lane_to_bool)
    }

    /// Construct a mask from its low (lanes 0..4) and high (lanes 4..8) half
    #[inline]
    #[must_use]
    pub fn from_halves(lo: mask32x4, hi: mask32x4) -> Self {
        Self::simd_from_halves::<DefBackend>(lo, hi)
    }

    /// Construct a mask with both halves set to `half`
    #[inline]
    #[must_use]
    pub fn from_half(half: mask32x4) -> Self {
        Self::from_halves(half, half)
    }

    /// Convert a vector of integers to a mask, where 0 represents `false` and -1 represents `true`
    ///
    /// # Panics
    /// Panics if any lane is not 0 or -1
    #[inline]
    #[must_use]
    pub fn from_int(value: [i32; 8]) -> Self {
        assert!(value.iter().all(|&bits| is_canonical(bits)), "mask lanes need to be either 0 or -1");
        Self(value)
    }

    /// Converts a vector of integers to a mask, where 0 represents `false` and -1 represents `true`
    ///
    /// The lanes are not checked, any lane that isn't 0 or -1 breaks the bitwise operators' boolean logic.
    /// Reading such a lane will only look at its sign bit.
    #[inline]
    #[must_use]
    pub fn from_int_unchecked(value: [i32; 8]) -> Self {
        Self(value)
    }

    /// Reinterpret the mask as a vector of integers, where 0 represents `false` and -1 represents `true`
    #[inline]
    #[must_use]
    pub fn to_int(self) -> [i32; 8] {
        self.0
    }

    /// Reinterpret the bits of the mask as 8 `f32`s
    ///
    /// `true` lanes are NaNs with all bits set
    #[inline]
    #[must_use]
    pub fn to_f32_bits(self) -> [f32; 8] {
        self.0.map(|bits| f32::from_bits(bits as u32))
    }

    /// Reinterpret the bits of the mask as 4 `f64`s, each covering a pair of lanes
    #[inline]
    #[must_use]
    pub fn to_f64_bits(self) -> [f64; 4] {
        core::array::from_fn(|idx| {
            let lo = self.0[idx * 2] as u32 as u64;
            let hi = self.0[idx * 2 + 1] as u32 as u64;
            f64::from_bits(lo | (hi << 32))
        })
    }

    /// Test the value of the specific lane
    ///
    /// # Panics
    /// Panics if `lane` is greater of equal to the number of lanes in the vector
    #[inline]
    #[must_use]
    pub fn test(&self, lane: usize) -> bool {
        assert!(lane < Self::LANES, "lane index out of range");
        lane_to_bool(self.0[lane])
    }

    /// Test the value of the specific lane
    ///
    /// # Safety
    /// `lane` must be less than `LANES`
    #[inline]
    #[must_use]
    pub unsafe fn test_unchecked(&self, lane: usize) -> bool {
        debug_assert!(lane < Self::LANES, "lane index out of range");
        lane_to_bool(*self.0.get_unchecked(lane))
    }

    /// Sets the value of the specific lane
    ///
    /// # Panics
    /// Panics if `lane` is greater of equal to the number of lanes in the vector
    #[inline]
    pub fn set(&mut self, lane: usize, value: bool) {
        assert!(lane < Self::LANES, "lane index out of range");
        self.0[lane] = lane_from_bool(value);
    }

    /// Sets the value of the specific lane
    ///
    /// # Safety
    /// `lane` must be less than `LANES`
    #[inline]
    pub unsafe fn set_unchecked(&mut self, lane: usize, value: bool) {
        debug_assert!(lane < Self::LANES, "lane index out of range");
        *self.0.get_unchecked_mut(lane) = lane_from_bool(value);
    }

    /// Get mutable access to the raw bits of a lane
    ///
    /// Writing anything other than 0 or -1 breaks the bitwise operators' boolean logic, this is not checked.
    ///
    /// # Panics
    /// Panics if `lane` is greater of equal to the number of lanes in the vector
    #[inline]
    #[must_use]
    pub fn lane_bits_mut(&mut self, lane: usize) -> &mut i32 {
        assert!(lane < Self::LANES, "lane index out of range");
        &mut self.0[lane]
    }

    /// Get the low half (lanes 0..4)
    #[inline]
    #[must_use]
    pub fn low(self) -> mask32x4 {
        self.extract::<0>()
    }

    /// Get the high half (lanes 4..8)
    #[inline]
    #[must_use]
    pub fn high(self) -> mask32x4 {
        self.extract::<1>()
    }

    /// Get both halves, low half first
    #[inline]
    #[must_use]
    pub fn halves(self) -> [mask32x4; 2] {
        [self.low(), self.high()]
    }

    /// Per lane `==`, i.e. `!(self ^ other)`
    #[inline]
    #[must_use]
    pub fn simd_eq(self, other: Self) -> Self {
        self.simd_eq_with::<DefBackend>(other)
    }

    /// Per lane `!=`, i.e. `self ^ other`
    #[inline]
    #[must_use]
    pub fn simd_ne(self, other: Self) -> Self {
        self.simd_ne_with::<DefBackend>(other)
    }

    /// Per lane, pick the lane from `when_true` if the lane in `self` is set, otherwise pick the lane from `when_false`
    #[inline]
    #[must_use]
    pub fn select(self, when_true: Self, when_false: Self) -> Self {
        self.simd_select::<DefBackend>(when_true, when_false)
    }
}

/// Per lane, pick the lane from `when_true` if the lane in `mask` is set, otherwise pick the lane from `when_false`
#[inline]
#[must_use]
pub fn select(mask: mask32x8, when_true: mask32x8, when_false: mask32x8) -> mask32x8 {
    mask.select(when_true, when_false)
}

impl mask32x8 {
    /// Mask with all lanes set
    #[inline]
    #[must_use]
    pub fn simd_all_true<B: Backend>() -> Self
        where Self : SimdSetImpl<B>
    {
        <Self as SimdSetImpl<B>>::simd_true_impl()
    }

    /// Mask with no lanes set
    #[inline]
    #[must_use]
    pub fn simd_all_false<B: Backend>() -> Self
        where Self : SimdSetImpl<B>
    {
        <Self as SimdSetImpl<B>>::simd_zero_impl()
    }

    /// Construct a mask from its low (lanes 0..4) and high (lanes 4..8) half
    #[inline]
    #[must_use]
    pub fn simd_from_halves<B: Backend>(lo: mask32x4, hi: mask32x4) -> Self
        where Self : SimdHalvesImpl<B>
    {
        <Self as SimdHalvesImpl<B>>::simd_combine_impl(lo, hi)
    }

    #[inline]
    #[must_use]
    pub fn simd_not<B: Backend>(self) -> Self
        where Self : SimdNotImpl<B>
    {
        <Self as SimdNotImpl<B>>::simd_not_impl(self)
    }

    #[inline]
    #[must_use]
    pub fn simd_and<B: Backend>(self, other: Self) -> Self
        where Self : SimdAndImpl<B>
    {
        <Self as SimdAndImpl<B>>::simd_and_impl(self, other)
    }

    #[inline]
    #[must_use]
    pub fn simd_or<B: Backend>(self, other: Self) -> Self
        where Self : SimdOrImpl<B>
    {
        <Self as SimdOrImpl<B>>::simd_or_impl(self, other)
    }

    #[inline]
    #[must_use]
    pub fn simd_xor<B: Backend>(self, other: Self) -> Self
        where Self : SimdXorImpl<B>
    {
        <Self as SimdXorImpl<B>>::simd_xor_impl(self, other)
    }

    /// Per lane `==`, built from the same xor and not as the bitwise operators
    #[inline]
    #[must_use]
    pub fn simd_eq_with<B: Backend>(self, other: Self) -> Self
        where Self : SimdXorImpl<B> + SimdNotImpl<B>
    {
        self.simd_xor::<B>(other).simd_not::<B>()
    }

    /// Per lane `!=`, built from the same xor as the bitwise operators
    #[inline]
    #[must_use]
    pub fn simd_ne_with<B: Backend>(self, other: Self) -> Self
        where Self : SimdXorImpl<B>
    {
        self.simd_xor::<B>(other)
    }

    #[inline]
    #[must_use]
    pub fn simd_select<B: Backend>(self, when_true: Self, when_false: Self) -> Self
        where Self : SimdSelectImpl<B>
    {
        <Self as SimdSelectImpl<B>>::simd_select_impl(self, when_true, when_false)
    }
}

impl Default for mask32x8 {
    fn default() -> Self {
        Self::all_false()
    }
}

impl From<[bool; 8]> for mask32x8 {
    fn from(array: [bool; 8]) -> Self {
        Self::from_array(array)
    }
}

impl From<mask32x8> for [bool; 8] {
    fn from(mask: mask32x8) -> Self {
        mask.to_array()
    }
}

impl From<mask32x4> for mask32x8 {
    fn from(half: mask32x4) -> Self {
        Self::from_half(half)
    }
}

impl Index<usize> for mask32x8 {
    type Output = bool;

    /// Test the value of the specific lane, see [`mask32x8::test`]
    #[inline]
    fn index(&self, lane: usize) -> &bool {
        if self.test(lane) { &true } else { &false }
    }
}

impl PartialEq for mask32x8 {
    fn eq(&self, other: &Self) -> bool {
        self.simd_eq(*other).all()
    }
}

impl Eq for mask32x8 {}

macro_rules! impl_bit_op {
    { $($trait:ident, $func:ident, $assign_trait:ident, $assign_func:ident, $simd_func:ident;)* } => {
        $(
            impl $trait for mask32x8 {
                type Output = Self;

                #[inline]
                fn $func(self, rhs: Self) -> Self::Output {
                    self.$simd_func::<DefBackend>(rhs)
                }
            }

            impl $trait<bool> for mask32x8 {
                type Output = Self;

                #[inline]
                fn $func(self, rhs: bool) -> Self::Output {
                    self.$simd_func::<DefBackend>(Self::splat(rhs))
                }
            }

            impl $trait<mask32x8> for bool {
                type Output = mask32x8;

                #[inline]
                fn $func(self, rhs: mask32x8) -> Self::Output {
                    mask32x8::splat(self).$simd_func::<DefBackend>(rhs)
                }
            }

            impl $assign_trait for mask32x8 {
                #[inline]
                fn $assign_func(&mut self, rhs: Self) {
                    *self = self.$simd_func::<DefBackend>(rhs)
                }
            }

            impl $assign_trait<bool> for mask32x8 {
                #[inline]
                fn $assign_func(&mut self, rhs: bool) {
                    *self = self.$simd_func::<DefBackend>(Self::splat(rhs))
                }
            }
        )*
    };
}
impl_bit_op!{
    BitAnd, bitand, BitAndAssign, bitand_assign, simd_and;
    BitOr , bitor , BitOrAssign , bitor_assign , simd_or;
    BitXor, bitxor, BitXorAssign, bitxor_assign, simd_xor;
}

impl Not for mask32x8 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        self.simd_not::<DefBackend>()
    }
}

impl fmt::Display for mask32x8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_lanes(f, &self.to_array())
    }
}

impl fmt::Debug for mask32x8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
