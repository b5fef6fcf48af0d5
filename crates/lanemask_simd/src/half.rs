use core::{
    array,
    fmt,
    ops::{BitAnd, BitOr, BitXor, Not, BitAndAssign, BitOrAssign, BitXorAssign}
};

use crate::lanes::*;

/// A 4-lane mask of 32-bit lanes, i.e. one half of a [`mask32x8`](crate::mask32x8)
///
/// Each lane is either all bits set (`true`) or all bits clear (`false`).
/// The layout matches a 128-bit register (`__m128` on x86_64).
#[repr(C, align(16))]
#[derive(Clone, Copy)]
pub struct mask32x4(pub(crate) [i32; 4]);

impl mask32x4 {
    /// Number of lanes
    pub const LANES : usize = 4;

    /// Mask with all lanes set
    #[inline]
    #[must_use]
    pub fn all_true() -> Self {
        Self([TRUE_BITS; 4])
    }

    /// Mask with no lanes set
    #[inline]
    #[must_use]
    pub fn all_false() -> Self {
        Self([FALSE_BITS; 4])
    }

    /// Construct a mask by setting all lanes to the given value
    #[inline]
    #[must_use]
    pub fn splat(value: bool) -> Self {
        Self([lane_from_bool(value); 4])
    }

    /// Construct a mask with the pattern `<a, b, a, b>`
    #[inline]
    #[must_use]
    pub fn new2(a: bool, b: bool) -> Self {
        Self::new(a, b, a, b)
    }

    #[inline]
    #[must_use]
    pub fn new(a: bool, b: bool, c: bool, d: bool) -> Self {
        Self::from_array([a, b, c, d])
    }

    /// Convert an array of bools to a mask
    #[inline]
    #[must_use]
    pub fn from_array(array: [bool; 4]) -> Self {
        Self(array.map(lane_from_bool))
    }

    /// Convert a mask to an array of bools
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [bool; 4] {
        self.0.map(lane_to_bool)
    }

    /// Get the raw bits of each lane
    #[inline]
    #[must_use]
    pub fn to_int(self) -> [i32; 4] {
        self.0
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

    /// Sets the value of the specific lane
    ///
    /// # Panics
    /// Panics if `lane` is greater of equal to the number of lanes in the vector
    #[inline]
    pub fn set(&mut self, lane: usize, value: bool) {
        assert!(lane < Self::LANES, "lane index out of range");
        self.0[lane] = lane_from_bool(value);
    }

    /// Get an integer where bit `i` is set when lane `i` is set
    #[inline]
    #[must_use]
    pub fn movemask(self) -> u8 {
        self.0.iter()
            .enumerate()
            .fold(0, |acc, (idx, &bits)| acc | ((lane_to_bool(bits) as u8) << idx))
    }

    /// Number of set lanes
    #[inline]
    #[must_use]
    pub fn popcnt(self) -> u32 {
        self.movemask().count_ones()
    }
}

impl Default for mask32x4 {
    fn default() -> Self {
        Self::all_false()
    }
}

impl From<[bool; 4]> for mask32x4 {
    fn from(array: [bool; 4]) -> Self {
        Self::from_array(array)
    }
}

impl From<mask32x4> for [bool; 4] {
    fn from(mask: mask32x4) -> Self {
        mask.to_array()
    }
}

impl PartialEq for mask32x4 {
    fn eq(&self, other: &Self) -> bool {
        self.movemask() == other.movemask()
    }
}

impl Eq for mask32x4 {}

macro_rules! impl_bit_op {
    { $($trait:ident, $func:ident, $assign_trait:ident, $assign_func:ident, $op:tt;)* } => {
        $(
            impl $trait for mask32x4 {
                type Output = Self;

                #[inline]
                fn $func(self, rhs: Self) -> Self::Output {
                    Self(array::from_fn(|idx| self.0[idx] $op rhs.0[idx]))
                }
            }

            impl $assign_trait for mask32x4 {
                #[inline]
                fn $assign_func(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}
impl_bit_op!{
    BitAnd, bitand, BitAndAssign, bitand_assign, &;
    BitOr , bitor , BitOrAssign , bitor_assign , |;
    BitXor, bitxor, BitXorAssign, bitxor_assign, ^;
}

impl Not for mask32x4 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        self ^ Self::all_true()
    }
}

impl fmt::Display for mask32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_lanes(f, &self.to_array())
    }
}

impl fmt::Debug for mask32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
