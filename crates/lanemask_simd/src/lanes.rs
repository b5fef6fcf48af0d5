use core::fmt;

/// Bit pattern of a `true` lane
pub const TRUE_BITS : i32 = -1;
/// Bit pattern of a `false` lane
pub const FALSE_BITS : i32 = 0;

/// Get the canonical bit pattern for a lane value
#[inline(always)]
pub(crate) const fn lane_from_bool(value: bool) -> i32 {
    -(value as i32)
}

/// Get the value of a lane from its bit pattern
///
/// Only the sign bit is looked at, so non-canonical patterns with the sign bit clear are `false`
#[inline(always)]
pub(crate) const fn lane_to_bool(bits: i32) -> bool {
    bits < 0
}

#[inline(always)]
pub(crate) const fn is_canonical(bits: i32) -> bool {
    bits == TRUE_BITS || bits == FALSE_BITS
}

/// Write lanes as `<b0, b1, ...>`
pub(crate) fn fmt_lanes(f: &mut fmt::Formatter<'_>, lanes: &[bool]) -> fmt::Result {
    f.write_str("<")?;
    for (idx, lane) in lanes.iter().enumerate() {
        if idx != 0 {
            f.write_str(", ")?;
        }
        write!(f, "{lane}")?;
    }
    f.write_str(">")
}
