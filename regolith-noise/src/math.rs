//! Scalar math helpers shared by the noise variants.

/// Integer floor of an `f64` lattice coordinate.
///
/// Branches instead of calling `f64::floor` so the result lands directly in
/// `i32`. Out-of-range inputs saturate (and then wrap by one below
/// `i32::MIN`) and NaN maps to 0, which keeps the result total and
/// deterministic without a range check on the hot path.
#[inline]
pub(crate) fn floor(x: f64) -> i32 {
    let truncated = x as i32;
    if x < f64::from(truncated) {
        truncated.wrapping_sub(1)
    } else {
        truncated
    }
}

/// Map a 32-bit digest onto the unit interval.
///
/// Masks the sign bit and scales by `i32::MAX`, so the result covers
/// `[0, 1]` inclusive at both ends.
#[inline]
pub(crate) fn digest_to_unit(digest: u32) -> f64 {
    f64::from(digest & 0x7FFF_FFFF) / f64::from(i32::MAX)
}
