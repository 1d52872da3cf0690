//! Smoothing kernel for gradient noise.
//!
//! Surflet contributions are tapered with a quintic curve whose first and
//! second derivatives vanish at both ends of `[0, 1]`. That boundary
//! behavior is what makes the summed field C1-continuous across cell edges:
//! a contribution reaches zero value and zero slope exactly at unit
//! distance, where its lattice point stops participating.

/// Quintic easing `6t^5 - 15t^4 + 10t^3`.
///
/// Maps `[0, 1]` onto `[0, 1]` with `quintic(0) = 0`, `quintic(1) = 1`,
/// and zero first and second derivative at both endpoints.
#[inline]
#[must_use]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Radial falloff for surflet contributions.
///
/// `falloff(0) = 1` at the owning lattice point, `falloff(1) = 0` at unit
/// distance, easing between the two along the inverted quintic.
#[inline]
#[must_use]
pub fn falloff(rho: f64) -> f64 {
    1.0 - quintic(rho)
}
