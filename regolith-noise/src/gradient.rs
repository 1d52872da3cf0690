//! Process-wide gradient table for lattice noise.
//!
//! A fixed set of unit vectors evenly spaced around the circle, built once
//! on first use and shared read-only by every [`PerlinNoise2`] instance.
//! The table size is a power of two so a lattice-mix result can be masked
//! down to an index instead of reduced modulo.
//!
//! [`PerlinNoise2`]: crate::PerlinNoise2

use std::f64::consts::TAU;
use std::sync::LazyLock;

use glam::DVec2;

/// Number of precomputed gradient directions. Must stay a power of two;
/// [`get`] masks indices against `COUNT - 1`.
pub const COUNT: usize = 1024;

/// Entry `k` is `(sin θ, cos θ)` for `θ = 2π·k / COUNT`.
static TABLE: LazyLock<[DVec2; COUNT]> = LazyLock::new(|| {
    let mut table = [DVec2::ZERO; COUNT];
    for (k, entry) in table.iter_mut().enumerate() {
        let theta = TAU * k as f64 / COUNT as f64;
        *entry = DVec2::new(theta.sin(), theta.cos());
    }
    table
});

/// Look up the unit gradient for a lattice-mix result.
///
/// Only the low bits participate, matching the power-of-two table size, so
/// any `i32` mix output cast through `u32` indexes safely.
#[inline]
#[must_use]
pub fn get(index: usize) -> DVec2 {
    TABLE[index & (COUNT - 1)]
}
