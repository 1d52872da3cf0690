//! Integer avalanche mixing for lattice hashing.
//!
//! Gradient noise needs to turn an integer lattice point plus a salt into a
//! well-distributed table index without going through the byte-level digest
//! pipeline (four lattice corners are mixed per sample, so this sits on the
//! hot path). The [`LatticeMix`] contract captures exactly what the noise
//! engine relies on; [`FxMix`] is the stock implementation.

use std::hash::Hasher;

use rustc_hash::FxHasher;

/// Contract for combining three 32-bit integers into one well-distributed
/// 32-bit integer.
///
/// A small change to any input must produce an uncorrelated change to the
/// output (avalanche), and the mapping must be a pure function so noise
/// fields stay reproducible. The engine depends only on this contract, not
/// on any particular algorithm.
pub trait LatticeMix {
    /// Mix two lattice coordinates and a salt into one integer.
    fn mix(&self, i: i32, j: i32, salt: i32) -> i32;
}

/// Default mixer backed by [`FxHasher`].
///
/// Writes the three words into a fresh hasher and folds the 64-bit result
/// onto itself so both halves contribute to the returned 32 bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct FxMix;

impl LatticeMix for FxMix {
    fn mix(&self, i: i32, j: i32, salt: i32) -> i32 {
        let mut hasher = FxHasher::default();
        hasher.write_i32(i);
        hasher.write_i32(j);
        hasher.write_i32(salt);
        let wide = hasher.finish();
        ((wide >> 32) as u32 ^ wide as u32) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixing_is_deterministic() {
        assert_eq!(FxMix.mix(12, -7, 1234), FxMix.mix(12, -7, 1234));
    }

    #[test]
    fn single_bit_inputs_diverge() {
        let base = FxMix.mix(0, 0, 0);
        assert_ne!(FxMix.mix(1, 0, 0), base);
        assert_ne!(FxMix.mix(0, 1, 0), base);
        assert_ne!(FxMix.mix(0, 0, 1), base);
    }

    #[test]
    fn arguments_are_not_commutative() {
        // (i, j) and (j, i) are different lattice points and must not mix
        // to the same index in general.
        assert_ne!(FxMix.mix(3, 8, 42), FxMix.mix(8, 3, 42));
    }

    #[test]
    fn neighboring_lattice_points_spread() {
        // Crude avalanche check: a 3x3 neighborhood under one salt should
        // not produce duplicate indices.
        let mut seen = Vec::new();
        for i in -1..=1 {
            for j in -1..=1 {
                seen.push(FxMix.mix(i, j, 99));
            }
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 9, "duplicate mix outputs in a 3x3 block");
    }
}
