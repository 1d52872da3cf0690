//! Lattice-gradient (Perlin-style) noise.

use glam::DVec2;
use regolith_digest::{DigestAccumulator, FxMix, HashPrimitive, LatticeMix};

use crate::{NoiseGenerator, gradient, kernel, math};

/// 2D gradient noise built from surflet contributions.
///
/// Each sample sums four surflets, one per corner of the surrounding unit
/// lattice cell: the corner's lattice coordinates are mixed with a
/// seed-derived salt into a [`gradient`] table index, and the gradient's dot
/// product with the offset to the sample point is tapered by the radial
/// [`kernel`] falloff. Contributions vanish (in value and slope) at unit
/// distance, so the summed field is continuous with a continuous first
/// derivative everywhere, and exactly zero at every lattice point.
///
/// Output is signed and not normalized to a fixed interval; callers needing
/// a bounded range rescale it themselves.
#[derive(Debug, Clone)]
pub struct PerlinNoise2<H, M = FxMix> {
    digest: DigestAccumulator<H>,
    mixer: M,
    salt: i32,
}

impl<H: HashPrimitive> PerlinNoise2<H> {
    /// Create an unseeded generator with the default [`FxMix`] mixer.
    ///
    /// The salt starts at an explicit 0, so sampling before
    /// [`set_seed`](Self::set_seed) is well defined; it just means every
    /// instance of this primitive produces the same field.
    #[must_use]
    pub const fn new(hash: H) -> Self {
        Self::with_mixer(hash, FxMix)
    }
}

impl<H: HashPrimitive, M: LatticeMix> PerlinNoise2<H, M> {
    /// Create an unseeded generator with a caller-supplied lattice mixer.
    #[must_use]
    pub const fn with_mixer(hash: H, mixer: M) -> Self {
        Self {
            digest: DigestAccumulator::new(hash),
            mixer,
            salt: 0,
        }
    }

    /// Derive the salt from a seed byte sequence.
    ///
    /// The seed runs through the digest pipeline once and the resulting
    /// 32-bit digest becomes the salt mixed into every lattice-point hash.
    /// May be called again at any time; the new salt replaces the old one
    /// and deterministically reshapes the whole field.
    pub fn set_seed(&mut self, seed: &[u8]) {
        self.digest.begin();
        self.digest.push_bytes(seed);
        self.salt = self.digest.finalize() as i32;
        tracing::trace!(salt = self.salt, "perlin generator re-seeded");
    }

    /// The current seed-derived salt (0 while unseeded).
    #[must_use]
    pub const fn salt(&self) -> i32 {
        self.salt
    }

    /// One corner's falloff-weighted gradient contribution.
    ///
    /// `offset` points from the corner to the sample. Corners at or beyond
    /// unit distance contribute nothing; the early return is also what
    /// bounds each sample to its four surrounding lattice points.
    fn surflet(&self, lattice_i: i32, lattice_j: i32, offset: DVec2) -> f64 {
        let rho2 = offset.length_squared();
        if rho2 >= 1.0 {
            return 0.0;
        }
        let index = self.mixer.mix(lattice_i, lattice_j, self.salt) as u32;
        let dot = gradient::get(index as usize).dot(offset);
        dot * kernel::falloff(rho2.sqrt())
    }
}

impl<H: HashPrimitive, M: LatticeMix> NoiseGenerator for PerlinNoise2<H, M> {
    fn generate(&mut self, x: f64, y: f64) -> f64 {
        let i = math::floor(x);
        let j = math::floor(y);
        let dx = x - f64::from(i);
        let dy = y - f64::from(j);

        // Lattice coordinates wrap at the i32 edge rather than overflow;
        // fields that far out are already beyond meaningful coordinates.
        let i1 = i.wrapping_add(1);
        let j1 = j.wrapping_add(1);

        self.surflet(i, j, DVec2::new(dx, dy))
            + self.surflet(i, j1, DVec2::new(dx, dy - 1.0))
            + self.surflet(i1, j, DVec2::new(dx - 1.0, dy))
            + self.surflet(i1, j1, DVec2::new(dx - 1.0, dy - 1.0))
    }
}
