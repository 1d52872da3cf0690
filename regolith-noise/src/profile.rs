//! Data-driven generator configuration.
//!
//! Generation settings are often described in data files rather than code:
//! a tagged object names the variant and its parameters, and [`build`]
//! turns it into a ready-to-sample [`NoiseSource`]. Profiles use the keyed
//! MD5 primitive; callers wanting a different hash or mixer construct the
//! generator types directly.
//!
//! [`build`]: NoiseProfile::build

use regolith_digest::Md5Hash;
use serde::Deserialize;

use crate::{CellNoise2, NoiseError, NoiseGenerator, PerlinNoise2, WhiteNoise2};

/// Declarative description of a noise source.
///
/// ```json
/// { "kind": "cell", "seed": "badlands", "cells_x": 8, "cells_y": 8 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoiseProfile {
    /// Uncorrelated per-coordinate noise.
    White {
        /// Key for the hash primitive.
        seed: String,
    },
    /// Constant-per-cell mosaic noise.
    Cell {
        /// Key for the hash primitive.
        seed: String,
        /// Cell count per unit along x; must be positive.
        cells_x: u32,
        /// Cell count per unit along y; must be positive.
        cells_y: u32,
    },
    /// Smooth lattice-gradient noise.
    Perlin {
        /// Key for the hash primitive, also used to derive the salt.
        seed: String,
    },
}

impl NoiseProfile {
    /// Build the described generator.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidCellResolution`] for a cell profile
    /// with a zero cell count.
    pub fn build(&self) -> Result<NoiseSource, NoiseError> {
        let source = match self {
            Self::White { seed } => {
                NoiseSource::White(WhiteNoise2::new(Md5Hash::keyed(seed.as_bytes())))
            }
            Self::Cell {
                seed,
                cells_x,
                cells_y,
            } => NoiseSource::Cell(CellNoise2::new(
                Md5Hash::keyed(seed.as_bytes()),
                *cells_x,
                *cells_y,
            )?),
            Self::Perlin { seed } => {
                let mut perlin = PerlinNoise2::new(Md5Hash::keyed(seed.as_bytes()));
                perlin.set_seed(seed.as_bytes());
                NoiseSource::Perlin(perlin)
            }
        };
        tracing::debug!(kind = source.kind(), "built noise source");
        Ok(source)
    }
}

/// A profile-built generator, one variant per noise kind.
#[derive(Debug, Clone)]
pub enum NoiseSource {
    /// See [`WhiteNoise2`].
    White(WhiteNoise2<Md5Hash>),
    /// See [`CellNoise2`].
    Cell(CellNoise2<Md5Hash>),
    /// See [`PerlinNoise2`].
    Perlin(PerlinNoise2<Md5Hash>),
}

impl NoiseSource {
    /// Stable name of the wrapped variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::White(_) => "white",
            Self::Cell(_) => "cell",
            Self::Perlin(_) => "perlin",
        }
    }
}

impl NoiseGenerator for NoiseSource {
    fn generate(&mut self, x: f64, y: f64) -> f64 {
        match self {
            Self::White(noise) => noise.generate(x, y),
            Self::Cell(noise) => noise.generate(x, y),
            Self::Perlin(noise) => noise.generate(x, y),
        }
    }
}
