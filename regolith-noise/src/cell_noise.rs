//! Cell-quantized noise.

use regolith_digest::{DigestAccumulator, HashPrimitive};

use crate::math::digest_to_unit;
use crate::{NoiseError, NoiseGenerator};

/// 2D cell noise: a mosaic of constant-valued rectangles.
///
/// Coordinates are quantized onto a `cells_x` by `cells_y` grid per unit of
/// the respective axis, and the integer cell indices are hashed through the
/// same pipeline as [`WhiteNoise2`](crate::WhiteNoise2). Every point of a
/// cell maps to the same value; the field is discontinuous at cell
/// boundaries by design. Output is always in `[0, 1]`.
///
/// Quantization is a narrowing cast, which truncates toward zero rather
/// than flooring. For negative coordinates the cell pattern therefore
/// mirrors about the axes and the cells touching zero span twice the usual
/// width. Callers working in negative space who need a uniform grid should
/// offset their coordinates into the positive quadrant.
#[derive(Debug, Clone)]
pub struct CellNoise2<H> {
    digest: DigestAccumulator<H>,
    cells_x: u32,
    cells_y: u32,
}

impl<H: HashPrimitive> CellNoise2<H> {
    /// Create a generator with the given hash primitive and grid resolution.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidCellResolution`] if either cell count
    /// is zero.
    pub fn new(hash: H, cells_x: u32, cells_y: u32) -> Result<Self, NoiseError> {
        Self::validate(cells_x, cells_y)?;
        Ok(Self {
            digest: DigestAccumulator::new(hash),
            cells_x,
            cells_y,
        })
    }

    /// Replace the grid resolution.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidCellResolution`] if either cell count
    /// is zero; the previous resolution is kept in that case.
    pub fn set_resolution(&mut self, cells_x: u32, cells_y: u32) -> Result<(), NoiseError> {
        Self::validate(cells_x, cells_y)?;
        self.cells_x = cells_x;
        self.cells_y = cells_y;
        Ok(())
    }

    /// Current grid resolution as `(cells_x, cells_y)`.
    #[must_use]
    pub const fn resolution(&self) -> (u32, u32) {
        (self.cells_x, self.cells_y)
    }

    const fn validate(cells_x: u32, cells_y: u32) -> Result<(), NoiseError> {
        if cells_x == 0 || cells_y == 0 {
            return Err(NoiseError::InvalidCellResolution { cells_x, cells_y });
        }
        Ok(())
    }
}

impl<H: HashPrimitive> NoiseGenerator for CellNoise2<H> {
    fn generate(&mut self, x: f64, y: f64) -> f64 {
        // Truncating narrowing cast, see the type-level note. NaN saturates
        // to 0 under `as`, which keeps non-finite inputs deterministic.
        let cell_x = (x * f64::from(self.cells_x)) as i64;
        let cell_y = (y * f64::from(self.cells_y)) as i64;

        self.digest.begin();
        self.digest.push_i64(cell_x);
        self.digest.push_i64(cell_y);
        digest_to_unit(self.digest.finalize())
    }
}
