use crate::error::HullError;
use crate::point_set::Point2;

use super::types::Hull;

impl Hull {
    /// Copy the vertices, in order, into `out`.
    ///
    /// `out` must hold exactly `self.len()` points; on mismatch nothing is
    /// written.
    pub fn write_into(&self, out: &mut [Point2]) -> Result<(), HullError> {
        if out.len() != self.vertices.len() {
            return Err(HullError::CapacityMismatch {
                expected: self.vertices.len(),
                actual: out.len(),
            });
        }
        out.copy_from_slice(&self.vertices);
        Ok(())
    }

    /// Interleaved variant of [`Hull::write_into`]: `x0, y0, x1, y1, ...`.
    ///
    /// Returns the number of points written.
    pub fn write_interleaved(&self, out: &mut [f64]) -> Result<usize, HullError> {
        if out.len() % 2 != 0 {
            return Err(HullError::OddCoordinateCount { len: out.len() });
        }
        if out.len() / 2 != self.vertices.len() {
            return Err(HullError::CapacityMismatch {
                expected: self.vertices.len(),
                actual: out.len() / 2,
            });
        }
        for (xy, p) in out.chunks_exact_mut(2).zip(&self.vertices) {
            xy[0] = p.x;
            xy[1] = p.y;
        }
        Ok(self.vertices.len())
    }
}
