//! Validated input points.
//!
//! `PointSet` is the only way into the kernel: construction checks that every
//! coordinate is finite, so later stages can compare with `partial_cmp`
//! without NaN handling.

use nalgebra::Vector2;

use crate::error::HullError;

/// A planar point. Equality is exact value equality.
pub type Point2 = Vector2<f64>;

/// Input points in the order received.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point2>,
}

impl PointSet {
    /// Take ownership of `points` after checking they are finite.
    pub fn try_new(points: Vec<Point2>) -> Result<Self, HullError> {
        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(HullError::NonFinite {
                index,
                x: p.x,
                y: p.y,
            });
        }
        Ok(Self { points })
    }

    /// Build from a typed slice.
    pub fn from_points(points: &[Point2]) -> Result<Self, HullError> {
        Self::try_new(points.to_vec())
    }

    /// Build from interleaved coordinates `x0, y0, x1, y1, ...`.
    pub fn from_interleaved(coords: &[f64]) -> Result<Self, HullError> {
        if coords.len() % 2 != 0 {
            return Err(HullError::OddCoordinateCount { len: coords.len() });
        }
        let points = coords
            .chunks_exact(2)
            .map(|xy| Vector2::new(xy[0], xy[1]))
            .collect();
        Self::try_new(points)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point2] {
        &self.points
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    pub fn into_vec(self) -> Vec<Point2> {
        self.points
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
