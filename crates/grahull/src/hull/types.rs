//! Hull configuration and result type.

use crate::geometry::{cross, dist2, orientation, Orientation};
use crate::point_set::Point2;

/// Hull configuration (tolerances).
///
/// `eps_collinear` is the slack on the cross product below which three points
/// count as collinear. `0.0` keeps the exact behaviour: only a cross product
/// of exactly zero is collinear. With a positive slack every input point is
/// contained with slack `eps_collinear`, near-straight vertices are merged
/// away, and a near-collinear input gives its two ends ordered by (x, y),
/// which need not include the min-x point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    pub eps_collinear: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self { eps_collinear: 0.0 }
    }
}

impl HullCfg {
    /// Tolerant variant for ill-conditioned inputs.
    #[inline]
    pub fn with_eps(eps_collinear: f64) -> Self {
        Self {
            eps_collinear: eps_collinear.max(0.0),
        }
    }

    #[inline]
    pub(crate) fn orient(&self, a: Point2, b: Point2, c: Point2) -> Orientation {
        orientation(a, b, c, self.eps_collinear)
    }
}

/// Ordered hull vertices, counter-clockwise from the min-x (tie min-y) point
/// (see [`HullCfg`] for near-collinear inputs under a tolerance).
///
/// Invariants:
/// - Every vertex is an input point (by value).
/// - `len() <= 2` only for empty, coincident or collinear inputs.
/// - For `len() >= 3` every consecutive triple turns strictly CCW.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    pub(crate) vertices: Vec<Point2>,
}

impl Hull {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn into_vec(self) -> Vec<Point2> {
        self.vertices
    }

    /// Inside-or-on test with cross-product slack `eps`.
    ///
    /// Degenerate hulls: a point hull contains only that point, a segment
    /// hull contains the points on the segment.
    pub fn contains(&self, p: Point2, eps: f64) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => *a == p,
            [a, b] => {
                if orientation(*a, *b, p, eps) != Orientation::Collinear {
                    return false;
                }
                let d = *b - *a;
                let t = d.dot(&(p - *a));
                t >= -eps && t <= d.norm_squared() + eps
            }
            vs => (0..vs.len()).all(|k| {
                let a = vs[k];
                let b = vs[(k + 1) % vs.len()];
                cross(a, b, p) >= -eps
            }),
        }
    }

    /// Every consecutive triple (cyclically) turns strictly left.
    pub fn is_strictly_convex(&self) -> bool {
        let vs = &self.vertices;
        if vs.len() < 3 {
            return true;
        }
        (0..vs.len()).all(|k| {
            let a = vs[k];
            let b = vs[(k + 1) % vs.len()];
            let c = vs[(k + 2) % vs.len()];
            cross(a, b, c) > 0.0
        })
    }

    /// Enclosed area (shoelace); zero for degenerate hulls.
    pub fn area(&self) -> f64 {
        let vs = &self.vertices;
        if vs.len() < 3 {
            return 0.0;
        }
        let twice: f64 = (0..vs.len())
            .map(|k| {
                let p = vs[k];
                let q = vs[(k + 1) % vs.len()];
                p.x * q.y - q.x * p.y
            })
            .sum();
        0.5 * twice
    }

    /// Length of the closed boundary. A segment hull is walked there and back.
    pub fn perimeter(&self) -> f64 {
        let vs = &self.vertices;
        if vs.len() < 2 {
            return 0.0;
        }
        (0..vs.len())
            .map(|k| dist2(vs[k], vs[(k + 1) % vs.len()]).sqrt())
            .sum()
    }
}

impl AsRef<[Point2]> for Hull {
    fn as_ref(&self) -> &[Point2] {
        &self.vertices
    }
}
