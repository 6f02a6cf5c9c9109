//! Graham scan over a validated `PointSet`.
//!
//! Stages
//! - `pivot`: min x, tie min y, tie first seen. A hull vertex in exact mode.
//! - `sort`: remaining points by polar angle around the pivot (CCW), nearer
//!   first on equal angle.
//! - `sweep`: degenerate cases up front, then the stack sweep that pops on
//!   any non-left turn, then the optional near-straight merge.
//! - `output`: checked copy into caller-owned buffers.
//!
//! Numerics
//! - The sort and the sweep use the exact cross sign.
//! - `HullCfg::eps_collinear` (zero by default) widens the all-collinear check
//!   and merges near-straight vertices of the exact hull afterwards.

mod output;
mod pivot;
mod sort;
mod sweep;
mod types;

pub use pivot::select_pivot;
pub use sort::angular_sort;
pub use sweep::build_hull;
pub use types::{Hull, HullCfg};

use crate::point_set::PointSet;

/// Convex hull with default (exact) configuration.
pub fn convex_hull(points: &PointSet) -> Hull {
    convex_hull_with(points, HullCfg::default())
}

/// Convex hull: CCW vertices starting at the min-x (tie min-y) point.
pub fn convex_hull_with(points: &PointSet, cfg: HullCfg) -> Hull {
    let Some(pivot) = select_pivot(points.as_slice()) else {
        return Hull::default();
    };
    build_hull(points.as_slice(), pivot, cfg)
}
