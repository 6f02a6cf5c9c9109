//! Planar convex hulls via Graham's scan.
//!
//! Pipeline
//! - `PointSet` (validated input) → pivot → angular sort → stack sweep → `Hull`.
//! - `task` wraps the pipeline in a validate/prepare/compute/emit lifecycle for
//!   callers that hand over flat coordinate buffers.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; equality is exact.
//! - y axis points up; a positive cross product means a counter-clockwise turn.
//! - Hulls are CCW and start at the min-x (tie min-y) input point.

pub mod api;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod point_set;
pub mod sample;
pub mod task;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::HullError;
pub use hull::{convex_hull, convex_hull_with, Hull, HullCfg};
pub use point_set::{Point2, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geometry::{cross, orientation, Orientation};
    pub use crate::hull::{convex_hull, convex_hull_with, Hull, HullCfg};
    pub use crate::point_set::{Point2, PointSet};
    pub use crate::sample::{PointCloud, ReplayToken};
    pub use crate::task::{execute, query_len, TaskInput, TaskOutput};
    pub use crate::HullError;
}
