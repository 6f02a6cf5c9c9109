//! Curated surface for the CLI and experiments (UNSTABLE).
//!
//! Breaking changes are allowed; prefer these re-exports for consistency
//! across callers inside the workspace.

// Kernel
pub use crate::hull::{
    angular_sort, build_hull, convex_hull, convex_hull_with, select_pivot, Hull, HullCfg,
};
// Input/output
pub use crate::point_set::{Point2, PointSet};
pub use crate::task::{
    compute, emit, execute, prepare, query_len, validate, TaskInput, TaskOutput,
};
// Samplers
pub use crate::sample::{draw_points, PointCloud, ReplayToken};
// Errors
pub use crate::error::HullError;
