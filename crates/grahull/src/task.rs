//! Four-phase lifecycle around the hull kernel for flat coordinate buffers.
//!
//! Phases
//! - `validate`: structural checks on the caller's buffers.
//! - `prepare`: interleaved `f64`s → `PointSet` (finite coordinates only).
//! - `compute`: the Graham scan.
//! - `emit`: checked copy of the hull into the caller's output buffer.
//!
//! Every phase is a plain function of its arguments; `execute` chains them.
//! Callers that must size the output buffer up front use `query_len` first.

use tracing::debug;

use crate::error::HullError;
use crate::hull::{convex_hull_with, Hull, HullCfg};
use crate::point_set::PointSet;

/// Immutable description of one invocation.
#[derive(Clone, Copy, Debug)]
pub struct TaskInput<'a> {
    /// Interleaved coordinates `x0, y0, x1, y1, ...`.
    pub coords: &'a [f64],
    pub cfg: HullCfg,
}

impl<'a> TaskInput<'a> {
    pub fn new(coords: &'a [f64]) -> Self {
        Self {
            coords,
            cfg: HullCfg::default(),
        }
    }

    pub fn with_cfg(mut self, cfg: HullCfg) -> Self {
        self.cfg = cfg;
        self
    }
}

/// Result of a full `execute` run.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskOutput {
    pub n_input: usize,
    pub hull: Hull,
}

/// Both buffers must hold whole `(x, y)` pairs.
pub fn validate(input: &TaskInput<'_>, out_len: usize) -> Result<(), HullError> {
    if input.coords.len() % 2 != 0 {
        return Err(HullError::OddCoordinateCount {
            len: input.coords.len(),
        });
    }
    if out_len % 2 != 0 {
        return Err(HullError::OddCoordinateCount { len: out_len });
    }
    Ok(())
}

pub fn prepare(input: &TaskInput<'_>) -> Result<PointSet, HullError> {
    PointSet::from_interleaved(input.coords)
}

pub fn compute(points: &PointSet, cfg: HullCfg) -> Hull {
    convex_hull_with(points, cfg)
}

/// Write `hull` into `out`; `out` must hold exactly `2 * hull.len()` values.
pub fn emit(hull: &Hull, out: &mut [f64]) -> Result<usize, HullError> {
    hull.write_interleaved(out)
}

/// Hull size for `input`, so callers can allocate the output buffer.
pub fn query_len(input: &TaskInput<'_>) -> Result<usize, HullError> {
    validate(input, 0)?;
    let points = prepare(input)?;
    Ok(compute(&points, input.cfg).len())
}

/// Run all four phases.
pub fn execute(input: &TaskInput<'_>, out: &mut [f64]) -> Result<TaskOutput, HullError> {
    validate(input, out.len())?;
    let points = prepare(input)?;
    debug!(n = points.len(), "prepared");
    let hull = compute(&points, input.cfg);
    debug!(n = points.len(), hull = hull.len(), "computed");
    let written = emit(&hull, out)?;
    debug!(written, "emitted");
    Ok(TaskOutput {
        n_input: points.len(),
        hull,
    })
}
