use std::cmp::Ordering;

use crate::geometry::{dist2, parallelogram_area};
use crate::point_set::Point2;

/// Sort `points` in place by polar angle around `pivot`, counter-clockwise.
///
/// `a` precedes `b` when `(a - pivot) × (b - pivot) > 0`. Points on the same
/// ray are ordered nearer first, so a collinear run leaves only its farthest
/// point on the hull. Coincident points keep their input order (stable sort).
///
/// Pre: `pivot` is the min-x (tie min-y) point of the set, so every point lies
/// in the closed half-plane `x >= pivot.x` and the angles span less than π.
pub fn angular_sort(pivot: Point2, points: &mut [Point2]) {
    points.sort_by(|a, b| compare_by_angle(pivot, *a, *b));
}

#[inline]
fn compare_by_angle(pivot: Point2, a: Point2, b: Point2) -> Ordering {
    let z = parallelogram_area(a - pivot, b - pivot);
    if z > 0.0 {
        Ordering::Less
    } else if z < 0.0 {
        Ordering::Greater
    } else {
        dist2(pivot, a)
            .partial_cmp(&dist2(pivot, b))
            .unwrap_or(Ordering::Equal)
    }
}
