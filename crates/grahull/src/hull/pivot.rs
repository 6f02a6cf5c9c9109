use crate::point_set::Point2;

/// Anchor vertex: smallest x, then smallest y; the first such point on ties.
///
/// `None` for empty input.
pub fn select_pivot(points: &[Point2]) -> Option<Point2> {
    let (first, rest) = points.split_first()?;
    let mut best = *first;
    for p in rest {
        if p.x < best.x || (p.x == best.x && p.y < best.y) {
            best = *p;
        }
    }
    Some(best)
}
