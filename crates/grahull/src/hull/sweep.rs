use crate::geometry::{cross, dist2, Orientation};
use crate::point_set::Point2;

use super::sort::angular_sort;
use super::types::{Hull, HullCfg};

/// Graham sweep from `pivot` over `points` (which contain the pivot).
///
/// Degenerate inputs are settled before the sweep:
/// - only copies of the pivot → `[pivot]`;
/// - all points on one line (within `cfg.eps_collinear`) → the two ends of
///   that line, min x (tie min y) first.
///
/// Otherwise the remaining points are sorted by angle and pushed onto a stack;
/// before each push the top is popped while (second, top, candidate) is not a
/// strict left turn, which also drops duplicates and collinear interior points.
/// The sweep itself is exact. A positive `eps_collinear` then merges
/// near-straight vertices of the exact hull (`merge_near_straight`).
pub fn build_hull(points: &[Point2], pivot: Point2, cfg: HullCfg) -> Hull {
    let mut rest: Vec<Point2> = points.iter().copied().filter(|p| *p != pivot).collect();
    if rest.is_empty() {
        return Hull {
            vertices: vec![pivot],
        };
    }
    if let Some(ends) = collinear_ends(pivot, &rest, cfg) {
        return Hull {
            vertices: ends.to_vec(),
        };
    }

    angular_sort(pivot, &mut rest);

    let mut stack: Vec<Point2> = Vec::with_capacity(rest.len() + 1);
    stack.push(pivot);
    stack.push(rest[0]);
    for &c in &rest[1..] {
        while stack.len() >= 2 {
            let top = stack[stack.len() - 1];
            let second = stack[stack.len() - 2];
            if cross(second, top, c) > 0.0 {
                break;
            }
            stack.pop();
        }
        stack.push(c);
    }

    let vertices = if cfg.eps_collinear > 0.0 {
        merge_near_straight(stack, cfg.eps_collinear)
    } else {
        stack
    };
    Hull { vertices }
}

/// Ends of the line through all points, or `None` if some point is off it.
///
/// The line is anchored on `pivot` and the point farthest from it; the ends
/// are the extremes of the projection onto that direction and every point is
/// re-checked against the line through the ends themselves.
fn collinear_ends(pivot: Point2, rest: &[Point2], cfg: HullCfg) -> Option<[Point2; 2]> {
    let mut far = *rest.first()?;
    let mut far_d = dist2(pivot, far);
    for &p in &rest[1..] {
        let d = dist2(pivot, p);
        if d > far_d {
            far = p;
            far_d = d;
        }
    }
    if !rest
        .iter()
        .all(|&q| cfg.orient(pivot, far, q) == Orientation::Collinear)
    {
        return None;
    }

    let dir = far - pivot;
    let (mut lo, mut lo_t) = (pivot, 0.0);
    let (mut hi, mut hi_t) = (pivot, 0.0);
    for &p in rest {
        let t = dir.dot(&(p - pivot));
        if t < lo_t {
            lo = p;
            lo_t = t;
        }
        if t > hi_t {
            hi = p;
            hi_t = t;
        }
    }
    let (a, b) = if (hi.x, hi.y) < (lo.x, lo.y) {
        (hi, lo)
    } else {
        (lo, hi)
    };

    std::iter::once(pivot)
        .chain(rest.iter().copied())
        .all(|q| cfg.orient(a, b, q) == Orientation::Collinear)
        .then_some([a, b])
}

/// Drop vertices of an exact hull that sit within `eps / 2` outside the chord
/// joining their kept neighbours.
///
/// The first vertex (the pivot) is always kept and at least three vertices
/// remain. A vertex is dropped only if it, and every vertex dropped since the
/// last kept one, satisfies `cross(a, b, q) >= -eps / 2` for the new edge
/// `a → b`, so every input point stays inside the result with slack `eps`.
fn merge_near_straight(hull: Vec<Point2>, eps: f64) -> Vec<Point2> {
    let n = hull.len();
    if n <= 3 {
        return hull;
    }
    let slack = -0.5 * eps;
    let mut kept: Vec<Point2> = Vec::with_capacity(n);
    kept.push(hull[0]);
    let mut dropped: Vec<Point2> = Vec::new();
    for i in 1..n {
        let a = kept[kept.len() - 1];
        let v = hull[i];
        let b = hull[(i + 1) % n];
        let room = kept.len() + (n - i - 1) >= 3;
        let flat = dropped
            .iter()
            .chain(std::iter::once(&v))
            .all(|&q| cross(a, b, q) >= slack);
        if room && flat {
            dropped.push(v);
        } else {
            kept.push(v);
            dropped.clear();
        }
    }
    kept
}
