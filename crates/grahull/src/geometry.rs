//! Orientation primitives shared by the hull stages.
//!
//! All predicates use plain `f64` arithmetic. `orientation` takes an explicit
//! collinearity slack so callers choose between exact (`eps = 0.0`) and
//! tolerant classification in one place.

use nalgebra::Vector2;

/// Signed area of the parallelogram spanned by vectors `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// `(b - a) × (c - a)`: positive iff a→b→c turns left.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    parallelogram_area(b - a, c - a)
}

/// Squared Euclidean distance.
#[inline]
pub fn dist2(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm_squared()
}

/// Turn direction of the path a→b→c.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Orientation {
    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }
}

/// Classify a→b→c; `|cross| <= eps` counts as collinear.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> Orientation {
    let z = cross(a, b, c);
    if z.abs() <= eps {
        Orientation::Collinear
    } else if z > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn area_axis_aligned() {
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 2.5];
        assert_eq!(parallelogram_area(a, b), 2.5);
        assert_eq!(parallelogram_area(b, a), -2.5);
    }

    #[test]
    fn orientation_left_right_straight() {
        let o = vector![0.0, 0.0];
        let e = vector![1.0, 0.0];
        assert_eq!(orientation(o, e, vector![1.0, 1.0], 0.0), Orientation::CounterClockwise);
        assert_eq!(orientation(o, e, vector![1.0, -1.0], 0.0), Orientation::Clockwise);
        assert_eq!(orientation(o, e, vector![3.0, 0.0], 0.0), Orientation::Collinear);
        // Coincident points are collinear with anything.
        assert_eq!(orientation(o, o, vector![5.0, 7.0], 0.0), Orientation::Collinear);
    }

    #[test]
    fn eps_widens_collinear_band() {
        let o = vector![0.0, 0.0];
        let e = vector![1.0, 0.0];
        let c = vector![2.0, 1e-10];
        assert_eq!(orientation(o, e, c, 0.0), Orientation::CounterClockwise);
        assert_eq!(orientation(o, e, c, 1e-9), Orientation::Collinear);
    }

    #[test]
    fn cross_antisymmetric_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let a = Vector2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
            let b = Vector2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
            let c = Vector2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
            // Swapping the last two arguments flips the sign exactly.
            assert_eq!(cross(a, b, c), -cross(a, c, b));
        }
    }
}
