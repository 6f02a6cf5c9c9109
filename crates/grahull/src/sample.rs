//! Deterministic point clouds for tests, benches and the CLI.
//!
//! Model
//! - A `PointCloud` names the distribution; a `ReplayToken` `(seed, index)`
//!   is mixed into a single `StdRng`, so any draw can be reproduced from its
//!   token alone.
//! - `Collinear` clouds repeat some points on purpose to exercise the
//!   degenerate paths of the hull.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point_set::Point2;

/// Point distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointCloud {
    /// Uniform in the axis-aligned box `[-half, half]²`.
    Box { n: usize, half: f64 },
    /// Uniform in the disk of the given radius around the origin.
    Disk { n: usize, radius: f64 },
    /// Equally spaced on a circle with a random phase (convex position).
    Circle { n: usize, radius: f64 },
    /// On a random line through the origin, parameters in `[-half, half]`,
    /// with roughly one point in four duplicated.
    Collinear { n: usize, half: f64 },
}

impl PointCloud {
    pub fn len(&self) -> usize {
        match *self {
            PointCloud::Box { n, .. }
            | PointCloud::Disk { n, .. }
            | PointCloud::Circle { n, .. }
            | PointCloud::Collinear { n, .. } => n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw the points of `cloud` for `tok`.
pub fn draw_points(cloud: PointCloud, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    match cloud {
        PointCloud::Box { n, half } => {
            let h = half.abs().max(f64::MIN_POSITIVE);
            (0..n)
                .map(|_| Vector2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
                .collect()
        }
        PointCloud::Disk { n, radius } => {
            let r0 = radius.abs();
            (0..n)
                .map(|_| {
                    // sqrt keeps the density uniform in area
                    let r = r0 * rng.gen::<f64>().sqrt();
                    let th = rng.gen::<f64>() * std::f64::consts::TAU;
                    Vector2::new(r * th.cos(), r * th.sin())
                })
                .collect()
        }
        PointCloud::Circle { n, radius } => {
            let r0 = radius.abs();
            let phase = rng.gen::<f64>() * std::f64::consts::TAU;
            let delta = std::f64::consts::TAU / (n.max(1) as f64);
            (0..n)
                .map(|k| {
                    let th = phase + (k as f64) * delta;
                    Vector2::new(r0 * th.cos(), r0 * th.sin())
                })
                .collect()
        }
        PointCloud::Collinear { n, half } => {
            let h = half.abs().max(f64::MIN_POSITIVE);
            let th = rng.gen::<f64>() * std::f64::consts::PI;
            let dir = Vector2::new(th.cos(), th.sin());
            let mut out: Vec<Point2> = Vec::with_capacity(n);
            while out.len() < n {
                let repeat = !out.is_empty() && rng.gen_bool(0.25);
                let p = if repeat {
                    out[rng.gen_range(0..out.len())]
                } else {
                    dir * rng.gen_range(-h..=h)
                };
                out.push(p);
            }
            out
        }
    }
}
