//! Print hull sizes for a few seeded point clouds.
//!
//! Usage:
//!   cargo run -p grahull --example hull_demo -- disk
//!   cargo run -p grahull --example hull_demo -- collinear

use grahull::api::{convex_hull, draw_points, PointCloud, PointSet, ReplayToken};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "disk".to_string());
    let cloud = match mode.as_str() {
        "box" => PointCloud::Box { n: 500, half: 1.0 },
        "disk" => PointCloud::Disk { n: 500, radius: 1.0 },
        "circle" => PointCloud::Circle { n: 32, radius: 1.0 },
        "collinear" => PointCloud::Collinear { n: 50, half: 1.0 },
        _ => {
            eprintln!("usage: hull_demo [box|disk|circle|collinear]");
            return;
        }
    };
    let mut tok = ReplayToken { seed: 2025, index: 0 };
    for i in 0..5 {
        let points = match PointSet::try_new(draw_points(cloud, tok)) {
            Ok(ps) => ps,
            Err(e) => {
                eprintln!("sample {i}: {e}");
                return;
            }
        };
        let hull = convex_hull(&points);
        println!(
            "{mode} sample {i}: n={}, hull={}, area={:.4}",
            points.len(),
            hull.len(),
            hull.area()
        );
        tok = tok.next();
    }
}
