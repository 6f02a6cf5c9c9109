use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use grahull::api::{self, draw_points, HullCfg, Point2, PointCloud, ReplayToken, TaskInput};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;

use points_io::{ensure_parent, read_points, write_points};
use provenance::{write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "grahull")]
#[command(about = "Planar convex hulls (Graham scan) over point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull of a point file (.csv, .parquet, .json)
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Cross-product slack below which three points count as collinear
        #[arg(long, default_value_t = 0.0)]
        eps: f64,
        /// Expected hull size; the output buffer is sized to it and a mismatch is an error
        #[arg(long)]
        expect: Option<usize>,
    },
    /// Draw a seeded point cloud (.csv or .json)
    Sample {
        #[arg(long, value_enum)]
        kind: CloudKind,
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CloudKind {
    Box,
    Disk,
    Circle,
    Collinear,
}

impl CloudKind {
    fn cloud(self, n: usize, scale: f64) -> PointCloud {
        match self {
            CloudKind::Box => PointCloud::Box { n, half: scale },
            CloudKind::Disk => PointCloud::Disk { n, radius: scale },
            CloudKind::Circle => PointCloud::Circle { n, radius: scale },
            CloudKind::Collinear => PointCloud::Collinear { n, half: scale },
        }
    }
}

#[derive(Debug, Serialize)]
struct HullReport {
    n_input: usize,
    eps: f64,
    hull: Vec<[f64; 2]>,
    area: f64,
    perimeter: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            eps,
            expect,
        } => hull(&input, &out, eps, expect).map(|_| ()),
        Action::Sample {
            kind,
            n,
            scale,
            seed,
            index,
            out,
        } => sample(kind, n, scale, ReplayToken { seed, index }, &out),
        Action::Report => report(),
    }
}

fn hull(input: &Path, out: &Path, eps: f64, expect: Option<usize>) -> Result<HullReport> {
    tracing::info!(input = %input.display(), out = %out.display(), eps, ?expect, "hull");
    let points = read_points(input)?;
    let coords = interleave(&points);
    let task_input = TaskInput::new(&coords).with_cfg(HullCfg::with_eps(eps));

    // With an expectation the buffer is sized up front and checked by `execute`;
    // otherwise the phases run once and the buffer follows the hull.
    let (res, buf) = match expect {
        Some(n) => {
            let mut buf = vec![0.0; 2 * n];
            let res = api::execute(&task_input, &mut buf)
                .with_context(|| format!("hull of {}", input.display()))?;
            (res, buf)
        }
        None => {
            api::validate(&task_input, 0)?;
            let points = api::prepare(&task_input)
                .with_context(|| format!("hull of {}", input.display()))?;
            let hull = api::compute(&points, task_input.cfg);
            let mut buf = vec![0.0; 2 * hull.len()];
            api::emit(&hull, &mut buf)?;
            let res = api::TaskOutput {
                n_input: points.len(),
                hull,
            };
            (res, buf)
        }
    };
    tracing::info!(n_input = res.n_input, hull = res.hull.len(), "hull_done");

    let report = HullReport {
        n_input: res.n_input,
        eps,
        hull: buf.chunks_exact(2).map(|xy| [xy[0], xy[1]]).collect(),
        area: res.hull.area(),
        perimeter: res.hull.perimeter(),
    };
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(
        out,
        Provenance::new(
            "hull",
            serde_json::json!({
                "input": input.to_string_lossy(),
                "eps": eps,
                "expect": expect,
            }),
        ),
    )?;
    Ok(report)
}

fn sample(kind: CloudKind, n: usize, scale: f64, tok: ReplayToken, out: &Path) -> Result<()> {
    tracing::info!(?kind, n, scale, seed = tok.seed, index = tok.index, "sample");
    let points = draw_points(kind.cloud(n, scale), tok);
    write_points(out, &points)?;
    write_sidecar(
        out,
        Provenance::new(
            "sample",
            serde_json::json!({
                "kind": format!("{kind:?}").to_lowercase(),
                "n": n,
                "scale": scale,
                "seed": tok.seed,
                "index": tok.index,
            }),
        ),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let prov = Provenance::new("report", serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}

fn interleave(points: &[Point2]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}
