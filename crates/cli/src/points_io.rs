use anyhow::{bail, Context, Result};
use grahull::api::Point2;
use nalgebra::Vector2;
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Read points from `.csv`/`.parquet` (columns `x`, `y`) or `.json` (`[[x, y], ...]`).
pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    match extension(path).as_deref() {
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()?;
            frame_points(lf).with_context(|| format!("reading {}", path.display()))
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())?;
            frame_points(lf).with_context(|| format!("reading {}", path.display()))
        }
        Some("json") => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let xy: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(xy.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
        }
        _ => bail!("unsupported input {} (expected .csv, .parquet or .json)", path.display()),
    }
}

/// Write points as `.csv` (columns `x`, `y`) or `.json` (`[[x, y], ...]`).
pub fn write_points(path: &Path, points: &[Point2]) -> Result<()> {
    ensure_parent(path)?;
    match extension(path).as_deref() {
        Some("csv") => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            let mut df = df!("x" => xs, "y" => ys)?;
            let file =
                fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(file).finish(&mut df)?;
            Ok(())
        }
        Some("json") => {
            fs::write(path, serde_json::to_vec_pretty(&to_pairs(points))?)
                .with_context(|| format!("writing {}", path.display()))
        }
        _ => bail!("unsupported output {} (expected .csv or .json)", path.display()),
    }
}

pub fn to_pairs(points: &[Point2]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn frame_points(lf: LazyFrame) -> Result<Vec<Point2>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    tracing::debug!(rows = df.height(), "input_frame");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Vector2::new(x, y)),
            _ => bail!("row {row}: missing coordinate"),
        }
    }
    Ok(out)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}
