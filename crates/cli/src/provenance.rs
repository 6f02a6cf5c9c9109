//! `<stem>.provenance.json` sidecars next to every artifact the CLI writes.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// What produced an artifact: code revision, library version, command and
/// its parameters.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub grahull_version: &'static str,
    pub command: &'static str,
    pub params: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    callsite: Option<Callsite>,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            code_rev: code_revision(),
            grahull_version: grahull::VERSION,
            command,
            params,
            callsite: None,
            outputs: Vec::new(),
        }
    }
}

/// Write the sidecar for `artifact`, stamped with the caller's location.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, mut prov: Provenance) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let loc = Location::caller();
    prov.callsite = Some(Callsite {
        file: loc.file(),
        line: loc.line(),
    });
    prov.outputs.push(artifact.to_string_lossy().into_owned());

    let path = sidecar_path(artifact);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating sidecar dir {}", parent.display()))?;
    }
    fs::write(&path, serde_json::to_vec_pretty(&prov)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn code_revision() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .into_iter()
        .chain(std::env::var("GIT_COMMIT").ok())
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout)
        .ok()
        .map(|s| s.trim().to_owned())
}
