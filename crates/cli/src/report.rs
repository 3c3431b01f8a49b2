use anyhow::{Context, Result};
use resize_bounds::placement::Placement;
use resize_bounds::{IRect, Resolution};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What the caller asked for, echoed back next to the answer.
#[derive(Debug, Serialize)]
pub struct Input {
    /// Row-major 3×3 matrix as applied (after inversion for backward placements).
    pub matrix: [f64; 9],
    /// Source rectangle `[u1, v1, u2, v2]`.
    pub rect: [f64; 4],
}

#[derive(Debug, Serialize)]
pub struct BoundaryReport {
    pub policy: &'static str,
    pub input: Input,
    pub bounds: [i32; 4],
    pub width: i32,
    pub height: i32,
    pub fallback: Option<&'static str>,
    pub code_rev: String,
}

impl BoundaryReport {
    pub fn new(policy: &'static str, input: Input, res: &Resolution) -> Self {
        let IRect { x1, y1, x2, y2 } = res.bounds;
        Self {
            policy,
            input,
            bounds: [x1, y1, x2, y2],
            width: res.bounds.width(),
            height: res.bounds.height(),
            fallback: res.fallback.map(|f| f.as_str()),
            code_rev: current_git_rev(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlacementReport {
    pub policy: &'static str,
    pub direction: &'static str,
    pub input: Input,
    pub offset: [i32; 2],
    pub size: [i32; 2],
    /// Row-major buffer-local sampling matrix.
    pub sample_matrix: [f64; 9],
    pub fallback: Option<&'static str>,
    pub code_rev: String,
}

impl PlacementReport {
    pub fn new(
        policy: &'static str,
        direction: &'static str,
        input: Input,
        pl: &Placement,
    ) -> Self {
        let m = &pl.sample_matrix;
        Self {
            policy,
            direction,
            input,
            offset: [pl.offset.0, pl.offset.1],
            size: [pl.size.0, pl.size.1],
            sample_matrix: std::array::from_fn(|k| m[(k / 3, k % 3)]),
            fallback: pl.fallback.map(|f| f.as_str()),
            code_rev: current_git_rev(),
        }
    }
}

/// Version block printed by `cli report`.
#[derive(Debug, Serialize)]
pub struct VersionReport {
    pub crate_version: &'static str,
    pub code_rev: String,
    pub policies: Vec<&'static str>,
}

/// Write `doc` as pretty JSON to `path`, creating parent directories.
pub fn write_report<P: AsRef<Path>, T: Serialize>(path: P, doc: &T) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
