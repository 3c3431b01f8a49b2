use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use resize_bounds::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

use report::{BoundaryReport, Input, PlacementReport, VersionReport};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Destination bounds of transformed rectangles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Resolve the bounds of a rectangle under an explicit matrix
    Boundary {
        /// Row-major 3×3 matrix: a,b,c,d,e,f,g,h,i
        #[arg(long, allow_hyphen_values = true)]
        matrix: String,
        /// Source rectangle: u1,v1,u2,v2
        #[arg(long, allow_hyphen_values = true)]
        rect: String,
        #[arg(long, value_enum, default_value_t = PolicyArg::Adjust)]
        policy: PolicyArg,
        /// Also write the JSON report here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Resolve the bounds of a rotated rectangle
    Rotate {
        #[arg(long, allow_hyphen_values = true)]
        degrees: f64,
        /// Pivot cx,cy; defaults to the rectangle center
        #[arg(long, allow_hyphen_values = true)]
        center: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        rect: String,
        #[arg(long, value_enum, default_value_t = PolicyArg::Adjust)]
        policy: PolicyArg,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Place a transformed buffer: destination offset, size and sampling matrix
    Place {
        #[arg(long, allow_hyphen_values = true)]
        matrix: String,
        /// Buffer offset x,y
        #[arg(long, allow_hyphen_values = true, default_value = "0,0")]
        offset: String,
        /// Buffer size w,h
        #[arg(long)]
        size: String,
        #[arg(long, value_enum, default_value_t = DirectionArg::Forward)]
        direction: DirectionArg,
        #[arg(long, value_enum, default_value_t = PolicyArg::Adjust)]
        policy: PolicyArg,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print version and code revision
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Clip,
    Adjust,
    Crop,
    CropWithAspect,
}

impl From<PolicyArg> for ResizePolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Clip => ResizePolicy::Clip,
            PolicyArg::Adjust => ResizePolicy::Adjust,
            PolicyArg::Crop => ResizePolicy::Crop,
            PolicyArg::CropWithAspect => ResizePolicy::CropWithAspect,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    Forward,
    Backward,
}

impl From<DirectionArg> for TransformDirection {
    fn from(d: DirectionArg) -> Self {
        match d {
            DirectionArg::Forward => TransformDirection::Forward,
            DirectionArg::Backward => TransformDirection::Backward,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Boundary {
            matrix,
            rect,
            policy,
            out,
        } => boundary(&matrix, &rect, policy.into(), out),
        Action::Rotate {
            degrees,
            center,
            rect,
            policy,
            out,
        } => rotate(degrees, center.as_deref(), &rect, policy.into(), out),
        Action::Place {
            matrix,
            offset,
            size,
            direction,
            policy,
            out,
        } => place(&matrix, &offset, &size, direction.into(), policy.into(), out),
        Action::Report => version(),
    }
}

fn boundary(matrix: &str, rect: &str, policy: ResizePolicy, out: Option<PathBuf>) -> Result<()> {
    let m = parse_matrix(matrix)?;
    let src = parse_rect(rect)?;
    tracing::info!(policy = policy.as_str(), matrix, rect, "boundary");
    emit(&resolve_report(&m, &src, policy), out)
}

fn rotate(
    degrees: f64,
    center: Option<&str>,
    rect: &str,
    policy: ResizePolicy,
    out: Option<PathBuf>,
) -> Result<()> {
    let src = parse_rect(rect)?;
    let m = rotation_matrix(degrees, center, &src)?;
    tracing::info!(policy = policy.as_str(), degrees, center, rect, "rotate");
    emit(&resolve_report(&m, &src, policy), out)
}

fn place(
    matrix: &str,
    offset: &str,
    size: &str,
    direction: TransformDirection,
    policy: ResizePolicy,
    out: Option<PathBuf>,
) -> Result<()> {
    let m = parse_matrix(matrix)?;
    let [x, y] = parse_ints::<2>(offset, "offset")?;
    let [w, h] = parse_ints::<2>(size, "size")?;
    if w <= 0 || h <= 0 {
        bail!("size must be positive, got {w}×{h}");
    }
    tracing::info!(
        policy = policy.as_str(),
        direction = direction.as_str(),
        matrix,
        offset,
        size,
        "place"
    );
    let Some(pl) = place_transform(&m, direction, policy, (x, y), (w, h)) else {
        bail!("matrix is singular and cannot be inverted for a backward placement");
    };
    let input = Input {
        matrix: row_major(&pl.matrix),
        rect: [x as f64, y as f64, (x + w) as f64, (y + h) as f64],
    };
    let doc = PlacementReport::new(policy.as_str(), direction.as_str(), input, &pl);
    emit(&doc, out)
}

fn version() -> Result<()> {
    let doc = VersionReport {
        crate_version: resize_bounds::VERSION,
        code_rev: report::current_git_rev(),
        policies: ResizePolicy::ALL.iter().map(|p| p.as_str()).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn resolve_report(m: &Matrix3<f64>, src: &Rect, policy: ResizePolicy) -> BoundaryReport {
    let res = resolve_boundary(m, policy, src);
    if let Some(f) = res.fallback {
        tracing::warn!(fallback = f.as_str(), "boundary resolved with fallback");
    }
    let input = Input {
        matrix: row_major(m),
        rect: [src.min.x, src.min.y, src.max.x, src.max.y],
    };
    BoundaryReport::new(policy.as_str(), input, &res)
}

/// Print `doc` to stdout and, with `out`, write it to that file too.
fn emit<T: Serialize>(doc: &T, out: Option<PathBuf>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(doc)?);
    if let Some(path) = out {
        let written = report::write_report(&path, doc)?;
        tracing::info!(out = %written.display(), "wrote report");
    }
    Ok(())
}

fn rotation_matrix(degrees: f64, center: Option<&str>, src: &Rect) -> Result<Matrix3<f64>> {
    if !degrees.is_finite() {
        bail!("degrees must be finite, got {degrees}");
    }
    let (cx, cy) = match center {
        Some(s) => {
            let [cx, cy] = parse_floats::<2>(s, "center")?;
            (cx, cy)
        }
        None => {
            let c = (src.min + src.max) / 2.0;
            (c.x, c.y)
        }
    };
    Ok(rotate_about(degrees.to_radians(), cx, cy))
}

fn row_major(m: &Matrix3<f64>) -> [f64; 9] {
    std::array::from_fn(|k| m[(k / 3, k % 3)])
}

fn parse_matrix(s: &str) -> Result<Matrix3<f64>> {
    let v = parse_floats::<9>(s, "matrix")?;
    Ok(Matrix3::from_row_slice(&v))
}

fn parse_rect(s: &str) -> Result<Rect> {
    let [u1, v1, u2, v2] = parse_floats::<4>(s, "rect")?;
    if !(u1.is_finite() && v1.is_finite() && u2.is_finite() && v2.is_finite()) {
        bail!("rect must be finite, got {s:?}");
    }
    if u2 < u1 || v2 < v1 {
        bail!("rect must satisfy u1 <= u2 and v1 <= v2, got {s:?}");
    }
    Ok(Rect::new(u1, v1, u2, v2))
}

fn parse_floats<const N: usize>(s: &str, what: &str) -> Result<[f64; N]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        bail!("{what} needs {N} comma-separated numbers, got {}", parts.len());
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .with_context(|| format!("parsing {what} entry {part:?}"))?;
    }
    Ok(out)
}

fn parse_ints<const N: usize>(s: &str, what: &str) -> Result<[i32; N]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        bail!("{what} needs {N} comma-separated integers, got {}", parts.len());
    }
    let mut out = [0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .with_context(|| format!("parsing {what} entry {part:?}"))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_matrix_row_major() {
        let m = parse_matrix("1, 2, 3, 4, 5, 6, 7, 8, 9").unwrap();
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(2, 0)], 7.0);
        assert_eq!(row_major(&m), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_matrix("1,2,3").is_err());
        assert!(parse_rect("0,0,x,1").is_err());
        assert!(parse_rect("10,0,0,10").is_err());
        assert!(parse_ints::<2>("1.5,2", "offset").is_err());
    }

    #[test]
    fn rotation_defaults_to_rect_center() {
        let src = parse_rect("0,0,200,100").unwrap();
        let m = rotation_matrix(90.0, None, &src).unwrap();
        let c = transform_point(&m, Point::new(100.0, 50.0));
        assert!((c - Point::new(100.0, 50.0)).norm() < 1e-9);
        assert!(rotation_matrix(f64::NAN, None, &src).is_err());
    }

    #[test]
    fn policy_names_match_library() {
        for (arg, name) in [
            (PolicyArg::Clip, "clip"),
            (PolicyArg::Adjust, "adjust"),
            (PolicyArg::Crop, "crop"),
            (PolicyArg::CropWithAspect, "crop-with-aspect"),
        ] {
            let value = arg.to_possible_value().unwrap();
            assert_eq!(value.get_name(), name);
            assert_eq!(ResizePolicy::from(arg).as_str(), name);
        }
    }

    #[test]
    fn parses_subcommands() {
        let cmd = Cmd::try_parse_from([
            "cli",
            "boundary",
            "--matrix",
            "-1,0,100,0,-1,100,0,0,1",
            "--rect",
            "0,0,100,100",
            "--policy",
            "crop-with-aspect",
        ])
        .unwrap();
        match cmd.action {
            Action::Boundary { policy, out, .. } => {
                assert_eq!(policy, PolicyArg::CropWithAspect);
                assert!(out.is_none());
            }
            _ => panic!("expected boundary"),
        }
        assert!(Cmd::try_parse_from(["cli", "place", "--matrix", "1,0,0,0,1,0,0,0,1"]).is_err());
    }

    #[test]
    fn reflection_report_keeps_square() {
        let m = parse_matrix("-1,0,100,0,-1,100,0,0,1").unwrap();
        let src = parse_rect("0,0,100,100").unwrap();
        let doc = resolve_report(&m, &src, ResizePolicy::Crop);
        assert_eq!(doc.bounds, [0, 0, 100, 100]);
        assert_eq!(doc.fallback, None);
    }
}
