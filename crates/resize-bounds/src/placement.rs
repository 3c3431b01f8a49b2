//! Placing a transformed buffer in destination space.
//!
//! Purpose
//! - Given a buffer at `offset` with `size`, a transform and a policy, return
//!   where the result lives and the matrix that samples it: buffer-local
//!   source pixels to buffer-local destination pixels.
//!
//! Model
//! - `Backward` transforms are inverted first; a singular matrix has no placement.
//! - `sample_matrix = translate(−x1, −y1) · m · translate(u1, v1)`.
//!
//! Code cross-refs: `resize::resolve_boundary`

use nalgebra::Matrix3;

use crate::geom::{IRect, Rect};
use crate::matrix::translate;
use crate::resize::{resolve_boundary, Fallback, ResizePolicy};

/// Whether the matrix maps source to destination, or destination to source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformDirection {
    Forward,
    Backward,
}

impl TransformDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformDirection::Forward => "forward",
            TransformDirection::Backward => "backward",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub bounds: IRect,
    /// Destination offset `(x1, y1)`.
    pub offset: (i32, i32),
    /// Destination size `(x2 − x1, y2 − y1)`.
    pub size: (i32, i32),
    /// Source-to-destination matrix as applied (inverted for `Backward`).
    pub matrix: Matrix3<f64>,
    pub sample_matrix: Matrix3<f64>,
    pub fallback: Option<Fallback>,
}

/// Destination placement of a `size` buffer at `offset` under `matrix`.
pub fn place_transform(
    matrix: &Matrix3<f64>,
    direction: TransformDirection,
    policy: ResizePolicy,
    offset: (i32, i32),
    size: (i32, i32),
) -> Option<Placement> {
    let m = match direction {
        TransformDirection::Forward => *matrix,
        TransformDirection::Backward => match matrix.try_inverse() {
            Some(inv) => inv,
            None => {
                tracing::debug!(?matrix, "backward transform is singular");
                return None;
            }
        },
    };

    let (u1, v1) = (offset.0 as f64, offset.1 as f64);
    let src = Rect::new(u1, v1, u1 + size.0 as f64, v1 + size.1 as f64);
    let res = resolve_boundary(&m, policy, &src);
    let b = res.bounds;
    let sample_matrix = translate(-(b.x1 as f64), -(b.y1 as f64)) * m * translate(u1, v1);

    tracing::debug!(
        direction = direction.as_str(),
        policy = policy.as_str(),
        x = b.x1,
        y = b.y1,
        w = b.width(),
        h = b.height(),
        "placed transform"
    );
    Some(Placement {
        bounds: b,
        offset: (b.x1, b.y1),
        size: (b.width(), b.height()),
        matrix: m,
        sample_matrix,
        fallback: res.fallback,
    })
}
