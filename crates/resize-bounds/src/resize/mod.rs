//! Destination bounds of a transformed rectangle under a resize policy.
//!
//! Purpose
//! - Map the four corners of a source rectangle through a 3×3 transform and
//!   turn them into integer destination bounds: unchanged (`Clip`), grown to
//!   fit (`Adjust`), or cropped to the largest inscribed rectangle (`Crop`,
//!   `CropWithAspect`).
//!
//! Failure policy
//! - Nothing here fails hard. A non-finite transform degrades to `Clip`, and
//!   a crop with no valid rectangle keeps the empty-rectangle result. Both are
//!   reported through `Resolution::fallback`.
//! - Every result has at least one pixel of extent on each axis.
//!
//! Code cross-refs: `crop::crop_search`, `adjust::adjust_bounds`, `matrix::transform_quad`

mod adjust;
mod crop;
mod search;

pub use adjust::adjust_bounds;
pub use crop::{crop_search, normalize, CropSearch};
pub use search::{
    aspect_family, candidate, three_point, three_point_corner, three_point_triangle, two_point,
    BestRect,
};

use nalgebra::Matrix3;

use crate::geom::{BoundsCfg, IRect, Quad, Rect};
use crate::matrix::transform_quad;

/// How the destination bounds relate to the transformed content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizePolicy {
    /// Keep the source bounds.
    Clip,
    /// Smallest integer rectangle containing the transformed corners.
    Adjust,
    /// Largest axis-aligned rectangle inside the transformed content.
    Crop,
    /// As `Crop`, keeping the source width/height ratio.
    CropWithAspect,
}

impl ResizePolicy {
    pub const ALL: [ResizePolicy; 4] = [
        ResizePolicy::Clip,
        ResizePolicy::Adjust,
        ResizePolicy::Crop,
        ResizePolicy::CropWithAspect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResizePolicy::Clip => "clip",
            ResizePolicy::Adjust => "adjust",
            ResizePolicy::Crop => "crop",
            ResizePolicy::CropWithAspect => "crop-with-aspect",
        }
    }
}

/// Why a resolution is not the policy's regular answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// A transformed corner was NaN or infinite; the source bounds were kept.
    NonFiniteTransform,
    /// No candidate rectangle fit inside the transformed quad.
    NoInscribedRect,
}

impl Fallback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fallback::NonFiniteTransform => "non-finite-transform",
            Fallback::NoInscribedRect => "no-inscribed-rect",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Destination bounds; `x2 > x1` and `y2 > y1`.
    pub bounds: IRect,
    pub fallback: Option<Fallback>,
}

/// Resolve with default tolerances.
pub fn resolve_boundary(inv: &Matrix3<f64>, policy: ResizePolicy, src: &Rect) -> Resolution {
    resolve_boundary_with_cfg(inv, policy, src, &BoundsCfg::default())
}

/// Destination bounds of `src` mapped through `inv` under `policy`.
///
/// `inv` maps source coordinates into destination space; it is used as given.
pub fn resolve_boundary_with_cfg(
    inv: &Matrix3<f64>,
    policy: ResizePolicy,
    src: &Rect,
    cfg: &BoundsCfg,
) -> Resolution {
    let clip = IRect::enclosing(src);
    if policy == ResizePolicy::Clip {
        return Resolution {
            bounds: clip.with_min_extent(),
            fallback: None,
        };
    }

    let quad = transform_quad(inv, src);
    if !quad.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
        tracing::warn!(
            policy = policy.as_str(),
            ?quad,
            "transform produced non-finite corners; keeping source bounds"
        );
        return Resolution {
            bounds: clip.with_min_extent(),
            fallback: Some(Fallback::NonFiniteTransform),
        };
    }

    let (bounds, fallback) = match policy {
        ResizePolicy::Clip => (clip, None),
        ResizePolicy::Adjust => (adjust_bounds(&quad), None),
        ResizePolicy::Crop => crop_bounds(&quad, 0.0, cfg),
        ResizePolicy::CropWithAspect => {
            let aspect = src.width() / src.height();
            if aspect.is_finite() && aspect > 0.0 {
                crop_bounds(&quad, aspect, cfg)
            } else {
                tracing::debug!(aspect, "degenerate source aspect; cropping unconstrained");
                crop_bounds(&quad, 0.0, cfg)
            }
        }
    };

    let bounds = bounds.with_min_extent();
    tracing::trace!(
        policy = policy.as_str(),
        x1 = bounds.x1,
        y1 = bounds.y1,
        x2 = bounds.x2,
        y2 = bounds.y2,
        "resolved boundary"
    );
    Resolution { bounds, fallback }
}

fn crop_bounds(quad: &Quad, aspect: f64, cfg: &BoundsCfg) -> (IRect, Option<Fallback>) {
    let search = crop_search(quad, aspect, cfg);
    let fallback = search.best.is_none().then_some(Fallback::NoInscribedRect);
    (search.bounds(), fallback)
}

/// Tuple form: `(x1, y1, x2, y2)` for source corners `(u1, v1)`-`(u2, v2)`.
pub fn compute_boundary(
    inv: &Matrix3<f64>,
    policy: ResizePolicy,
    u1: f64,
    v1: f64,
    u2: f64,
    v2: f64,
) -> (i32, i32, i32, i32) {
    resolve_boundary(inv, policy, &Rect::new(u1, v1, u2, v2))
        .bounds
        .as_tuple()
}
