//! Destination bounds for transformed rectangles.
//!
//! Given a source rectangle and a 3×3 transform, compute the integer bounds
//! of the result under a resize policy: keep the source (`Clip`), grow to the
//! transformed bounding box (`Adjust`), or crop to the largest axis-aligned
//! rectangle inside the transformed quad (`Crop`, `CropWithAspect`).
//!
//! API Policy
//! - Workspace-internal crate; the CLI is the only consumer outside tests.
//! - Nothing panics on bad geometry. Degraded results carry a `Fallback`.

pub mod geom;
pub mod matrix;
pub mod placement;
pub mod resize;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{BoundsCfg, IRect, Point, Quad, Rect};
pub use resize::{compute_boundary, resolve_boundary, Fallback, ResizePolicy, Resolution};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{BoundsCfg, IRect, Point, Quad, Rect};
    pub use crate::matrix::{
        identity, perspective, rotate, rotate_about, scale, shear_x, shear_y, transform_point,
        transform_quad, translate,
    };
    pub use crate::placement::{place_transform, Placement, TransformDirection};
    pub use crate::resize::{
        compute_boundary, resolve_boundary, resolve_boundary_with_cfg, Fallback, ResizePolicy,
        Resolution,
    };
    pub use crate::sample::{draw_transform, ReplayToken, TransformCfg};
    pub use nalgebra::Matrix3;
}
