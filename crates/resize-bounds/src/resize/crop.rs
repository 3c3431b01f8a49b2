//! Crop policy: largest axis-aligned rectangle inside the transformed quad.
//!
//! Pipeline
//! - Floor the corners and shift them into the first quadrant (by twice the
//!   negative extent, so no coordinate sits at zero).
//! - Order them into hull winding (`geom::order_hull`).
//! - Fold every candidate family over the four hull rotations into a
//!   `BestRect`; the aspect-constrained search uses only the aspect family.
//! - Round the winner inward and undo the shift.

use super::search::{
    aspect_family, three_point, three_point_corner, three_point_triangle, two_point, BestRect,
};
use crate::geom::{min4, order_hull, BoundsCfg, IRect, Point, Quad, Rect};

/// Outcome of a crop search, in the shifted coordinates it ran in.
#[derive(Clone, Copy, Debug)]
pub struct CropSearch {
    /// Floored, shifted and ordered corners the candidates were validated against.
    pub hull: Quad,
    /// Translation applied before the search.
    pub shift: Point,
    /// Maximum-area valid rectangle, `None` if no candidate fit.
    pub best: Option<Rect>,
}

impl CropSearch {
    /// Integer bounds in the caller's coordinates.
    ///
    /// Without a solution the empty rectangle at the shifted origin is used.
    pub fn bounds(&self) -> IRect {
        let r = self.best.unwrap_or_else(Rect::zero);
        IRect::new(
            ((r.min.x + 0.5).floor() - self.shift.x) as i32,
            ((r.min.y + 0.5).floor() - self.shift.y) as i32,
            ((r.max.x - 0.5).ceil() - self.shift.x) as i32,
            ((r.max.y - 0.5).ceil() - self.shift.y) as i32,
        )
    }
}

/// Floor the corners and move them into the first quadrant; returns `(points, shift)`.
pub fn normalize(quad: &Quad) -> (Quad, Point) {
    let floored = quad.map(|p| Point::new(p.x.floor(), p.y.floor()));
    let lo = Point::new(
        min4(floored.map(|p| p.x)).min(0.0),
        min4(floored.map(|p| p.y)).min(0.0),
    );
    let shift = -lo * 2.0;
    (floored.map(|p| p + shift), shift)
}

/// Search the maximum-area rectangle; `aspect == 0` means unconstrained.
pub fn crop_search(quad: &Quad, aspect: f64, cfg: &BoundsCfg) -> CropSearch {
    let (pts, shift) = normalize(quad);
    let hull = order_hull(pts);
    let mut best = BestRect::new();

    if aspect != 0.0 {
        for p in 0..4 {
            best.offer_all(aspect_family(&hull, p, aspect, cfg));
        }
    } else {
        for p in 0..4 {
            best.offer_all(three_point(&hull, p, cfg));
            best.offer_all(three_point_corner(&hull, p, cfg));
            best.offer_all(two_point(&hull, p, cfg));
            best.offer_all(three_point_triangle(&hull, p, cfg));
        }
    }

    if best.get().is_none() {
        tracing::debug!(?hull, aspect, "crop search found no inscribed rectangle");
    }
    CropSearch {
        hull,
        shift,
        best: best.get(),
    }
}
