//! Fixed-size 2D geometry for transformed image bounds.
//!
//! Purpose
//! - Value types for corners and rectangles (`Point`, `Quad`, `Rect`, `IRect`).
//! - Exact line intersections and border-inclusive point-in-quad tests.
//! - Hull ordering of the four transformed corners.
//!
//! Everything works on `[Point; 4]`; nothing here allocates.

mod hull;
mod primitives;
mod types;

pub use hull::order_hull;
pub use primitives::{
    edges, in_poly, in_poly_eps, intersect, intersect_x, intersect_y, max4, min4,
    point_on_border, point_on_border_eps,
};
pub use types::{BoundsCfg, IRect, Point, Quad, Rect};

#[cfg(test)]
mod tests;
