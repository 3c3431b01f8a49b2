//! Grow-to-fit policy: the integer bounding box of the transformed corners.

use crate::geom::{max4, min4, IRect, Quad, Rect};

/// `floor` of the minimum and `ceil` of the maximum on each axis.
pub fn adjust_bounds(quad: &Quad) -> IRect {
    let xs = quad.map(|p| p.x);
    let ys = quad.map(|p| p.y);
    IRect::enclosing(&Rect::new(min4(xs), min4(ys), max4(xs), max4(ys)))
}
