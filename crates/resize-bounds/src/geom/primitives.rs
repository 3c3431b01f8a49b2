//! Line intersections and point-in-quad predicates.
//!
//! Lines are handled in the implicit form `A·x + B·y = C` with
//! `A = b.y − a.y`, `B = a.x − b.x`. Intersections fail only on an exactly
//! zero determinant; callers feed integer-valued (floored) corners, so the
//! exact test is stable.
//!
//! References
//! - Code cross-refs: `types::{Point, Quad, BoundsCfg}`, `hull::order_hull`

use super::types::{BoundsCfg, Point, Quad};

#[inline]
pub fn min4(v: [f64; 4]) -> f64 {
    v[0].min(v[1]).min(v[2].min(v[3]))
}

#[inline]
pub fn max4(v: [f64; 4]) -> f64 {
    v[0].max(v[1]).max(v[2].max(v[3]))
}

/// The four edges of a quad as `(start, end)` pairs, closing back to the first corner.
#[inline]
pub fn edges(poly: &Quad) -> [(Point, Point); 4] {
    [
        (poly[0], poly[1]),
        (poly[1], poly[2]),
        (poly[2], poly[3]),
        (poly[3], poly[0]),
    ]
}

/// Intersection of the line through `a`,`b` with the line through `c`,`d` (Cramer's rule).
///
/// `None` iff the determinant is exactly `0.0` (parallel or coincident lines).
pub fn intersect(a: Point, b: Point, c: Point, d: Point) -> Option<Point> {
    let a1 = b.y - a.y;
    let b1 = a.x - b.x;
    let c1 = a1 * a.x + b1 * a.y;

    let a2 = d.y - c.y;
    let b2 = c.x - d.x;
    let c2 = a2 * c.x + b2 * c.y;

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }
    Some(Point::new(
        (b2 * c1 - b1 * c2) / det,
        (a1 * c2 - a2 * c1) / det,
    ))
}

/// Intersection of line `a`,`b` with the line through `c` that keeps `c.x` fixed.
#[inline]
pub fn intersect_x(a: Point, b: Point, c: Point) -> Option<Point> {
    intersect(a, b, c, c + Point::new(0.0, 1.0))
}

/// Intersection of line `a`,`b` with the line through `c` that keeps `c.y` fixed.
#[inline]
pub fn intersect_y(a: Point, b: Point, c: Point) -> Option<Point> {
    intersect(a, b, c, c + Point::new(1.0, 0.0))
}

/// Whether `p` lies on one of the four edges (endpoints included).
pub fn point_on_border_eps(poly: &Quad, p: Point, eps: f64) -> bool {
    edges(poly).iter().any(|&(a, b)| {
        let a1 = b.y - a.y;
        let b1 = a.x - b.x;
        let c1 = a1 * a.x + b1 * a.y;
        let c2 = a1 * p.x + b1 * p.y;
        (c1 - c2).abs() < eps
            && a.x.min(b.x) <= p.x
            && a.x.max(b.x) >= p.x
            && a.y.min(b.y) <= p.y
            && a.y.max(b.y) >= p.y
    })
}

/// `point_on_border_eps` with the default tolerance.
#[inline]
pub fn point_on_border(poly: &Quad, p: Point) -> bool {
    point_on_border_eps(poly, p, BoundsCfg::default().eps_border)
}

/// Even-odd ray casting; points on the border always count as inside.
pub fn in_poly_eps(poly: &Quad, p: Point, eps: f64) -> bool {
    let mut crossings = 0u32;
    for (p1, p2) in edges(poly) {
        if p.y > p1.y.min(p2.y)
            && p.y <= p1.y.max(p2.y)
            && p.x <= p1.x.max(p2.x)
            && p1.y != p2.y
        {
            let xinters = (p.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
            if p1.x == p2.x || p.x <= xinters {
                crossings += 1;
            }
        }
    }
    if point_on_border_eps(poly, p, eps) {
        return true;
    }
    crossings % 2 != 0
}

/// `in_poly_eps` with the default tolerance.
#[inline]
pub fn in_poly(poly: &Quad, p: Point) -> bool {
    in_poly_eps(poly, p, BoundsCfg::default().eps_border)
}
