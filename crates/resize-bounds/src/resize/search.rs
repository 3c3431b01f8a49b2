//! Candidate-rectangle families for the crop search.
//!
//! Every family is a pure function of the ordered hull and a rotation index
//! `p` (which corner plays `a`; edges are a-b, b-c, c-d, d-a). It returns a
//! fixed-size array of validated candidates; the caller folds them into a
//! `BestRect`. A candidate is the bounding box of the points it was built
//! from, kept only if all four of its corners pass `in_poly`.
//!
//! References
//! - Code cross-refs: `geom::{intersect, intersect_x, intersect_y, in_poly_eps}`

use crate::geom::{in_poly_eps, intersect, intersect_x, intersect_y, BoundsCfg, Point, Quad, Rect};

type Cut = fn(Point, Point, Point) -> Option<Point>;

/// Maximum-area accumulator. Ties go to the later candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestRect {
    best: Option<Rect>,
}

impl BestRect {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn offer(&mut self, cand: Option<Rect>) {
        if let Some(r) = cand {
            if self.best.map_or(true, |b| b.area() <= r.area()) {
                self.best = Some(r);
            }
        }
    }

    pub fn offer_all<I: IntoIterator<Item = Option<Rect>>>(&mut self, cands: I) {
        for c in cands {
            self.offer(c);
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.best.map_or(0.0, |r| r.area())
    }

    #[inline]
    pub fn get(&self) -> Option<Rect> {
        self.best
    }
}

/// Bounding box of `pts`, if all its corners lie in `hull` (border included).
pub fn candidate(hull: &Quad, pts: &[Point], cfg: &BoundsCfg) -> Option<Rect> {
    let r = Rect::bounding(pts)?;
    r.corners()
        .iter()
        .all(|&c| in_poly_eps(hull, c, cfg.eps_border))
        .then_some(r)
}

#[inline]
fn rotation(hull: &Quad, p: usize) -> Quad {
    [hull[p % 4], hull[(p + 1) % 4], hull[(p + 2) % 4], hull[(p + 3) % 4]]
}

/// Axis-aligned walk from `a` across three edges; `i1` and `i3` span the rectangle.
pub fn three_point(hull: &Quad, p: usize, cfg: &BoundsCfg) -> [Option<Rect>; 4] {
    let [a, b, c, d] = rotation(hull, p);
    let walk = |f1: Cut,
                e1: (Point, Point),
                f2: Cut,
                e2: (Point, Point),
                f3: Cut,
                e3: (Point, Point)|
     -> Option<Rect> {
        let i1 = f1(e1.0, e1.1, a)?;
        let i2 = f2(e2.0, e2.1, i1)?;
        let i3 = f3(e3.0, e3.1, i2)?;
        candidate(hull, &[i3, i1], cfg)
    };
    [
        walk(intersect_x, (b, c), intersect_y, (c, d), intersect_x, (d, a)),
        walk(intersect_y, (b, c), intersect_x, (c, d), intersect_y, (d, a)),
        walk(intersect_x, (c, d), intersect_y, (b, c), intersect_x, (a, b)),
        walk(intersect_y, (c, d), intersect_x, (b, c), intersect_y, (a, b)),
    ]
}

/// Like `three_point`, but the rectangle keeps the hull corner `a` itself.
pub fn three_point_corner(hull: &Quad, p: usize, cfg: &BoundsCfg) -> [Option<Rect>; 4] {
    let [a, b, c, d] = rotation(hull, p);
    let walk = |f1: Cut, e1: (Point, Point), f2: Cut, e2: (Point, Point)| -> Option<Rect> {
        let i1 = f1(e1.0, e1.1, a)?;
        let i2 = f2(e2.0, e2.1, i1)?;
        candidate(hull, &[a, i1, i2], cfg)
    };
    [
        walk(intersect_x, (b, c), intersect_y, (c, d)),
        walk(intersect_y, (b, c), intersect_x, (c, d)),
        walk(intersect_x, (c, d), intersect_y, (b, c)),
        walk(intersect_y, (c, d), intersect_x, (b, c)),
    ]
}

/// Opposite hull corners, and the box from `c` to the midpoint of the two
/// axis-line crossings of edge a-b through `c`.
pub fn two_point(hull: &Quad, p: usize, cfg: &BoundsCfg) -> [Option<Rect>; 3] {
    let [a, b, c, d] = rotation(hull, p);
    let across = match (intersect_x(a, b, c), intersect_y(a, b, c)) {
        (Some(i1), Some(i2)) => candidate(hull, &[c, (i1 + i2) / 2.0], cfg),
        _ => None,
    };
    [
        candidate(hull, &[a, c], cfg),
        candidate(hull, &[b, d], cfg),
        across,
    ]
}

/// Anchored at the midpoint of edge a-b: one axis line through it meets b-c,
/// the other meets d-a.
pub fn three_point_triangle(hull: &Quad, p: usize, cfg: &BoundsCfg) -> [Option<Rect>; 2] {
    let [a, b, c, d] = rotation(hull, p);
    let mid = (a + b) / 2.0;
    let reach = |f1: Cut, f2: Cut| -> Option<Rect> {
        let i1 = f1(b, c, mid)?;
        let i2 = f2(d, a, mid)?;
        candidate(hull, &[mid, i1, i2], cfg)
    };
    [reach(intersect_x, intersect_y), reach(intersect_y, intersect_x)]
}

/// Fixed-aspect construction: from the point of b-c straight above/below `a`,
/// follow the diagonals `(±aspect, 1)` to the other edges.
pub fn aspect_family(hull: &Quad, p: usize, aspect: f64, cfg: &BoundsCfg) -> [Option<Rect>; 6] {
    let [a, b, c, d] = rotation(hull, p);
    let mut out = [None; 6];
    let Some(i1) = intersect_x(b, c, a) else {
        return out;
    };
    let mut k = 0;
    for sign in [1.0, -1.0] {
        let i2 = Point::new(i1.x + sign * aspect, i1.y + 1.0);
        for (e0, e1) in [(d, a), (a, b), (c, d)] {
            out[k] = intersect(e0, e1, i1, i2).and_then(|i3| candidate(hull, &[i1, i3], cfg));
            k += 1;
        }
    }
    out
}
