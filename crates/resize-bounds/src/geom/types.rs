//! Basic 2D value types and tolerances for the boundary engine.
//!
//! - `Point`/`Quad`: a corner and the fixed set of four transformed corners.
//! - `Rect`: axis-aligned `f64` rectangle (candidate and source bounds).
//! - `IRect`: integer destination bounds handed back to callers.
//! - `BoundsCfg`: centralizes the epsilon used by the border checks.

use nalgebra::Vector2;

/// 2D point in double precision.
pub type Point = Vector2<f64>;

/// Exactly four corners. Always four: no collinear deduplication happens anywhere.
pub type Quad = [Point; 4];

/// Geometry configuration (tolerances).
///
/// Parallel lines have no tolerance: `intersect` compares the determinant with zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsCfg {
    /// Absolute tolerance on `A·x + B·y` when testing whether a point lies on an edge.
    pub eps_border: f64,
}

impl Default for BoundsCfg {
    fn default() -> Self {
        Self { eps_border: 1e-8 }
    }
}

/// Axis-aligned rectangle with `min` at the top-left and `max` at the bottom-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// The empty rectangle at the origin; the crop search result when nothing fits.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min: Point::new(x1, y1),
            max: Point::new(x2, y2),
        }
    }

    /// Smallest rectangle containing every point of `pts`.
    ///
    /// Returns `None` for an empty slice.
    pub fn bounding(pts: &[Point]) -> Option<Self> {
        let (first, rest) = pts.split_first()?;
        let mut r = Rect {
            min: *first,
            max: *first,
        };
        for p in rest {
            r.min.x = r.min.x.min(p.x);
            r.min.y = r.min.y.min(p.y);
            r.max.x = r.max.x.max(p.x);
            r.max.y = r.max.y.max(p.y);
        }
        Some(r)
    }

    /// Corners `a=(minx,miny)`, `b=(maxx,miny)`, `c=(maxx,maxy)`, `d=(minx,maxy)`.
    #[inline]
    pub fn corners(&self) -> Quad {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Integer destination bounds; `x2`/`y2` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl IRect {
    #[inline]
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Integer bounds of `r` using floor for the top-left and ceil for the bottom-right.
    #[inline]
    pub fn enclosing(r: &Rect) -> Self {
        Self::new(
            r.min.x.floor() as i32,
            r.min.y.floor() as i32,
            r.max.x.ceil() as i32,
            r.max.y.ceil() as i32,
        )
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    #[inline]
    pub fn as_tuple(&self) -> (i32, i32, i32, i32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Widen a zero-width or zero-height result to one pixel.
    #[inline]
    pub fn with_min_extent(mut self) -> Self {
        if self.x1 == self.x2 {
            self.x2 += 1;
        }
        if self.y1 == self.y2 {
            self.y2 += 1;
        }
        self
    }
}
