//! Homogeneous 3×3 transform helpers.
//!
//! Builders return plain `Matrix3<f64>` values; compose with `*` where the
//! right-most factor is applied first (`rotate_about` = T(c)·R·T(−c)).
//! Points are column vectors `(x, y, 1)`.

use nalgebra::Matrix3;

use crate::geom::{Point, Quad, Rect};

#[inline]
pub fn identity() -> Matrix3<f64> {
    Matrix3::identity()
}

#[inline]
pub fn translate(tx: f64, ty: f64) -> Matrix3<f64> {
    Matrix3::new(1.0, 0.0, tx, 0.0, 1.0, ty, 0.0, 0.0, 1.0)
}

#[inline]
pub fn scale(sx: f64, sy: f64) -> Matrix3<f64> {
    Matrix3::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0)
}

/// Rotation about the origin by `angle` radians (counter-clockwise in y-up axes).
#[inline]
pub fn rotate(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
}

pub fn rotate_about(angle: f64, cx: f64, cy: f64) -> Matrix3<f64> {
    translate(cx, cy) * rotate(angle) * translate(-cx, -cy)
}

/// `x' = x + amount·y`
#[inline]
pub fn shear_x(amount: f64) -> Matrix3<f64> {
    Matrix3::new(1.0, amount, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
}

/// `y' = y + amount·x`
#[inline]
pub fn shear_y(amount: f64) -> Matrix3<f64> {
    Matrix3::new(1.0, 0.0, 0.0, amount, 1.0, 0.0, 0.0, 0.0, 1.0)
}

/// Identity with a perspective bottom row `(px, py, 1)`.
#[inline]
pub fn perspective(px: f64, py: f64) -> Matrix3<f64> {
    Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, px, py, 1.0)
}

/// Apply `m` to `p` with a homogeneous divide. A zero weight is treated as 1.
pub fn transform_point(m: &Matrix3<f64>, p: Point) -> Point {
    let w = m[(2, 0)] * p.x + m[(2, 1)] * p.y + m[(2, 2)];
    let w = if w == 0.0 { 1.0 } else { 1.0 / w };
    Point::new(
        (m[(0, 0)] * p.x + m[(0, 1)] * p.y + m[(0, 2)]) * w,
        (m[(1, 0)] * p.x + m[(1, 1)] * p.y + m[(1, 2)]) * w,
    )
}

/// Transformed corners of `src` in the order `(u1,v1) (u2,v1) (u1,v2) (u2,v2)`.
pub fn transform_quad(m: &Matrix3<f64>, src: &Rect) -> Quad {
    [
        transform_point(m, src.min),
        transform_point(m, Point::new(src.max.x, src.min.y)),
        transform_point(m, Point::new(src.min.x, src.max.y)),
        transform_point(m, src.max),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: Point, b: Point) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn rotate_about_center_fixes_center() {
        let m = rotate_about(0.7, 30.0, -12.0);
        assert!(close(transform_point(&m, Point::new(30.0, -12.0)), Point::new(30.0, -12.0)));
        let q = transform_point(&rotate(FRAC_PI_2), Point::new(1.0, 0.0));
        assert!(close(q, Point::new(0.0, 1.0)));
    }

    #[test]
    fn shears_and_translate() {
        let m = translate(5.0, -1.0) * shear_x(0.5);
        assert_eq!(transform_point(&m, Point::new(2.0, 4.0)), Point::new(9.0, 3.0));
        let m = shear_y(2.0);
        assert_eq!(transform_point(&m, Point::new(1.0, 1.0)), Point::new(1.0, 3.0));
    }

    #[test]
    fn perspective_divides_and_zero_weight_is_one() {
        let m = perspective(0.01, 0.0);
        assert_eq!(transform_point(&m, Point::new(100.0, 50.0)), Point::new(50.0, 25.0));
        // w = 1 - 1 = 0 at x = 100: the point passes through undivided.
        let m = perspective(-0.01, 0.0);
        assert_eq!(transform_point(&m, Point::new(100.0, 50.0)), Point::new(100.0, 50.0));
    }

    #[test]
    fn quad_corner_order() {
        let q = transform_quad(&translate(1.0, 2.0), &Rect::new(0.0, 0.0, 4.0, 3.0));
        assert_eq!(
            q,
            [
                Point::new(1.0, 2.0),
                Point::new(5.0, 2.0),
                Point::new(1.0, 5.0),
                Point::new(5.0, 5.0)
            ]
        );
    }
}
