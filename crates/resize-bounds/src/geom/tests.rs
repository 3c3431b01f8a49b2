use super::*;
use crate::matrix::{rotate_about, scale, shear_x, transform_quad};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn square10() -> Quad {
    [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
}

fn diamond10() -> Quad {
    [p(5.0, 0.0), p(10.0, 5.0), p(5.0, 10.0), p(0.0, 5.0)]
}

/// The same selection sort with the raw `atan2` angle in `(-π, π]`.
fn order_hull_signed(mut pts: Quad) -> Quad {
    let mut lowest = 0;
    for i in 1..4 {
        if pts[i].y < pts[lowest].y {
            lowest = i;
        }
    }
    pts.swap(0, lowest);
    let mut theta_v = 0.0;
    for i in 1..4 {
        let mut theta_m = std::f64::consts::TAU;
        let mut pick = 3;
        for j in i..4 {
            let s = pts[j] - pts[i - 1];
            if s.x == 0.0 && s.y == 0.0 {
                pick = j;
                break;
            }
            let theta = s.y.atan2(s.x);
            if theta < theta_m && (theta > theta_v || (theta == theta_v && s.x > 0.0)) {
                theta_m = theta;
                pick = j;
            }
        }
        theta_v = theta_m;
        pts.swap(i, pick);
    }
    pts.swap(0, 3);
    pts.swap(1, 2);
    pts
}

fn cross_signs(q: &Quad) -> [f64; 4] {
    let mut out = [0.0; 4];
    for k in 0..4 {
        let a = q[k];
        let b = q[(k + 1) % 4];
        let c = q[(k + 2) % 4];
        let ab = b - a;
        let bc = c - b;
        out[k] = ab.x * bc.y - ab.y * bc.x;
    }
    out
}

#[test]
fn intersect_diagonals_of_square() {
    let i = intersect(p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(10.0, 0.0)).unwrap();
    assert_eq!(i, p(5.0, 5.0));
}

#[test]
fn intersect_parallel_and_coincident_fail() {
    let a = p(1.0, 2.0);
    let b = p(7.0, -3.0);
    assert!(intersect(a, b, a, b).is_none());
    assert!(intersect(p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(1.0, 2.0)).is_none());
}

#[test]
fn axis_constrained_intersections() {
    let a = p(0.0, 0.0);
    let b = p(10.0, 5.0);
    assert_eq!(intersect_x(a, b, p(4.0, 100.0)), Some(p(4.0, 2.0)));
    assert_eq!(intersect_y(a, b, p(100.0, 2.0)), Some(p(4.0, 2.0)));

    // Vertical source line cannot meet another vertical line.
    assert!(intersect_x(p(3.0, 0.0), p(3.0, 10.0), p(5.0, 5.0)).is_none());
    // Horizontal source line cannot meet another horizontal line.
    assert!(intersect_y(p(0.0, 3.0), p(10.0, 3.0), p(1.0, 1.0)).is_none());
}

#[test]
fn border_is_inclusive_and_bounded() {
    let q = square10();
    assert!(point_on_border(&q, p(5.0, 0.0)));
    assert!(point_on_border(&q, p(10.0, 10.0)));
    assert!(point_on_border(&q, p(0.0, 7.5)));
    assert!(!point_on_border(&q, p(5.0, 5.0)));
    // Collinear with the bottom edge but past its end.
    assert!(!point_on_border(&q, p(11.0, 0.0)));
}

#[test]
fn in_poly_square_and_diamond() {
    let q = square10();
    assert!(in_poly(&q, p(5.0, 5.0)));
    assert!(in_poly(&q, p(0.0, 5.0)));
    assert!(in_poly(&q, p(10.0, 10.0)));
    assert!(in_poly(&q, p(5.0, 10.0)));
    assert!(!in_poly(&q, p(-1.0, 5.0)));
    assert!(!in_poly(&q, p(11.0, 5.0)));
    assert!(!in_poly(&q, p(5.0, -0.5)));

    let d = diamond10();
    assert!(in_poly(&d, p(5.0, 5.0)));
    assert!(in_poly(&d, p(2.5, 2.5)));
    assert!(!in_poly(&d, p(1.0, 1.0)));
    assert!(!in_poly(&d, p(9.0, 9.0)));
}

#[test]
fn border_tolerance_is_configurable() {
    let q = square10();
    let near = p(5.0, -1e-6);
    assert!(!in_poly(&q, near));
    assert!(in_poly_eps(&q, near, 1e-4));
}

#[test]
fn min_max_of_four() {
    assert_eq!(min4([3.0, -1.0, 2.0, 0.5]), -1.0);
    assert_eq!(max4([3.0, -1.0, 2.0, 0.5]), 3.0);
}

#[test]
fn rect_bounding_and_corners() {
    let r = Rect::bounding(&[p(3.0, 4.0), p(-1.0, 8.0), p(2.0, 0.0)]).unwrap();
    assert_eq!(r, Rect::new(-1.0, 0.0, 3.0, 8.0));
    assert_eq!(r.area(), 32.0);
    let [a, b, c, d] = r.corners();
    assert_eq!((a, b, c, d), (p(-1.0, 0.0), p(3.0, 0.0), p(3.0, 8.0), p(-1.0, 8.0)));
    assert!(Rect::bounding(&[]).is_none());
}

#[test]
fn irect_min_extent() {
    assert_eq!(IRect::new(3, 4, 3, 4).with_min_extent(), IRect::new(3, 4, 4, 5));
    assert_eq!(IRect::new(0, 0, 5, 5).with_min_extent(), IRect::new(0, 0, 5, 5));
    assert_eq!(
        IRect::enclosing(&Rect::new(-0.5, 0.2, 9.1, 10.0)),
        IRect::new(-1, 0, 10, 10)
    );
}

#[test]
fn order_hull_source_order_square() {
    // Source corner order (u1,v1) (u2,v1) (u1,v2) (u2,v2) is not a walk.
    let src = [p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0), p(10.0, 10.0)];
    let hull = order_hull(src);
    assert_eq!(hull, [p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0), p(0.0, 0.0)]);
}

#[test]
fn order_hull_diamond() {
    let src = [p(5.0, 0.0), p(10.0, 5.0), p(0.0, 5.0), p(5.0, 10.0)];
    let hull = order_hull(src);
    assert_eq!(hull, [p(0.0, 5.0), p(5.0, 10.0), p(10.0, 5.0), p(5.0, 0.0)]);
}

#[test]
fn order_hull_winds_transformed_rectangles() {
    for deg in (-180..180).step_by(7) {
        let m = rotate_about((deg as f64).to_radians(), 100.0, 50.0)
            * shear_x(0.3)
            * scale(1.5, 0.8);
        let q = transform_quad(&m, &Rect::new(0.0, 0.0, 200.0, 100.0));
        let hull = order_hull(q.map(|c| p(c.x.floor(), c.y.floor())));
        let s = cross_signs(&hull);
        let all_pos = s.iter().all(|&v| v > 0.0);
        let all_neg = s.iter().all(|&v| v < 0.0);
        assert!(all_pos || all_neg, "not convex at {deg}°: {hull:?}");
    }
}

#[test]
fn wrapped_angles_order_rectangle_images_like_signed_angles() {
    let r = Rect::new(0.0, 0.0, 200.0, 100.0);
    for deg in -180..180 {
        let rot = rotate_about((deg as f64).to_radians(), 100.0, 50.0);
        for m in [rot, rot * shear_x(0.3) * scale(1.5, 0.8)] {
            let q = transform_quad(&m, &r);
            for pts in [q, q.map(|c| p(c.x.floor(), c.y.floor()))] {
                assert_eq!(order_hull(pts), order_hull_signed(pts), "{deg}°: {pts:?}");
            }
        }
    }
}

#[test]
fn wrapped_angles_keep_crossing_free_order_where_signed_angles_cross() {
    let pts = [p(60.0, -58.0), p(-112.0, -59.0), p(-16.0, -236.0), p(-207.0, -231.0)];
    let wrapped = order_hull(pts);
    assert_eq!(wrapped, [p(-207.0, -231.0), p(-112.0, -59.0), p(60.0, -58.0), p(-16.0, -236.0)]);
    let signed = order_hull_signed(pts);
    assert_eq!(signed, [p(-112.0, -59.0), p(-207.0, -231.0), p(60.0, -58.0), p(-16.0, -236.0)]);
    let s = cross_signs(&wrapped);
    assert!(s.iter().all(|&v| v > 0.0) || s.iter().all(|&v| v < 0.0), "{s:?}");
}
