//! Ordering of the four transformed corners into hull winding.
//!
//! The corners arrive in source order `(u1,v1) (u2,v1) (u1,v2) (u2,v2)`, which
//! after a transform is generally not a walk around the quad. A Jarvis-March
//! style selection sort fixes that for the convex images of a rectangle.
//!
//! Known limitation: this is not a general hull routine. Non-convex or
//! self-intersecting quads (extreme perspective) are ordered, but not
//! necessarily correctly; the search then simply finds fewer valid candidates.
//!
//! Angles are wrapped into `[0, 2π)` instead of the signed `atan2` range. On
//! images of a rectangle under rotation, shear and scale both give the same
//! order; they differ only where the signed form would pick a crossing order.

use std::f64::consts::TAU;

use super::types::Quad;

/// Reorder `pts` so consecutive entries are hull neighbours.
///
/// Starts from the lowest point, repeatedly takes the remaining point with the
/// smallest direction angle (counter-clockwise, in `[0, 2π)`) that is still
/// larger than the previous one, then reverses the sequence.
pub fn order_hull(mut pts: Quad) -> Quad {
    let mut lowest = 0;
    for i in 1..4 {
        if pts[i].y < pts[lowest].y {
            lowest = i;
        }
    }
    pts.swap(0, lowest);

    let mut theta_v = 0.0;
    for i in 1..4 {
        let mut theta_m = TAU;
        let mut pick = 3;
        for j in i..4 {
            let s = pts[j] - pts[i - 1];
            if s.x == 0.0 && s.y == 0.0 {
                pick = j;
                break;
            }
            let mut theta = s.y.atan2(s.x);
            if theta < 0.0 {
                theta += TAU;
            }
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
