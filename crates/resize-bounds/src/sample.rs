//! Random transforms with replay tokens.
//!
//! Purpose
//! - Reproducible streams of rotate/scale/shear/perspective/translate
//!   matrices for benches, property tests and the examples.
//!
//! Model
//! - One draw per token: angle, per-axis scale, x-shear, perspective row and
//!   translation, each uniform in its configured range, composed about
//!   `center` as `T(t) · T(c) · P · S_h · S · R · T(−c)`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Matrix3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::{perspective, rotate, scale, shear_x, translate};

/// Sampler ranges. Symmetric amplitudes draw from `[−amp, amp]`.
#[derive(Clone, Copy, Debug)]
pub struct TransformCfg {
    /// Rotation amplitude in radians.
    pub angle: f64,
    /// Per-axis scale range `(min, max)`; both must be positive.
    pub scale: (f64, f64),
    pub shear: f64,
    pub translate: f64,
    /// Amplitude of the perspective row entries. Keep it below `1 / extent`
    /// of the sampled rectangles so the homogeneous weight stays positive.
    pub perspective: f64,
    /// Pivot for rotation, scale and shear.
    pub center: (f64, f64),
}

impl Default for TransformCfg {
    fn default() -> Self {
        Self {
            angle: std::f64::consts::PI,
            scale: (0.5, 2.0),
            shear: 0.5,
            translate: 50.0,
            perspective: 0.0,
            center: (0.0, 0.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn symmetric<R: Rng>(rng: &mut R, amp: f64) -> f64 {
    (rng.gen::<f64>() * 2.0 - 1.0) * amp.abs()
}

fn in_range<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    lo + rng.gen::<f64>() * (hi - lo)
}

/// Draw one transform for `tok`.
pub fn draw_transform(cfg: &TransformCfg, tok: ReplayToken) -> Matrix3<f64> {
    let mut rng = tok.to_std_rng();
    let angle = symmetric(&mut rng, cfg.angle);
    let sx = in_range(&mut rng, cfg.scale);
    let sy = in_range(&mut rng, cfg.scale);
    let sh = symmetric(&mut rng, cfg.shear);
    let px = symmetric(&mut rng, cfg.perspective);
    let py = symmetric(&mut rng, cfg.perspective);
    let tx = symmetric(&mut rng, cfg.translate);
    let ty = symmetric(&mut rng, cfg.translate);

    let (cx, cy) = cfg.center;
    translate(tx + cx, ty + cy)
        * perspective(px, py)
        * shear_x(sh)
        * scale(sx, sy)
        * rotate(angle)
        * translate(-cx, -cy)
}
