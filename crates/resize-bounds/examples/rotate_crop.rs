//! Rotation sweep over a 200×100 rectangle.
//!
//! Prints the destination bounds of every policy for rotations about the
//! rectangle center in 15° steps, plus the crop's share of the source area.
//!
//! Run: `cargo run -p resize-bounds --example rotate_crop`

use resize_bounds::prelude::*;

fn main() {
    let src = Rect::new(0.0, 0.0, 200.0, 100.0);
    let area = src.area();
    println!("deg  policy            x1    y1    x2    y2  coverage");
    for deg in (0..=180).step_by(15) {
        let m = rotate_about((deg as f64).to_radians(), 100.0, 50.0);
        for policy in ResizePolicy::ALL {
            let b = resolve_boundary(&m, policy, &src).bounds;
            let coverage = (b.width() * b.height()) as f64 / area;
            println!(
                "{deg:>3}  {:<16} {:>5} {:>5} {:>5} {:>5}  {coverage:.3}",
                policy.as_str(),
                b.x1,
                b.y1,
                b.x2,
                b.y2
            );
        }
    }
}
