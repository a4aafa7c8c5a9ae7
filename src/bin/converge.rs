//! Minimal driver: refine the sample target from a fixed starting guess.

use refina::refine::config::RefineCfg;
use refina::refine::point::Point;
use refina::refine::refiner::refine;

/// Sample target: z = y - sin(x^4).
fn target(x: f64, y: f64) -> f64 {
    y - (x * x * x * x).sin()
}

fn main() {
    let mut point = Point::new(12.1, 10.1);

    match refine(&mut point, target, RefineCfg::new()) {
        Ok(report) if report.converged() => println!("Finished: {point}"),
        _ => println!("Failed to converge: {point}"),
    }
}
