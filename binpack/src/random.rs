//! Random rectangles, mostly for exercising the packer.

use rand::Rng;

use crate::geometry::{Real, Rect};

fn dimension<R: Rng>(rng: &mut R, min: i32, max: i32) -> Real {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    Real::from(rng.gen_range(low..=high)).abs()
}

/// A rectangle at the origin whose width and height are drawn independently
/// from `[min, max]`. Negative draws are mirrored, and zero clamps to the
/// smallest size a `Rect` allows.
pub fn random_rect<R: Rng>(rng: &mut R, min: i32, max: i32) -> Rect {
    let w = dimension(rng, min, max);
    let h = dimension(rng, min, max);
    Rect::new(0.0, 0.0, w, h)
}

/// Like [`random_rect`], but square.
pub fn random_square<R: Rng>(rng: &mut R, min: i32, max: i32) -> Rect {
    let side = dimension(rng, min, max);
    Rect::new(0.0, 0.0, side, side)
}
