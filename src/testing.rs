// This module contains strategies for:
//  * points
//  * outlines
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Outline, Point};

use proptest::prelude::*;
use rand::SeedableRng;
use std::f64::consts::FRAC_PI_2;

pub fn any_point() -> impl Strategy<Value = Point<f64, 2>> {
  (-1e3..1e3_f64, -1e3..1e3_f64).prop_map(|(x, y)| Point::new([x, y]))
}

// Random star-shaped outlines with 4 to 64 vertices and a radius of 100.
pub fn any_outline() -> impl Strategy<Value = Outline<f64>> {
  (4..64_usize, any::<u64>()).prop_map(|(n, seed)| {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    Outline::random(n, 100.0, &mut rng)
  })
}

// Axis-aligned rectangles paired with their middle.
pub fn any_rectangle() -> impl Strategy<Value = (Outline<f64>, Point<f64, 2>)> {
  let corner = (-100.0..100.0_f64, -100.0..100.0_f64);
  let size = (1.0..500.0_f64, 1.0..500.0_f64);
  (corner, size).prop_map(|((x, y), (width, height))| {
    let outline = Outline::new(vec![
      Point::new([x, y]),
      Point::new([x + width, y]),
      Point::new([x + width, y + height]),
      Point::new([x, y + height]),
    ]);
    (outline, Point::new([x + width / 2.0, y + height / 2.0]))
  })
}

// Outlines that are mirror symmetric about both axes through `centre`.
// A counter-clockwise run of vertices in the first quadrant is reflected into
// the other three.
pub fn any_symmetric_outline() -> impl Strategy<Value = Outline<f64>> {
  let quadrant = prop::collection::vec((0.0..1.0_f64, 10.0..100.0_f64), 1..16);
  (quadrant, any_point()).prop_map(|(samples, centre)| {
    let n = samples.len() as f64;
    let first: Vec<[f64; 2]> = samples
      .iter()
      .enumerate()
      .map(|(k, &(jitter, dist))| {
        let angle = FRAC_PI_2 * (k as f64 + 0.25 + jitter / 2.0) / n;
        [dist * angle.cos(), dist * angle.sin()]
      })
      .collect();
    let second = first.iter().rev().map(|&[x, y]| [-x, y]);
    let third = first.iter().map(|&[x, y]| [-x, -y]);
    let fourth = first.iter().rev().map(|&[x, y]| [x, -y]);
    let [cx, cy] = centre.array;
    first
      .iter()
      .copied()
      .chain(second)
      .chain(third)
      .chain(fourth)
      .map(|[x, y]| Point::new([x + cx, y + cy]))
      .collect()
  })
}
