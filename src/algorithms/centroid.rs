use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::{Outline, Point, Vector};
use crate::{Error, SectionScalar, Tolerances};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid<T> {
  pub x: T,
  pub y: T,
  /// Enclosed area. Always non-negative.
  pub area: T,
}

impl<T: Copy> Centroid<T> {
  pub fn point(&self) -> Point<T, 2> {
    Point::new([self.x, self.y])
  }
}

impl<T: SectionScalar> fmt::Display for Centroid<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "centroid ({:.2}, {:.2}), area {:.2}",
      self.x, self.y, self.area
    )
  }
}

/// Shoelace centroid of an outline.
///
/// The division uses the signed area, so clockwise and counter-clockwise
/// traces of the same shape agree. The reported `area` is the magnitude.
///
/// # Errors
///
/// * [`Error::InsufficientPoints`] for outlines with fewer than three points.
/// * [`Error::DegenerateArea`] if the enclosed area is zero, below
///   `tolerances.min_area` or not a number.
///
/// # Examples
///
/// ```rust
/// # use rsection::algorithms::centroid;
/// # use rsection::data::{Outline, Point};
/// # use rsection::{Error, Tolerances};
/// let sliver = Outline::new(vec![
///   Point::new([0.0, 0.0]),
///   Point::new([10.0, 0.0]),
///   Point::new([20.0, 0.001]),
/// ]);
/// assert_eq!(centroid(&sliver, &Tolerances::default()), Err(Error::DegenerateArea));
/// ```
pub fn centroid<T: SectionScalar>(
  outline: &Outline<T>,
  tolerances: &Tolerances<T>,
) -> Result<Centroid<T>, Error> {
  if let Err(err) = outline.validate() {
    log::debug!("rejecting outline with {} points: {}", outline.len(), err);
    return Err(err);
  }

  let signed_area = outline.signed_area();
  let area = signed_area.abs();
  // Negated comparison so that NaN areas are rejected too. A zero area is
  // rejected even when `min_area` is zero.
  if !(area >= tolerances.min_area) || area.is_zero() {
    log::debug!(
      "rejecting outline with {} points: area {:?} below {:?}",
      outline.len(),
      area,
      tolerances.min_area
    );
    return Err(Error::DegenerateArea);
  }

  let moments: Vector<T, 2> = outline
    .iter_edges()
    .map(|edge| (Vector::from(*edge.src) + Vector::from(*edge.dst)) * edge.cross())
    .sum();
  let [x, y] = (moments / (T::from_constant(6.0) * signed_area)).0;

  let result = Centroid { x, y, area };
  log::trace!("{:?}", result);
  Ok(result)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::assert_ok;
  use proptest::prelude::*;

  fn outline(pts: &[[f64; 2]]) -> Outline<f64> {
    pts.iter().copied().map(Point::new).collect()
  }

  #[test]
  fn unit_square() {
    let square = outline(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
    let c = centroid(&square, &Tolerances::default()).unwrap();
    assert_eq!(c, Centroid { x: 5.0, y: 5.0, area: 100.0 });
  }

  #[test]
  fn clockwise_square() {
    let square = outline(&[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]]);
    let c = centroid(&square, &Tolerances::default()).unwrap();
    assert_eq!(c, Centroid { x: 5.0, y: 5.0, area: 100.0 });
  }

  #[test]
  fn right_triangle() {
    let triangle = outline(&[[0.0, 0.0], [6.0, 0.0], [0.0, 9.0]]);
    let c = centroid(&triangle, &Tolerances::default()).unwrap();
    assert!((c.x - 2.0).abs() < 1e-12);
    assert!((c.y - 3.0).abs() < 1e-12);
    assert_eq!(c.area, 27.0);
  }

  #[test]
  fn insufficient_points() {
    let tol = Tolerances::default();
    assert_eq!(centroid(&outline(&[]), &tol), Err(Error::InsufficientPoints));
    assert_eq!(
      centroid(&outline(&[[0.0, 0.0], [5.0, 5.0]]), &tol),
      Err(Error::InsufficientPoints)
    );
    // Closing duplicate leaves only two points.
    assert_eq!(
      centroid(&outline(&[[0.0, 0.0], [5.0, 5.0], [0.0, 0.0]]), &tol),
      Err(Error::InsufficientPoints)
    );
  }

  #[test]
  fn threshold_is_inclusive() {
    // Right triangle with area exactly 0.5.
    let triangle = outline(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
    let tol = Tolerances {
      min_area: 0.5,
      ..Tolerances::default()
    };
    assert!(centroid(&triangle, &tol).is_ok());
    let tol = Tolerances {
      min_area: 0.75,
      ..Tolerances::default()
    };
    assert_eq!(centroid(&triangle, &tol), Err(Error::DegenerateArea));
  }

  #[test]
  fn zero_area_is_degenerate_without_threshold() {
    let collinear = outline(&[[0.0, 0.0], [5.0, 0.0], [10.0, 0.0]]);
    let tol = Tolerances {
      min_area: 0.0,
      ..Tolerances::default()
    };
    assert_eq!(centroid(&collinear, &tol), Err(Error::DegenerateArea));
    let tiny = outline(&[[0.0, 0.0], [0.1, 0.0], [0.0, 0.1]]);
    assert_ok!(centroid(&tiny, &tol));
  }

  #[test]
  fn nan_is_degenerate() {
    let broken = outline(&[[0.0, 0.0], [f64::NAN, 0.0], [0.0, 10.0]]);
    assert_eq!(
      centroid(&broken, &Tolerances::default()),
      Err(Error::DegenerateArea)
    );
  }

  #[test]
  fn display_two_decimals() {
    let c = Centroid {
      x: 1.0,
      y: 2.346,
      area: 100.0,
    };
    assert_eq!(c.to_string(), "centroid (1.00, 2.35), area 100.00");
  }

  proptest! {
    #[test]
    fn rectangle_centroid_is_its_middle((rect, middle) in any_rectangle()) {
      let c = centroid(&rect, &Tolerances::default()).unwrap();
      prop_assert!(c.point().euclidean_distance(&middle) < 1e-6);
    }

    #[test]
    fn translation_moves_centroid(
      outline in any_outline(),
      dx in -500.0..500.0_f64,
      dy in -500.0..500.0_f64
    ) {
      let tol = Tolerances::default();
      let before = centroid(&outline, &tol).unwrap();
      let after = centroid(&outline.translate(&Vector([dx, dy])), &tol).unwrap();
      prop_assert!((after.x - before.x - dx).abs() < 1e-6);
      prop_assert!((after.y - before.y - dy).abs() < 1e-6);
      prop_assert!((after.area - before.area).abs() < 1e-6 * before.area);
    }
  }
}
