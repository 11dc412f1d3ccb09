use claims::debug_assert_ok;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::{Outline, Point, Vector};
use crate::SectionScalar;

/// Second moments of area about axes through a reference point, parallel to
/// the coordinate axes.
///
/// All three values are magnitudes. The sign that `Ixy` would carry for a
/// given orientation of the section is not preserved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondMoments<T> {
  #[serde(rename = "Ixx")]
  pub ixx: T,
  #[serde(rename = "Iyy")]
  pub iyy: T,
  #[serde(rename = "Ixy")]
  pub ixy: T,
}

impl<T: SectionScalar> fmt::Display for SecondMoments<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Ixx {:.2}, Iyy {:.2}, Ixy {:.2}",
      self.ixx, self.iyy, self.ixy
    )
  }
}

/// Second moments of the area enclosed by `outline` about axes through
/// `origin`, normally the centroid.
///
/// Raw sums over the edges are finalized with their absolute values, so the
/// result does not depend on the winding of the outline.
pub fn second_moments<T: SectionScalar>(
  outline: &Outline<T>,
  origin: &Point<T, 2>,
) -> SecondMoments<T> {
  debug_assert_ok!(outline.validate());

  let two = T::from_constant(2.0);
  let relative = outline.translate(&-Vector::from(*origin));
  let mut ixx = T::zero();
  let mut iyy = T::zero();
  let mut ixy = T::zero();
  for edge in relative.iter_edges() {
    let [x1, y1] = edge.src.array;
    let [x2, y2] = edge.dst.array;
    let cross = edge.cross();
    ixx += cross * (y1 * y1 + y1 * y2 + y2 * y2);
    iyy += cross * (x1 * x1 + x1 * x2 + x2 * x2);
    ixy += cross * (x1 * y2 + two * x1 * y1 + two * x2 * y2 + x2 * y1);
  }

  SecondMoments {
    ixx: ixx.abs() / T::from_constant(12.0),
    iyy: iyy.abs() / T::from_constant(12.0),
    ixy: ixy.abs() / T::from_constant(24.0),
  }
}
