//! Approximate shear centre.
//!
//! The estimate is a heuristic, not a shear-flow integration. A rigorous
//! shear centre for thin-walled sections needs the shear flow
//! `q(s) = -V Q(s) / I` integrated around the wall and the point of zero
//! torsional moment solved for. Here every edge of the outline is treated as
//! a strip of unit thickness, and a moment built from the first moments of
//! those strips is scaled down by [`Tolerances::offset_scale`] into an offset
//! from the centroid.
//!
//! For sections symmetric about both centroidal axes the offset vanishes up
//! to rounding, and the shear centre coincides with the centroid. Do not rely
//! on it for asymmetric thin-walled sections.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::centroid::{centroid, Centroid};
use super::second_moments::{second_moments, SecondMoments};
use crate::data::{Outline, Point, Vector};
use crate::{Error, SectionScalar, Tolerances};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShearResult<T> {
  pub centroid: Centroid<T>,
  pub second_moments: SecondMoments<T>,
  pub shear_centre: Point<T, 2>,
}

impl<T: SectionScalar> fmt::Display for ShearResult<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", self.centroid)?;
    writeln!(f, "{}", self.second_moments)?;
    write!(
      f,
      "shear centre ({:.2}, {:.2})",
      self.shear_centre.x_coord(),
      self.shear_centre.y_coord()
    )
  }
}

/// Centroid, second moments about the centroid and approximate shear centre
/// of an outline.
///
/// Falls back to the centroid as shear centre when either `Ixx` or `Iyy` is
/// zero.
///
/// # Errors
///
/// Fails exactly when [`centroid`] fails.
pub fn shear_centre<T: SectionScalar>(
  outline: &Outline<T>,
  tolerances: &Tolerances<T>,
) -> Result<ShearResult<T>, Error> {
  let centroid = centroid(outline, tolerances)?;
  let origin = centroid.point();
  let second_moments = second_moments(outline, &origin);

  let moment = offset_moment(&outline.translate(&-Vector::from(origin)), tolerances);
  let shear_centre = offset_from(origin, &second_moments, moment, tolerances);

  let result = ShearResult {
    centroid,
    second_moments,
    shear_centre,
  };
  log::trace!("{:?}", result);
  Ok(result)
}

// Shifts `origin` by the moment scaled with the second moments. Returns
// `origin` unchanged unless both Ixx and Iyy are positive.
fn offset_from<T: SectionScalar>(
  origin: Point<T, 2>,
  second_moments: &SecondMoments<T>,
  moment: T,
  tolerances: &Tolerances<T>,
) -> Point<T, 2> {
  if second_moments.ixx > T::zero() && second_moments.iyy > T::zero() {
    let offset = Vector([
      moment / (second_moments.ixx * tolerances.offset_scale),
      moment / (second_moments.iyy * tolerances.offset_scale),
    ]);
    origin + offset
  } else {
    log::debug!(
      "degenerate moments {:?}, using centroid as shear centre",
      second_moments
    );
    origin
  }
}

// Sum over the edges of `(Qx * rX - Qy * rY) * length`, where `r` is the edge
// midpoint relative to the centroid and `Q = length * r` is the first moment
// of a unit-thickness strip. `relative` must be centred on the centroid.
fn offset_moment<T: SectionScalar>(relative: &Outline<T>, tolerances: &Tolerances<T>) -> T {
  relative
    .iter_edges()
    .filter_map(|edge| {
      let length = edge.length();
      if length <= tolerances.min_edge_length {
        return None;
      }
      let [rx, ry] = edge.midpoint().array;
      let qx = length * ry;
      let qy = length * rx;
      Some((qx * rx - qy * ry) * length)
    })
    .sum()
}
