//! Section properties of outlines.
//!
//! The `compute_*` functions take raw point sequences as traced by the
//! caller. The submodules work on normalized [`Outline`]s.
use crate::data::{Outline, Point};
use crate::{Error, SectionScalar, Tolerances};

pub mod centroid;
pub mod second_moments;
pub mod shear_centre;

pub use centroid::{centroid, Centroid};
pub use second_moments::{second_moments, SecondMoments};
pub use shear_centre::{shear_centre, ShearResult};

/// Area-weighted centroid of the outline traced by `points`, or `None` if
/// the points do not enclose an area.
///
/// Uses the default [`Tolerances`]. See [`centroid()`] for a variant that
/// reports why the outline was rejected.
pub fn compute_centroid<T: SectionScalar>(points: &[Point<T, 2>]) -> Option<Centroid<T>> {
  compute_centroid_with(points, &Tolerances::default())
}

pub fn compute_centroid_with<T: SectionScalar>(
  points: &[Point<T, 2>],
  tolerances: &Tolerances<T>,
) -> Option<Centroid<T>> {
  centroid(&Outline::from(points), tolerances).ok()
}

/// Centroid, second moments of area and approximate shear centre of the
/// outline traced by `points`.
///
/// # Errors
///
/// * [`Error::InsufficientPoints`] if fewer than three points remain after
///   dropping a closing duplicate.
/// * [`Error::DegenerateArea`] if the enclosed area is below
///   [`Tolerances::min_area`].
pub fn compute_shear_centre<T: SectionScalar>(
  points: &[Point<T, 2>],
) -> Result<ShearResult<T>, Error> {
  compute_shear_centre_with(points, &Tolerances::default())
}

pub fn compute_shear_centre_with<T: SectionScalar>(
  points: &[Point<T, 2>],
  tolerances: &Tolerances<T>,
) -> Result<ShearResult<T>, Error> {
  shear_centre(&Outline::from(points), tolerances)
}
