// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Geometric properties of planar outlines: enclosed area, centroid, second
//! moments of area and an approximate shear centre.
//!
//! Outlines are ordered point sequences, typically traced by hand. They do
//! not have to be closed, simple or counter-clockwise.
//!
//! ```rust
//! # use rsection::data::Point;
//! let square = [
//!   Point::new([0.0, 0.0]),
//!   Point::new([10.0, 0.0]),
//!   Point::new([10.0, 10.0]),
//!   Point::new([0.0, 10.0]),
//! ];
//! let result = rsection::compute_shear_centre(&square).unwrap();
//! assert_eq!(result.centroid.area, 100.0);
//! assert_eq!(result.centroid.point(), Point::new([5.0, 5.0]));
//! ```
use num_traits::Float;
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::*;

pub mod algorithms;
pub mod data;
mod orientation;
mod tolerances;

pub use orientation::Orientation;
pub use tolerances::Tolerances;

pub use algorithms::{
  compute_centroid, compute_centroid_with, compute_shear_centre, compute_shear_centre_with,
  Centroid, SecondMoments, ShearResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three points remain after dropping the closing duplicate.
  InsufficientPoints,
  /// Enclosed area is below the zero-area threshold.
  DegenerateArea,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientPoints => write!(f, "Insufficient points"),
      Error::DegenerateArea => write!(f, "Degenerate area"),
    }
  }
}

impl std::error::Error for Error {}

pub trait SectionScalar:
  Float + Debug + Display + Sum + AddAssign + SubAssign + MulAssign + DivAssign + Default
{
  fn from_constant(val: f64) -> Self;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl SectionScalar for $ty {
        #[allow(clippy::unnecessary_cast)]
        fn from_constant(val: f64) -> Self {
          val as $ty
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
