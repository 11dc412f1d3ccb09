use num_traits::Float;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Winding of an outline given its signed area. Positive area is
  /// counter-clockwise in a y-up coordinate system.
  ///
  /// Screen coordinates usually point y down, which mirrors the picture: an
  /// outline reported as `CounterClockWise` is drawn clockwise on screen.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use rsection::Orientation;
  /// assert!(Orientation::from_signed_area(12.5).is_ccw());
  /// assert!(Orientation::from_signed_area(-0.5).is_cw());
  /// assert!(Orientation::from_signed_area(0.0).is_colinear());
  /// ```
  pub fn from_signed_area<T: Float>(area: T) -> Orientation {
    if area > T::zero() {
      CounterClockWise
    } else if area < T::zero() {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}
