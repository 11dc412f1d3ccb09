use rand::Rng;
use std::iter::FromIterator;

use crate::data::{DirectedEdge, Point, Vector};
use crate::Error;
use crate::Orientation;
use crate::SectionScalar;

/// Ordered boundary of a planar shape, in the order it was traced.
///
/// The boundary is implicitly closed: the last point connects back to the
/// first. A trailing point equal to the first is dropped on construction, so
/// explicitly closed and open traces describe the same outline.
///
/// Outlines are not required to be simple. Self-intersecting input is accepted
/// and integrated as-is by the shoelace formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline<T> {
  pub(crate) points: Vec<Point<T, 2>>,
}

impl<T> Outline<T> {
  pub fn new(mut points: Vec<Point<T, 2>>) -> Outline<T>
  where
    T: PartialEq,
  {
    if points.len() >= 2 && points.first() == points.last() {
      points.pop();
    }
    Outline { points }
  }

  /// Check that the outline has enough points to enclose an area.
  pub fn validate(&self) -> Result<(), Error> {
    if self.points.len() < 3 {
      return Err(Error::InsufficientPoints);
    }
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      iter: self.points.iter(),
    }
  }

  /// Every boundary edge, including the closing edge from the last point
  /// back to the first.
  pub fn iter_edges(&self) -> EdgeIter<'_, T> {
    EdgeIter {
      points: &self.points,
      index: 0,
    }
  }

  pub fn reverse(&mut self) {
    self.points.reverse();
  }

  pub fn map_points<F>(self, f: F) -> Outline<T>
  where
    F: Fn(Point<T, 2>) -> Point<T, 2>,
  {
    Outline {
      points: self.points.into_iter().map(f).collect(),
    }
  }
}

impl<T: SectionScalar> Outline<T> {
  pub fn signed_area_2x(&self) -> T {
    self.iter_edges().map(|edge| edge.cross()).sum()
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2.0)
  }

  /// Magnitude of the enclosed area, independent of winding.
  pub fn area(&self) -> T {
    self.signed_area().abs()
  }

  pub fn orientation(&self) -> Orientation {
    Orientation::from_signed_area(self.signed_area_2x())
  }

  pub fn ensure_ccw(&mut self) {
    if self.orientation().is_cw() {
      self.reverse();
    }
  }

  pub fn translate(&self, by: &Vector<T, 2>) -> Outline<T> {
    Outline {
      points: self.points.iter().map(|pt| pt + by).collect(),
    }
  }

  /// Regular polygon with `n` vertices on a circle, starting on the positive
  /// x-axis and winding counter-clockwise.
  pub fn regular(n: usize, radius: T, centre: Point<T, 2>) -> Outline<T> {
    let points = (0..n)
      .map(|k| {
        let angle = T::from_constant(std::f64::consts::TAU * k as f64 / n as f64);
        &centre + &Vector([radius * angle.cos(), radius * angle.sin()])
      })
      .collect();
    Outline { points }
  }

  /// Random star-shaped outline around the origin. Vertex `k` lies in the
  /// `k`th angular sector at a distance between `radius/2` and `radius`.
  /// The outline winds counter-clockwise and is simple for `n >= 4`.
  pub fn random<R>(n: usize, radius: T, rng: &mut R) -> Outline<T>
  where
    R: Rng + ?Sized,
  {
    let points = (0..n)
      .map(|k| {
        let jitter: f64 = rng.gen_range(0.0..0.5);
        let angle = T::from_constant(std::f64::consts::TAU * (k as f64 + jitter) / n as f64);
        let dist = radius * T::from_constant(rng.gen_range(0.5..1.0));
        Point::new([dist * angle.cos(), dist * angle.sin()])
      })
      .collect();
    Outline { points }
  }
}

impl<T: PartialEq> From<Vec<Point<T, 2>>> for Outline<T> {
  fn from(points: Vec<Point<T, 2>>) -> Outline<T> {
    Outline::new(points)
  }
}

impl<T: PartialEq + Clone> From<&[Point<T, 2>]> for Outline<T> {
  fn from(points: &[Point<T, 2>]) -> Outline<T> {
    Outline::new(points.to_vec())
  }
}

impl<T: PartialEq> FromIterator<Point<T, 2>> for Outline<T> {
  fn from_iter<I: IntoIterator<Item = Point<T, 2>>>(iter: I) -> Outline<T> {
    Outline::new(iter.into_iter().collect())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Iterators

pub struct Iter<'a, T: 'a> {
  iter: std::slice::Iter<'a, Point<T, 2>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a Point<T, 2>;
  fn next(&mut self) -> Option<&'a Point<T, 2>> {
    self.iter.next()
  }
}

pub struct EdgeIter<'a, T: 'a> {
  points: &'a [Point<T, 2>],
  index: usize,
}

impl<'a, T> Iterator for EdgeIter<'a, T> {
  type Item = DirectedEdge<'a, T, 2>;
  fn next(&mut self) -> Option<Self::Item> {
    let points = self.points;
    let src = points.get(self.index)?;
    let dst = &points[(self.index + 1) % points.len()];
    self.index += 1;
    Some(DirectedEdge { src, dst })
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl<T> ExactSizeIterator for EdgeIter<'_, T> {
  fn len(&self) -> usize {
    self.points.len().saturating_sub(self.index)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
