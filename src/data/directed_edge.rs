use num_traits::Float;

use super::Point;
use super::Vector;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

// Directed edge from A to B, including A and excluding B.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DirectedEdge<'a, T, const N: usize = 2> {
  pub src: &'a Point<T, N>,
  pub dst: &'a Point<T, N>,
}

impl<T, const N: usize> Copy for DirectedEdge<'_, T, N> {}
impl<T, const N: usize> Clone for DirectedEdge<'_, T, N> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T: Float, const N: usize> DirectedEdge<'_, T, N> {
  pub fn vector(&self) -> Vector<T, N> {
    self.dst - self.src
  }

  pub fn length(&self) -> T {
    self.src.euclidean_distance(self.dst)
  }

  pub fn midpoint(&self) -> Point<T, N> {
    let two = T::one() + T::one();
    self.src + &(self.vector() / two)
  }
}

impl<T: Float> DirectedEdge<'_, T, 2> {
  /// Twice the signed area of the triangle spanned by the origin and the edge.
  pub fn cross(&self) -> T {
    self.src.cross(self.dst)
  }
}
