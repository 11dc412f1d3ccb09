use crate::data::{Outline, Point};
use crate::{SectionScalar, Tolerances};

/// Recorder for a freehand stroke.
///
/// Samples closer than `min_sample_spacing` to the last recorded point are
/// ignored. Ending a stroke closes the loop by repeating the first point.
#[derive(Debug, Clone)]
pub struct Sketch<T> {
  points: Vec<Point<T, 2>>,
  drawing: bool,
  min_spacing: T,
}

impl<T: SectionScalar> Default for Sketch<T> {
  fn default() -> Self {
    Sketch::new(&Tolerances::default())
  }
}

impl<T: SectionScalar> Sketch<T> {
  pub fn new(tolerances: &Tolerances<T>) -> Sketch<T> {
    Sketch {
      points: Vec::new(),
      drawing: false,
      min_spacing: tolerances.min_sample_spacing,
    }
  }

  /// Start a new stroke at `pt`, discarding anything recorded before.
  pub fn begin(&mut self, pt: Point<T, 2>) {
    self.points.clear();
    self.points.push(pt);
    self.drawing = true;
  }

  /// Record `pt` if a stroke is in progress and `pt` is far enough from the
  /// last recorded point. Returns whether the point was kept.
  pub fn extend(&mut self, pt: Point<T, 2>) -> bool {
    if !self.drawing {
      return false;
    }
    let far_enough = match self.points.last() {
      Some(last) => last.euclidean_distance(&pt) > self.min_spacing,
      None => true,
    };
    if far_enough {
      self.points.push(pt);
    }
    far_enough
  }

  /// End the current stroke. Strokes with more than two points are closed by
  /// repeating the first point.
  pub fn finish(&mut self) {
    if self.drawing && self.points.len() > 2 {
      let first = self.points[0];
      self.points.push(first);
    }
    self.drawing = false;
  }

  pub fn clear(&mut self) {
    self.points.clear();
    self.drawing = false;
  }

  pub fn is_drawing(&self) -> bool {
    self.drawing
  }

  /// Recorded points, including the closing copy of the first point once the
  /// stroke is finished.
  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  /// Number of distinct vertices; a closing copy of the first point is not
  /// counted.
  pub fn point_count(&self) -> usize {
    match (self.points.first(), self.points.last()) {
      (Some(first), Some(last)) if self.points.len() > 1 && first == last => self.points.len() - 1,
      _ => self.points.len(),
    }
  }

  pub fn outline(&self) -> Outline<T> {
    Outline::new(self.points.clone())
  }
}
