use serde::{Deserialize, Serialize};

use crate::SectionScalar;

/// Numeric constants of the engine. Every field has a default, so partial
/// overrides can be loaded from any serde format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
#[serde(bound(deserialize = "T: SectionScalar + Deserialize<'de>"))]
pub struct Tolerances<T> {
  /// Outlines enclosing less area than this are rejected as degenerate.
  pub min_area: T,
  /// Edges of this length or shorter do not contribute to the shear-centre
  /// offset.
  pub min_edge_length: T,
  /// Empirical divisor applied to the shear-centre offset.
  pub offset_scale: T,
  /// Minimum distance between consecutive samples recorded by a
  /// [`Sketch`](crate::data::Sketch).
  pub min_sample_spacing: T,
}

impl<T: SectionScalar> Default for Tolerances<T> {
  fn default() -> Self {
    Tolerances {
      min_area: T::from_constant(0.1),
      min_edge_length: T::from_constant(0.1),
      offset_scale: T::from_constant(1000.0),
      min_sample_spacing: T::from_constant(3.0),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn partial_override_keeps_defaults() {
    let tol: Tolerances<f64> = serde_json::from_str(r#"{"min_area": 2.5}"#).unwrap();
    assert_eq!(
      tol,
      Tolerances {
        min_area: 2.5,
        ..Tolerances::default()
      }
    );
  }

  #[test]
  fn empty_input_is_default() {
    let tol: Tolerances<f32> = serde_json::from_str("{}").unwrap();
    assert_eq!(tol, Tolerances::default());
  }

  #[test]
  fn unknown_field_is_rejected() {
    assert!(serde_json::from_str::<Tolerances<f64>>(r#"{"min_aera": 1.0}"#).is_err());
  }
}
