// Planar points travel as `{"x": .., "y": ..}` objects.
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Point;

#[derive(Deserialize)]
#[serde(rename = "Point")]
struct Coordinates<T> {
  x: T,
  y: T,
}

impl<T: Serialize> Serialize for Point<T, 2> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Point", 2)?;
    state.serialize_field("x", &self.array[0])?;
    state.serialize_field("y", &self.array[1])?;
    state.end()
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Point<T, 2> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let Coordinates { x, y } = Coordinates::deserialize(deserializer)?;
    Ok(Point::new([x, y]))
  }
}
