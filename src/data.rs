mod directed_edge;
pub(crate) mod outline;
pub(crate) mod point;
mod sketch;
mod vector;

pub use directed_edge::*;

#[doc(inline)]
pub use crate::data::outline::{EdgeIter, Iter, Outline};
pub use point::Point;
pub use sketch::Sketch;
pub use vector::Vector;
