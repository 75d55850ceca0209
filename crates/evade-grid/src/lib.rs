//! 2D grid maps for [`evade_paths`].
//!
//! Parse an ASCII map into a [`GridMap`], find the starting [`Markers`] in the
//! same text, and hand [`GridMap::lookup`] to a
//! [`MoveSelector`](evade_paths::MoveSelector) as its neighbor lookup.

pub mod geom;
pub mod lookup;
pub mod map;

pub use geom::Point;
pub use lookup::{Adjacency, GridLookup};
pub use map::{GridMap, MapError, Markers};
