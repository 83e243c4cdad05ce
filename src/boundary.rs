//! Decision boundary geometry of a two-feature tree.

// Provides the boundary records and the tree walk producing them.
pub(crate) mod geometry;
// Draws a boundary to a bitmap via `plotters`.
pub(crate) mod plot;


pub use geometry::{Boundary, LeafRegion, LineSegment};
