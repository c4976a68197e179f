//! Exact 2D geometry: segments and axis-aligned rectangles
//!
//! Everything the collision system does reduces to segment-vs-rectangle,
//! which reduces to segment-vs-segment. All predicates are tolerance-based
//! (see [`crate::EPSILON`]) and total: degenerate input resolves to a
//! defined value, never a panic.

pub mod rect;
pub mod segment;

pub use rect::Rect;
pub use segment::Segment;
