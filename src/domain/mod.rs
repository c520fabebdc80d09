//! Pure layout types with no rendering dependencies
//!
//! Points, canvas dimensions and the stance landmark computation.

pub mod geometry;
pub mod stance;

pub use geometry::*;
pub use stance::*;
