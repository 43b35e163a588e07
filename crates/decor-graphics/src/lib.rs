//! Pure math/data for drawing in the decoration stack.
//!
//! This crate contains geometry primitives, color definitions, brushes,
//! paintable styles and the draw primitives recorded by modifiers.

mod brush;
mod color;
mod draw;
mod geometry;
mod style;

pub use brush::*;
pub use color::*;
pub use draw::*;
pub use geometry::*;
pub use style::*;
