//! UI widget components

pub mod column;
pub mod nodes;
pub mod text;

pub use column::*;
pub use nodes::*;
pub use text::*;
