#![doc = r"Core runtime pieces: the node arena and single-pass composition."]

mod applier;
mod composition;
mod error;

pub use applier::{Applier, AsAny, MemoryApplier, Node};
pub use composition::{
    emit_node, is_composing, with_current_composer, with_parent, Composer, Composition,
};
pub use error::{ComposeError, NodeError};

pub type NodeId = usize;
