use thiserror::Error;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("node {id} missing")]
    Missing { id: NodeId },
    #[error("node {id} type mismatch; expected {expected}")]
    TypeMismatch { id: NodeId, expected: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// `Composition::render` was invoked while another render on this
    /// thread was still running.
    #[error("a composition is already rendering on this thread")]
    AlreadyComposing,
    #[error("composer was removed before the render pass finished")]
    ComposerLost,
    #[error(transparent)]
    Node(#[from] NodeError),
}
