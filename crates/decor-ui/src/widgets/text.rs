//! Text widget implementation

#![allow(non_snake_case)]

use decor_core::NodeId;

use super::nodes::TextNode;
use crate::modifier::Modifier;

/// Emits a single line of text decorated by `modifier`.
pub fn Text(value: impl Into<String>, modifier: Modifier) -> NodeId {
    decor_core::emit_node(TextNode {
        modifier,
        text: value.into(),
    })
}
