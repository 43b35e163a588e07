//! Column widget implementation

#![allow(non_snake_case)]

use decor_core::NodeId;

use super::nodes::ColumnNode;
use crate::layout::core::{HorizontalAlignment, LinearArrangement};
use crate::modifier::Modifier;

/// How a Column arranges and aligns its children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnSpec {
    pub vertical_arrangement: LinearArrangement,
    pub horizontal_alignment: HorizontalAlignment,
}

impl ColumnSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical_arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.vertical_arrangement = arrangement;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            vertical_arrangement: LinearArrangement::Start,
            horizontal_alignment: HorizontalAlignment::Start,
        }
    }
}

/// Stacks the children emitted by `content` vertically.
pub fn Column(modifier: Modifier, spec: ColumnSpec, content: impl FnOnce()) -> NodeId {
    let id = decor_core::emit_node(ColumnNode {
        modifier,
        vertical_arrangement: spec.vertical_arrangement,
        horizontal_alignment: spec.horizontal_alignment,
        children: Vec::new(),
    });
    decor_core::with_parent(id, content);
    id
}
