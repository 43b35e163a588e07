use decor_core::{Node, NodeId};

use crate::layout::core::{HorizontalAlignment, LinearArrangement};
use crate::modifier::Modifier;

#[derive(Clone, Debug, Default)]
pub struct TextNode {
    pub modifier: Modifier,
    pub text: String,
}

impl Node for TextNode {}

#[derive(Clone, Debug)]
pub struct ColumnNode {
    pub modifier: Modifier,
    pub vertical_arrangement: LinearArrangement,
    pub horizontal_alignment: HorizontalAlignment,
    pub children: Vec<NodeId>,
}

impl Default for ColumnNode {
    fn default() -> Self {
        Self {
            modifier: Modifier::empty(),
            vertical_arrangement: LinearArrangement::Start,
            horizontal_alignment: HorizontalAlignment::Start,
            children: Vec::new(),
        }
    }
}

impl Node for ColumnNode {
    fn insert_child(&mut self, child: NodeId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    fn children(&self) -> Vec<NodeId> {
        self.children.clone()
    }
}
