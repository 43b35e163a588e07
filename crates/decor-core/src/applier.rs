use std::any::Any;
use std::fmt::Write as _;

use crate::{NodeError, NodeId};

/// Upcast helper so typed access works through `dyn Node`.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub trait Node: AsAny {
    fn insert_child(&mut self, _child: NodeId) {}

    fn children(&self) -> Vec<NodeId> {
        Vec::new()
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

pub trait Applier {
    fn create(&mut self, node: Box<dyn Node>) -> NodeId;
    fn get_mut(&mut self, id: NodeId) -> Result<&mut dyn Node, NodeError>;
}

/// Arena of nodes addressed by [`NodeId`].
#[derive(Default)]
pub struct MemoryApplier {
    nodes: Vec<Box<dyn Node>>,
}

impl MemoryApplier {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_node<N: Node + 'static, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut N) -> R,
    ) -> Result<R, NodeError> {
        let node: &mut dyn Node = self
            .nodes
            .get_mut(id)
            .ok_or(NodeError::Missing { id })?
            .as_mut();
        let typed = AsAny::as_any_mut(node)
            .downcast_mut::<N>()
            .ok_or(NodeError::TypeMismatch {
                id,
                expected: std::any::type_name::<N>(),
            })?;
        Ok(f(typed))
    }

    /// Like [`with_node`](Self::with_node) but maps a type mismatch to `None`.
    pub fn try_with_node<N: Node + 'static, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut N) -> R,
    ) -> Result<Option<R>, NodeError> {
        match self.with_node(id, f) {
            Ok(value) => Ok(Some(value)),
            Err(NodeError::TypeMismatch { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn dump_tree(&self, root: Option<NodeId>) -> String {
        let mut output = String::new();
        match root {
            Some(root_id) => self.dump_node(&mut output, root_id, 0),
            None => output.push_str("(no root)\n"),
        }
        output
    }

    fn dump_node(&self, output: &mut String, id: NodeId, depth: usize) {
        let indent = "  ".repeat(depth);
        match self.nodes.get(id) {
            Some(node) => {
                let type_name = short_type_name(node.type_name());
                let _ = writeln!(output, "{indent}[{id}] {type_name}");
                for child_id in node.children() {
                    self.dump_node(output, child_id, depth + 1);
                }
            }
            None => {
                let _ = writeln!(output, "{indent}[{id}] (missing)");
            }
        }
    }
}

impl Applier for MemoryApplier {
    fn create(&mut self, node: Box<dyn Node>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut dyn Node, NodeError> {
        let slot = self.nodes.get_mut(id).ok_or(NodeError::Missing { id })?;
        Ok(slot.as_mut())
    }
}

fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
