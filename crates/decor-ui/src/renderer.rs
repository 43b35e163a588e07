use crate::layout::{LayoutBox, LayoutTree};
use crate::modifier::{DrawPrimitive, Modifier, Rect};
use crate::widgets::{ColumnNode, TextNode};
use decor_core::{MemoryApplier, Node, NodeError, NodeId};

/// Where an operation sits relative to the node's own content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintLayer {
    Behind,
    Content,
    Overlay,
}

/// A paint operation emitted by the headless renderer, in window coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Primitive {
        node_id: NodeId,
        layer: PaintLayer,
        primitive: DrawPrimitive,
    },
    /// A line of text. `rect` is the node's content area, with padding
    /// already removed.
    Text {
        node_id: NodeId,
        rect: Rect,
        value: String,
    },
}

impl RenderOp {
    pub fn node_id(&self) -> NodeId {
        match self {
            RenderOp::Primitive { node_id, .. } | RenderOp::Text { node_id, .. } => *node_id,
        }
    }

    pub fn layer(&self) -> PaintLayer {
        match self {
            RenderOp::Primitive { layer, .. } => *layer,
            RenderOp::Text { .. } => PaintLayer::Content,
        }
    }
}

/// A collection of render operations for a composed scene, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedRenderScene {
    operations: Vec<RenderOp>,
}

impl RecordedRenderScene {
    pub fn new(operations: Vec<RenderOp>) -> Self {
        Self { operations }
    }

    pub fn operations(&self) -> &[RenderOp] {
        &self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Primitives painted on `layer`, in paint order.
    pub fn primitives_for(&self, layer: PaintLayer) -> impl Iterator<Item = &DrawPrimitive> {
        self.operations.iter().filter_map(move |op| match op {
            RenderOp::Primitive {
                layer: op_layer,
                primitive,
                ..
            } if *op_layer == layer => Some(primitive),
            _ => None,
        })
    }

    /// All operations recorded for `node_id`.
    pub fn operations_for(&self, node_id: NodeId) -> impl Iterator<Item = &RenderOp> {
        self.operations
            .iter()
            .filter(move |op| op.node_id() == node_id)
    }

    /// Text values in paint order.
    pub fn texts(&self) -> impl Iterator<Item = (&Rect, &str)> {
        self.operations.iter().filter_map(|op| match op {
            RenderOp::Text { rect, value, .. } => Some((rect, value.as_str())),
            _ => None,
        })
    }
}

/// Walks the layout tree and materialises paint commands.
pub struct HeadlessRenderer<'a> {
    applier: &'a mut MemoryApplier,
}

impl<'a> HeadlessRenderer<'a> {
    pub fn new(applier: &'a mut MemoryApplier) -> Self {
        Self { applier }
    }

    pub fn render(&mut self, tree: &LayoutTree) -> Result<RecordedRenderScene, NodeError> {
        let mut operations = Vec::new();
        self.render_box(tree.root(), &mut operations)?;
        Ok(RecordedRenderScene::new(operations))
    }

    fn render_box(
        &mut self,
        layout: &LayoutBox,
        operations: &mut Vec<RenderOp>,
    ) -> Result<(), NodeError> {
        let rect = layout.rect;
        if let Some(snapshot) = self.text_snapshot(layout.node_id)? {
            let (mut behind, mut overlay) =
                evaluate_modifier(layout.node_id, &snapshot.modifier, rect);
            operations.append(&mut behind);
            operations.push(RenderOp::Text {
                node_id: layout.node_id,
                rect: rect.inset(snapshot.modifier.padding_values()),
                value: snapshot.value,
            });
            operations.append(&mut overlay);
            return Ok(());
        }

        let (mut behind, mut overlay) = match self.container_modifier(layout.node_id)? {
            Some(modifier) => evaluate_modifier(layout.node_id, &modifier, rect),
            None => (Vec::new(), Vec::new()),
        };
        operations.append(&mut behind);
        for child in &layout.children {
            self.render_box(child, operations)?;
        }
        operations.append(&mut overlay);
        Ok(())
    }

    fn container_modifier(&mut self, node_id: NodeId) -> Result<Option<Modifier>, NodeError> {
        self.read_node::<ColumnNode, _>(node_id, |node| node.modifier.clone())
    }

    fn text_snapshot(&mut self, node_id: NodeId) -> Result<Option<TextSnapshot>, NodeError> {
        self.read_node::<TextNode, _>(node_id, |node| TextSnapshot {
            modifier: node.modifier.clone(),
            value: node.text.clone(),
        })
    }

    fn read_node<T: Node + 'static, R>(
        &mut self,
        node_id: NodeId,
        f: impl FnOnce(&T) -> R,
    ) -> Result<Option<R>, NodeError> {
        self.applier.try_with_node(node_id, |node: &mut T| f(node))
    }
}

struct TextSnapshot {
    modifier: Modifier,
    value: String,
}

fn evaluate_modifier(
    node_id: NodeId,
    modifier: &Modifier,
    rect: Rect,
) -> (Vec<RenderOp>, Vec<RenderOp>) {
    let mut behind = Vec::new();
    let mut overlay = Vec::new();

    if let Some(fill) = modifier.background_fill() {
        behind.push(RenderOp::Primitive {
            node_id,
            layer: PaintLayer::Behind,
            primitive: fill.primitive(rect),
        });
    }

    let size = rect.size();
    for func in modifier.overlays() {
        overlay.extend(func(size).into_iter().map(|primitive| RenderOp::Primitive {
            node_id,
            layer: PaintLayer::Overlay,
            primitive: primitive.translate(rect.x, rect.y),
        }));
    }

    (behind, overlay)
}

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod tests;
