pub mod core;

use decor_core::{MemoryApplier, Node, NodeError, NodeId};

use self::core::{Arrangement, Constraints};
use crate::modifier::{DimensionConstraint, EdgeInsets, Modifier, Point, Rect, Size};
use crate::widgets::{ColumnNode, TextNode};

/// Width of one character under the headless text metrics.
pub const TEXT_CHAR_WIDTH: f32 = 8.0;
/// Height of one line under the headless text metrics.
pub const TEXT_LINE_HEIGHT: f32 = 20.0;

/// Result of running layout for a node tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTree {
    root: LayoutBox,
}

impl LayoutTree {
    pub fn new(root: LayoutBox) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &LayoutBox {
        &self.root
    }

    /// Depth-first search for the box of `node_id`.
    pub fn find(&self, node_id: NodeId) -> Option<&LayoutBox> {
        self.root.find(node_id)
    }
}

/// Layout information for a single node. `rect` is in window coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox {
    pub node_id: NodeId,
    pub rect: Rect,
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    pub fn new(node_id: NodeId, rect: Rect, children: Vec<LayoutBox>) -> Self {
        Self {
            node_id,
            rect,
            children,
        }
    }

    pub fn find(&self, node_id: NodeId) -> Option<&LayoutBox> {
        if self.node_id == node_id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(node_id))
    }
}

/// Extension trait that equips `MemoryApplier` with layout computation.
pub trait LayoutEngine {
    fn compute_layout(&mut self, root: NodeId, max_size: Size) -> Result<LayoutTree, NodeError>;
}

impl LayoutEngine for MemoryApplier {
    fn compute_layout(&mut self, root: NodeId, max_size: Size) -> Result<LayoutTree, NodeError> {
        let constraints = Constraints::loose(max_size.width, max_size.height);
        let mut builder = LayoutBuilder::new(self);
        let measured = builder.measure_node(root, normalize_constraints(constraints))?;
        Ok(LayoutTree::new(place_node(&measured, Point::ZERO)))
    }
}

/// Size of `text` under the headless metrics: fixed advance per character,
/// one line high.
pub fn measure_text(text: &str) -> Size {
    Size {
        width: text.chars().count() as f32 * TEXT_CHAR_WIDTH,
        height: TEXT_LINE_HEIGHT,
    }
}

struct LayoutBuilder<'a> {
    applier: &'a mut MemoryApplier,
}

impl<'a> LayoutBuilder<'a> {
    fn new(applier: &'a mut MemoryApplier) -> Self {
        Self { applier }
    }

    fn measure_node(
        &mut self,
        node_id: NodeId,
        constraints: Constraints,
    ) -> Result<MeasuredNode, NodeError> {
        if let Some(column) = try_clone::<ColumnNode>(self.applier, node_id)? {
            return self.measure_column(node_id, column, constraints);
        }
        if let Some(text) = try_clone::<TextNode>(self.applier, node_id)? {
            let base = measure_text(&text.text);
            return Ok(measure_leaf(node_id, &text.modifier, base, constraints));
        }
        log::warn!("node {node_id} has no layout behaviour; sizing it to zero");
        Ok(MeasuredNode::new(node_id, Size::ZERO, Vec::new()))
    }

    fn measure_column(
        &mut self,
        node_id: NodeId,
        node: ColumnNode,
        constraints: Constraints,
    ) -> Result<MeasuredNode, NodeError> {
        let props = node.modifier.layout_properties();
        let padding = props.padding();
        let inner_constraints = subtract_padding(constraints, padding);
        let child_constraints = Constraints {
            min_height: 0.0,
            ..inner_constraints
        };

        let mut measured_children = Vec::with_capacity(node.children.len());
        for child_id in node.children.iter().copied() {
            let child = self.measure_node(child_id, child_constraints)?;
            measured_children.push(enforce_child_constraints(child, child_constraints));
        }
        let child_heights: Vec<f32> = measured_children
            .iter()
            .map(|child| child.size.height)
            .collect();

        let spacing = node.vertical_arrangement.spacing();
        let total_spacing = spacing * measured_children.len().saturating_sub(1) as f32;
        let content_height = child_heights.iter().sum::<f32>() + total_spacing;
        let content_width = measured_children
            .iter()
            .fold(0.0_f32, |acc, child| acc.max(child.size.width));

        let width = resolve_dimension(
            content_width + padding.horizontal_sum(),
            props.width(),
            constraints.min_width,
            constraints.max_width,
        );
        let height = resolve_dimension(
            content_height + padding.vertical_sum(),
            props.height(),
            constraints.min_height,
            constraints.max_height,
        );

        let available_width = (width - padding.horizontal_sum()).max(0.0);
        let available_height = (height - padding.vertical_sum()).max(0.0);
        let mut positions = vec![0.0; measured_children.len()];
        node.vertical_arrangement
            .arrange(available_height, &child_heights, &mut positions);

        let children = measured_children
            .into_iter()
            .zip(positions)
            .map(|(child, y)| {
                let x = node
                    .horizontal_alignment
                    .align(available_width, child.size.width);
                MeasuredChild {
                    offset: Point {
                        x: padding.left + x,
                        y: padding.top + y,
                    },
                    node: child,
                }
            })
            .collect();

        Ok(MeasuredNode::new(node_id, Size { width, height }, children))
    }
}

#[derive(Debug, Clone)]
struct MeasuredNode {
    node_id: NodeId,
    size: Size,
    children: Vec<MeasuredChild>,
}

impl MeasuredNode {
    fn new(node_id: NodeId, size: Size, children: Vec<MeasuredChild>) -> Self {
        Self {
            node_id,
            size,
            children,
        }
    }
}

#[derive(Debug, Clone)]
struct MeasuredChild {
    node: MeasuredNode,
    offset: Point,
}

fn place_node(node: &MeasuredNode, origin: Point) -> LayoutBox {
    let rect = Rect::from_origin_size(origin, node.size);
    let children = node
        .children
        .iter()
        .map(|child| {
            let child_origin = Point {
                x: origin.x + child.offset.x,
                y: origin.y + child.offset.y,
            };
            place_node(&child.node, child_origin)
        })
        .collect();
    LayoutBox::new(node.node_id, rect, children)
}

fn measure_leaf(
    node_id: NodeId,
    modifier: &Modifier,
    base_size: Size,
    constraints: Constraints,
) -> MeasuredNode {
    let props = modifier.layout_properties();
    let padding = props.padding();
    let width = resolve_dimension(
        base_size.width + padding.horizontal_sum(),
        props.width(),
        constraints.min_width,
        constraints.max_width,
    );
    let height = resolve_dimension(
        base_size.height + padding.vertical_sum(),
        props.height(),
        constraints.min_height,
        constraints.max_height,
    );
    MeasuredNode::new(node_id, Size { width, height }, Vec::new())
}

fn enforce_child_constraints(mut child: MeasuredNode, constraints: Constraints) -> MeasuredNode {
    child.size.width = clamp_dimension(
        child.size.width,
        constraints.min_width,
        constraints.max_width,
    );
    child.size.height = clamp_dimension(
        child.size.height,
        constraints.min_height,
        constraints.max_height,
    );
    child
}

fn subtract_padding(constraints: Constraints, padding: EdgeInsets) -> Constraints {
    let horizontal = padding.horizontal_sum();
    let vertical = padding.vertical_sum();
    let shrink = |value: f32, by: f32| {
        if value.is_finite() {
            (value - by).max(0.0)
        } else {
            value
        }
    };
    normalize_constraints(Constraints {
        min_width: (constraints.min_width - horizontal).max(0.0),
        max_width: shrink(constraints.max_width, horizontal),
        min_height: (constraints.min_height - vertical).max(0.0),
        max_height: shrink(constraints.max_height, vertical),
    })
}

fn resolve_dimension(
    base: f32,
    explicit: DimensionConstraint,
    min_limit: f32,
    max_limit: f32,
) -> f32 {
    let size = match explicit {
        DimensionConstraint::Fill(fraction) if max_limit.is_finite() => {
            max_limit * fraction.clamp(0.0, 1.0)
        }
        DimensionConstraint::Fill(_) | DimensionConstraint::Unspecified => base,
    };
    clamp_dimension(size, min_limit, max_limit).max(0.0)
}

fn clamp_dimension(value: f32, min: f32, max: f32) -> f32 {
    let mut result = value.max(min);
    if max.is_finite() {
        result = result.min(max);
    }
    result
}

fn normalize_constraints(mut constraints: Constraints) -> Constraints {
    if constraints.max_width < constraints.min_width {
        constraints.max_width = constraints.min_width;
    }
    if constraints.max_height < constraints.min_height {
        constraints.max_height = constraints.min_height;
    }
    constraints
}

fn try_clone<T: Node + Clone + 'static>(
    applier: &mut MemoryApplier,
    node_id: NodeId,
) -> Result<Option<T>, NodeError> {
    applier.try_with_node(node_id, |node: &mut T| node.clone())
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
