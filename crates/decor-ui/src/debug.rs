//! Text dumps of layout trees and render scenes.

use std::fmt::Write as _;

use crate::layout::{LayoutBox, LayoutTree};
use crate::modifier::{Brush, DrawPrimitive, Rect};
use crate::renderer::{PaintLayer, RecordedRenderScene, RenderOp};

pub fn format_layout_tree(layout: &LayoutTree) -> String {
    let mut output = String::new();
    format_layout_box(&mut output, layout.root(), 0);
    output
}

fn format_layout_box(output: &mut String, layout: &LayoutBox, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(
        output,
        "{indent}[{}] {}",
        layout.node_id,
        format_rect(layout.rect)
    );
    for child in &layout.children {
        format_layout_box(output, child, depth + 1);
    }
}

pub fn format_render_scene(scene: &RecordedRenderScene) -> String {
    let mut output = String::new();
    for (index, op) in scene.operations().iter().enumerate() {
        let _ = match op {
            RenderOp::Primitive {
                node_id,
                layer,
                primitive,
            } => writeln!(
                output,
                "{index:>3} node={node_id} {} {}",
                format_layer(*layer),
                format_primitive(primitive)
            ),
            RenderOp::Text {
                node_id,
                rect,
                value,
            } => writeln!(
                output,
                "{index:>3} node={node_id} content text {value:?} {}",
                format_rect(*rect)
            ),
        };
    }
    output
}

pub fn log_layout_tree(layout: &LayoutTree) {
    log::debug!("layout tree:\n{}", format_layout_tree(layout));
}

pub fn log_render_scene(scene: &RecordedRenderScene) {
    log::debug!(
        "render scene ({} ops):\n{}",
        scene.operations().len(),
        format_render_scene(scene)
    );
}

pub fn log_screen_summary(layout: &LayoutTree, scene: &RecordedRenderScene) {
    let texts = scene.texts().count();
    let borders = scene
        .primitives_for(PaintLayer::Overlay)
        .filter(|primitive| matches!(primitive, DrawPrimitive::RoundRectBorder { .. }))
        .count();
    log::debug!(
        "screen: {} nodes in {}, {} texts, {} borders",
        count_nodes(layout.root()),
        format_rect(layout.root().rect),
        texts,
        borders
    );
}

pub(crate) fn count_nodes(layout: &LayoutBox) -> usize {
    1 + layout.children.iter().map(count_nodes).sum::<usize>()
}

fn format_layer(layer: PaintLayer) -> &'static str {
    match layer {
        PaintLayer::Behind => "behind",
        PaintLayer::Content => "content",
        PaintLayer::Overlay => "overlay",
    }
}

fn format_rect(rect: Rect) -> String {
    format!(
        "({:.1}, {:.1}) {:.1}x{:.1}",
        rect.x, rect.y, rect.width, rect.height
    )
}

fn format_brush(brush: &Brush) -> String {
    match brush {
        Brush::Solid(color) => format!(
            "solid({:.2}, {:.2}, {:.2}, {:.2})",
            color.0, color.1, color.2, color.3
        ),
        Brush::LinearGradient(colors) => format!("linear[{}]", colors.len()),
    }
}

fn format_primitive(primitive: &DrawPrimitive) -> String {
    match primitive {
        DrawPrimitive::RoundRect { rect, brush, radii } => format!(
            "round_rect {} r={:.1} {}",
            format_rect(*rect),
            radii.top_left,
            format_brush(brush)
        ),
        DrawPrimitive::RoundRectBorder {
            rect,
            brush,
            radii,
            width,
        } => format!(
            "border {} r={:.1} w={:.1} {}",
            format_rect(*rect),
            radii.top_left,
            width,
            format_brush(brush)
        ),
    }
}

#[cfg(test)]
#[path = "tests/debug_tests.rs"]
mod tests;
