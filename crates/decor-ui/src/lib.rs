//! Modifier chains, rounded border decorations, widgets, layout and a
//! headless renderer for the decoration stack.

mod debug;
pub mod layout;
mod modifier;
mod renderer;
pub mod screens;
pub mod widgets;

pub use decor_core::{Composition, MemoryApplier, NodeError, NodeId};

pub use debug::{
    format_layout_tree, format_render_scene, log_layout_tree, log_render_scene, log_screen_summary,
};
pub use layout::core::{Arrangement, Constraints, HorizontalAlignment, LinearArrangement};
pub use layout::{measure_text, LayoutBox, LayoutEngine, LayoutTree};
pub use modifier::{
    BackgroundFill, Brush, Color, CornerRadii, DrawFn, DrawPrimitive, DrawScope, EdgeInsets,
    Either, EmptyModifier, Modifier, Point, Rect, RoundedBorder, RoundedCornerShape, ShapeStyle,
    Size, ViewModifier, DEFAULT_BORDER_WIDTH,
};
pub use renderer::{HeadlessRenderer, PaintLayer, RecordedRenderScene, RenderOp};
pub use screens::{conditional_view, content_view};
pub use widgets::{Column, ColumnSpec, Text};

/// Composes `content`, lays it out in `viewport` and records its paint
/// operations.
pub fn render_headless(
    composition: &mut Composition,
    viewport: Size,
    content: impl FnOnce(),
) -> Result<Option<(LayoutTree, RecordedRenderScene)>, decor_core::ComposeError> {
    let Some(root) = composition.render(content)? else {
        return Ok(None);
    };
    let applier = composition.applier_mut();
    let layout = applier.compute_layout(root, viewport)?;
    let scene = HeadlessRenderer::new(applier).render(&layout)?;
    Ok(Some((layout, scene)))
}
