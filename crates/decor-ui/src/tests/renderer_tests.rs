use super::*;
use crate::layout::LayoutEngine;
use crate::modifier::{Brush, Color, CornerRadii, Size};
use crate::widgets::{Column, ColumnSpec, Text};
use crate::{content_view, Composition};

const VIEWPORT: Size = Size {
    width: 800.0,
    height: 600.0,
};

fn scene_of(content: impl FnOnce()) -> RecordedRenderScene {
    let mut composition = Composition::new();
    let root = composition
        .render(content)
        .expect("render")
        .expect("root node");
    let applier = composition.applier_mut();
    let layout = applier.compute_layout(root, VIEWPORT).expect("layout");
    HeadlessRenderer::new(applier)
        .render(&layout)
        .expect("render scene")
}

#[test]
fn text_is_painted_inside_its_padding() {
    let scene = scene_of(|| {
        Text("Hello World", Modifier::padding(16.0));
    });
    let texts: Vec<_> = scene.texts().collect();
    assert_eq!(
        texts,
        vec![(
            &Rect {
                x: 16.0,
                y: 16.0,
                width: 88.0,
                height: 20.0,
            },
            "Hello World"
        )]
    );
}

#[test]
fn border_overlay_follows_text() {
    let scene = scene_of(|| {
        Text(
            "Hello World",
            Modifier::padding(16.0).add_border(Color::BLACK, 3.0, 5.0),
        );
    });
    let ops = scene.operations();
    assert_eq!(ops.len(), 2);
    assert!(matches!(ops[0], RenderOp::Text { .. }));
    assert_eq!(ops[1].layer(), PaintLayer::Overlay);
}

#[test]
fn background_with_corners_paints_behind() {
    let scene = scene_of(|| {
        Text(
            "x",
            Modifier::rounded_background(Color::WHITE, 4.0),
        );
    });
    let behind: Vec<_> = scene.primitives_for(PaintLayer::Behind).collect();
    assert_eq!(
        behind,
        vec![&DrawPrimitive::RoundRect {
            rect: Rect {
                x: 0.0,
                y: 0.0,
                width: 8.0,
                height: 20.0,
            },
            brush: Brush::solid(Color::WHITE),
            radii: CornerRadii::uniform(4.0),
        }]
    );
}

#[test]
fn overlays_are_moved_to_window_coordinates() {
    let scene = scene_of(content_view);
    let borders: Vec<_> = scene.primitives_for(PaintLayer::Overlay).collect();
    assert_eq!(borders.len(), 2);
    assert_eq!(
        borders[1],
        &DrawPrimitive::RoundRectBorder {
            rect: Rect {
                x: 340.0,
                y: 304.0,
                width: 120.0,
                height: 52.0,
            },
            brush: Brush::solid(Color::BLUE),
            radii: CornerRadii::uniform(5.0),
            width: 3.0,
        }
    );
}

#[test]
fn container_overlay_paints_after_children() {
    let scene = scene_of(|| {
        Column(
            Modifier::empty().add_border(Color::BLACK, 1.0, 0.0),
            ColumnSpec::default(),
            || {
                Text("a", Modifier::empty());
            },
        );
    });
    let layers: Vec<_> = scene.operations().iter().map(RenderOp::layer).collect();
    assert_eq!(layers, vec![PaintLayer::Content, PaintLayer::Overlay]);
    assert_eq!(scene.operations_for(0).count(), 1);
}
