use super::*;
use crate::layout::LayoutBox;
use crate::modifier::{Color, Rect};

#[test]
fn count_nodes_includes_descendants() {
    let empty_rect = Rect::default();

    let root = LayoutBox {
        node_id: 0,
        rect: empty_rect,
        children: vec![
            LayoutBox::new(1, empty_rect, vec![]),
            LayoutBox::new(2, empty_rect, vec![LayoutBox::new(3, empty_rect, vec![])]),
        ],
    };

    assert_eq!(count_nodes(&root), 4);
}

#[test]
fn layout_tree_is_indented_by_depth() {
    let tree = LayoutTree::new(LayoutBox::new(
        0,
        Rect {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0,
        },
        vec![LayoutBox::new(
            1,
            Rect {
                x: 340.0,
                y: 244.0,
                width: 120.0,
                height: 52.0,
            },
            vec![],
        )],
    ));
    assert_eq!(
        format_layout_tree(&tree),
        "[0] (0.0, 0.0) 800.0x600.0\n  [1] (340.0, 244.0) 120.0x52.0\n"
    );
}

#[test]
fn render_scene_lists_borders() {
    let scene = RecordedRenderScene::new(vec![RenderOp::Primitive {
        node_id: 2,
        layer: PaintLayer::Overlay,
        primitive: DrawPrimitive::RoundRectBorder {
            rect: Rect {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 10.0,
            },
            brush: Brush::solid(Color::BLACK),
            radii: crate::modifier::CornerRadii::uniform(5.0),
            width: 3.0,
        },
    }]);
    let text = format_render_scene(&scene);
    assert!(text.contains("node=2 overlay border"), "{text}");
    assert!(text.contains("r=5.0 w=3.0"), "{text}");
}
