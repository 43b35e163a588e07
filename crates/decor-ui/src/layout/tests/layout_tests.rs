use super::core::{HorizontalAlignment, LinearArrangement};
use super::*;
use crate::widgets::{Column, ColumnSpec, Text};
use crate::{content_view, Color, Composition};

const VIEWPORT: Size = Size {
    width: 800.0,
    height: 600.0,
};

fn layout_of(content: impl FnOnce()) -> LayoutTree {
    let mut composition = Composition::new();
    let root = composition
        .render(content)
        .expect("render")
        .expect("root node");
    composition
        .applier_mut()
        .compute_layout(root, VIEWPORT)
        .expect("layout")
}

#[test]
fn text_uses_fixed_metrics() {
    assert_eq!(
        measure_text("Hello World"),
        Size {
            width: 88.0,
            height: 20.0,
        }
    );
    assert_eq!(measure_text("").width, 0.0);
}

#[test]
fn padding_grows_text_bounds() {
    let tree = layout_of(|| {
        Text("Hello World", Modifier::padding(16.0));
    });
    assert_eq!(
        tree.root().rect,
        Rect {
            x: 0.0,
            y: 0.0,
            width: 120.0,
            height: 52.0,
        }
    );
}

#[test]
fn border_keeps_the_padded_bounds() {
    let plain = layout_of(|| {
        Text("Hello World", Modifier::padding(16.0));
    });
    let bordered = layout_of(|| {
        Text(
            "Hello World",
            Modifier::padding(16.0).add_border(Color::BLUE, 3.0, 5.0),
        );
    });
    assert_eq!(plain.root().rect, bordered.root().rect);
}

#[test]
fn column_stacks_children_with_spacing() {
    let tree = layout_of(|| {
        Column(
            Modifier::empty(),
            ColumnSpec::new().vertical_arrangement(LinearArrangement::spaced_by(8.0)),
            || {
                Text("ab", Modifier::empty());
                Text("abcd", Modifier::empty());
            },
        );
    });
    let root = tree.root();
    assert_eq!(root.rect.size(), Size::new(32.0, 48.0));
    assert_eq!(root.children[0].rect.y, 0.0);
    assert_eq!(root.children[1].rect.y, 28.0);
}

#[test]
fn fill_max_size_takes_the_viewport() {
    let tree = layout_of(|| {
        Column(Modifier::fill_max_size(), ColumnSpec::default(), || {
            Text("x", Modifier::empty());
        });
    });
    assert_eq!(tree.root().rect.size(), VIEWPORT);
}

#[test]
fn content_view_centers_both_greetings() {
    let tree = layout_of(content_view);
    let inner = &tree.root().children[0];
    assert_eq!(inner.rect.size(), Size::new(120.0, 112.0));

    let first = inner.children[0].rect;
    let second = inner.children[1].rect;
    assert_eq!(
        first,
        Rect {
            x: 340.0,
            y: 244.0,
            width: 120.0,
            height: 52.0,
        }
    );
    assert_eq!(second.x, 340.0);
    assert_eq!(second.y, 304.0);
}

#[test]
fn center_alignment_offsets_narrow_children() {
    let tree = layout_of(|| {
        Column(
            Modifier::fill_max_size_fraction(0.125),
            ColumnSpec::new().horizontal_alignment(HorizontalAlignment::CenterHorizontally),
            || {
                Text("ab", Modifier::empty());
            },
        );
    });
    assert_eq!(tree.root().children[0].rect.x, 42.0);
}

#[test]
fn find_locates_nested_boxes() {
    let tree = layout_of(content_view);
    assert_eq!(tree.find(3).map(|layout| layout.node_id), Some(3));
    assert!(tree.find(42).is_none());
}

#[test]
fn resolve_dimension_clamps_to_limits() {
    assert_eq!(
        resolve_dimension(900.0, DimensionConstraint::Unspecified, 0.0, 800.0),
        800.0
    );
    assert_eq!(
        resolve_dimension(50.0, DimensionConstraint::Unspecified, 120.0, 800.0),
        120.0
    );
    assert_eq!(
        resolve_dimension(50.0, DimensionConstraint::Fill(0.5), 0.0, 800.0),
        400.0
    );
    assert_eq!(
        resolve_dimension(50.0, DimensionConstraint::Fill(0.5), 0.0, f32::INFINITY),
        50.0
    );
}
