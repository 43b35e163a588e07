use super::*;

const CARD: Size = Size {
    width: 120.0,
    height: 52.0,
};

fn overlay_primitives(modifier: &Modifier, size: Size) -> Vec<DrawPrimitive> {
    modifier
        .overlays()
        .into_iter()
        .flat_map(|func| func(size))
        .collect()
}

fn border_brush(modifier: &Modifier) -> Brush {
    let primitives = overlay_primitives(modifier, CARD);
    assert_eq!(primitives.len(), 1, "expected exactly one overlay");
    primitives[0].brush().clone()
}

#[test]
fn padding_values_accumulate_per_edge() {
    let modifier = Modifier::padding(4.0)
        .then(Modifier::padding_horizontal(2.0))
        .then(Modifier::padding_each(1.0, 3.0, 5.0, 7.0));
    assert_eq!(
        modifier.padding_values(),
        EdgeInsets {
            left: 7.0,
            top: 7.0,
            right: 11.0,
            bottom: 11.0,
        }
    );
}

#[test]
fn fill_max_size_sets_fraction_constraints() {
    let props = Modifier::fill_max_size_fraction(0.75).layout_properties();
    assert_eq!(props.width(), DimensionConstraint::Fill(0.75));
    assert_eq!(props.height(), DimensionConstraint::Fill(0.75));
}

#[test]
fn then_with_empty_keeps_the_same_chain() {
    let base = Modifier::padding(8.0);
    assert_eq!(base.then(Modifier::empty()), base);
    assert_eq!(Modifier::empty().then(base.clone()), base);
}

#[test]
fn border_is_an_overlay_that_leaves_layout_alone() {
    let plain = Modifier::padding(16.0);
    let bordered = plain.clone().add_border(Color::BLACK, 3.0, 5.0);
    assert_eq!(bordered.layout_properties(), plain.layout_properties());
    assert_eq!(bordered.len(), 2);
    assert_eq!(bordered.overlays().len(), 1);
    assert_eq!(bordered.background_fill(), None);
}

#[test]
fn border_strokes_the_full_node_bounds() {
    let modifier = Modifier::padding(16.0).add_border(Color::BLACK, 3.0, 5.0);
    assert_eq!(
        overlay_primitives(&modifier, CARD),
        vec![DrawPrimitive::RoundRectBorder {
            rect: Rect::from_size(CARD),
            brush: Brush::solid(Color::BLACK),
            radii: CornerRadii::uniform(5.0),
            width: 3.0,
        }]
    );
}

#[test]
fn corner_radius_is_clamped_to_the_node() {
    let modifier = Modifier::empty().add_border(Color::BLUE, 2.0, 80.0);
    let primitives = overlay_primitives(&modifier, CARD);
    match &primitives[0] {
        DrawPrimitive::RoundRectBorder { radii, .. } => {
            assert_eq!(*radii, CornerRadii::uniform(26.0));
        }
        other => panic!("unexpected primitive: {other:?}"),
    }
}

#[test]
fn negative_width_is_recorded_as_given() {
    let modifier = Modifier::empty().add_border(Color::BLACK, -2.0, 5.0);
    match &overlay_primitives(&modifier, CARD)[0] {
        DrawPrimitive::RoundRectBorder { width, .. } => assert_eq!(*width, -2.0),
        other => panic!("unexpected primitive: {other:?}"),
    }
}

#[test]
fn default_width_is_one_point() {
    let via_method = Modifier::empty().add_border_radius(Color::BLACK, 4.0);
    let via_value = Modifier::empty().apply(RoundedBorder::with_radius(Color::BLACK, 4.0));
    for modifier in [via_method, via_value] {
        match &overlay_primitives(&modifier, CARD)[0] {
            DrawPrimitive::RoundRectBorder { width, .. } => {
                assert_eq!(*width, DEFAULT_BORDER_WIDTH);
            }
            other => panic!("unexpected primitive: {other:?}"),
        }
    }
}

#[test]
fn decorator_value_and_chain_method_paint_the_same() {
    let gradient = Brush::linear_gradient(vec![Color::BLUE, Color::BLACK]);
    let via_value =
        Modifier::padding(16.0).apply(RoundedBorder::new(gradient.clone(), 3.0, 5.0));
    let via_method = Modifier::padding(16.0).add_border(gradient, 3.0, 5.0);
    assert_eq!(
        overlay_primitives(&via_value, CARD),
        overlay_primitives(&via_method, CARD)
    );
    assert_eq!(via_value.layout_properties(), via_method.layout_properties());
}

#[test]
fn conditional_false_returns_the_original_chain() {
    let base = Modifier::padding(16.0);
    let result = base
        .clone()
        .conditional_modifier(false, RoundedBorder::new(Color::BLACK, 3.0, 5.0));
    assert_eq!(result, base);
}

#[test]
fn conditional_true_matches_direct_decoration() {
    let border = RoundedBorder::new(Color::BLACK, 3.0, 5.0);
    let conditional = Modifier::padding(16.0).conditional_modifier(true, &border);
    let direct = Modifier::padding(16.0).apply(&border);
    assert_eq!(
        overlay_primitives(&conditional, CARD),
        overlay_primitives(&direct, CARD)
    );
}

#[test]
fn either_helper_applies_exactly_one_side() {
    let black = RoundedBorder::new(Color::BLACK, 3.0, 5.0);
    let blue = RoundedBorder::new(Color::BLUE, 3.0, 5.0);

    let when_true = Modifier::padding(16.0).conditional_modifier_either(true, &black, &blue);
    let when_false = Modifier::padding(16.0).conditional_modifier_either(false, &black, &blue);

    assert_eq!(border_brush(&when_true), Brush::solid(Color::BLACK));
    assert_eq!(border_brush(&when_false), Brush::solid(Color::BLUE));
}

#[test]
fn either_mixes_decoration_types() {
    for highlighted in [true, false] {
        let decoration = Either::select(
            highlighted,
            RoundedBorder::new(Color::BLUE, 3.0, 5.0),
            Modifier::rounded_background(Color::WHITE, 5.0),
        );
        let modifier = Modifier::padding(16.0).apply(decoration);
        assert_eq!(modifier.overlays().len(), usize::from(highlighted));
        assert_eq!(modifier.background_fill().is_some(), !highlighted);
        assert_eq!(modifier.padding_values(), EdgeInsets::uniform(16.0));
    }
}

#[test]
fn absent_decorations_are_identity() {
    let base = Modifier::padding(16.0);
    assert_eq!(base.clone().apply(EmptyModifier), base);
    assert_eq!(base.clone().apply(None::<RoundedBorder<Color>>), base);
    let some = base
        .clone()
        .apply(Some(RoundedBorder::new(Color::BLACK, 3.0, 5.0)));
    assert_eq!(some.overlays().len(), 1);
}

#[test]
fn later_background_wins() {
    let modifier = Modifier::rounded_background(Color::BLACK, 2.0)
        .then(Modifier::rounded_background(Color::WHITE, 4.0));
    assert_eq!(
        modifier.background_fill(),
        Some(BackgroundFill {
            color: Color::WHITE,
            shape: RoundedCornerShape::uniform(4.0),
        })
    );
}

#[test]
fn either_swaps_rounded_fill_for_border() {
    let grey = Color::from_rgba_u8(0xe0, 0xe0, 0xe0, 0xff);
    let fill = Modifier::padding(16.0).conditional_modifier_either(
        true,
        Modifier::rounded_background(grey, 5.0),
        RoundedBorder::new(Color::BLACK, 3.0, 5.0),
    );
    let stroke = Modifier::padding(16.0).conditional_modifier_either(
        false,
        Modifier::rounded_background(grey, 5.0),
        RoundedBorder::new(Color::BLACK, 3.0, 5.0),
    );

    let painted = fill
        .background_fill()
        .map(|bg| bg.primitive(Rect::from_size(CARD)));
    assert_eq!(
        painted,
        Some(DrawPrimitive::RoundRect {
            rect: Rect::from_size(CARD),
            brush: Brush::solid(grey),
            radii: CornerRadii::uniform(5.0),
        })
    );
    assert!(fill.overlays().is_empty());
    assert_eq!(stroke.background_fill(), None);
    assert_eq!(border_brush(&stroke), Brush::solid(Color::BLACK));
    assert_eq!(fill.layout_properties(), stroke.layout_properties());
}
