//! The demo screens.

use crate::layout::core::{HorizontalAlignment, LinearArrangement};
use crate::modifier::{Color, EmptyModifier, Modifier, RoundedBorder};
use crate::widgets::{Column, ColumnSpec, Text};

pub const GREETING: &str = "Hello World";
pub const TEXT_PADDING: f32 = 16.0;
pub const BORDER_WIDTH: f32 = 3.0;
pub const BORDER_RADIUS: f32 = 5.0;
const ITEM_SPACING: f32 = 8.0;

/// Two padded greetings: the first framed by a [`RoundedBorder`] value, the
/// second by [`Modifier::add_border`].
pub fn content_view() {
    centered(|| {
        Text(
            GREETING,
            Modifier::padding(TEXT_PADDING).apply(RoundedBorder::new(
                Color::BLACK,
                BORDER_WIDTH,
                BORDER_RADIUS,
            )),
        );
        Text(
            GREETING,
            Modifier::padding(TEXT_PADDING).add_border(Color::BLUE, BORDER_WIDTH, BORDER_RADIUS),
        );
    });
}

/// Exercises the conditional helpers against `flag`.
///
/// - "Single": black border only while `flag` holds.
/// - "Either": black border when `flag` holds, blue otherwise.
/// - "Mixed": a rounded grey background when `flag` holds, nothing otherwise.
pub fn conditional_view(flag: bool) {
    let black = RoundedBorder::new(Color::BLACK, BORDER_WIDTH, BORDER_RADIUS);
    let blue = RoundedBorder::new(Color::BLUE, BORDER_WIDTH, BORDER_RADIUS);
    centered(move || {
        Text(
            "Single",
            Modifier::padding(TEXT_PADDING).conditional_modifier(flag, black.clone()),
        );
        Text(
            "Either",
            Modifier::padding(TEXT_PADDING).conditional_modifier_either(flag, black, blue),
        );
        Text(
            "Mixed",
            Modifier::padding(TEXT_PADDING).conditional_modifier_either(
                flag,
                Modifier::rounded_background(
                    Color::from_rgba_u8(0xe0, 0xe0, 0xe0, 0xff),
                    BORDER_RADIUS,
                ),
                EmptyModifier,
            ),
        );
    });
}

fn centered(content: impl FnOnce()) {
    Column(
        Modifier::fill_max_size(),
        ColumnSpec::new()
            .vertical_arrangement(LinearArrangement::Center)
            .horizontal_alignment(HorizontalAlignment::CenterHorizontally),
        || {
            Column(
                Modifier::empty(),
                ColumnSpec::new()
                    .vertical_arrangement(LinearArrangement::spaced_by(ITEM_SPACING))
                    .horizontal_alignment(HorizontalAlignment::CenterHorizontally),
                content,
            );
        },
    );
}
