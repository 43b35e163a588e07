//! Rounded border decorations.
//!
//! The border is painted as an overlay draw command, so it sits on top of
//! the node's content and never changes the node's measured size. Two ways
//! of attaching the same treatment are offered:
//!
//! - [`RoundedBorder`], a reusable decoration value applied with
//!   [`Modifier::apply`] (or handed to the conditional helpers);
//! - [`Modifier::add_border`], a direct chain method.
//!
//! For equal parameters both produce the same paint output.

use super::{Brush, Modifier, RoundedCornerShape, ShapeStyle, ViewModifier};

/// Stroke width used when none is given.
pub const DEFAULT_BORDER_WIDTH: f32 = 1.0;

/// Reusable rounded border decoration.
///
/// ```rust,ignore
/// let framed = Modifier::padding(16.0).apply(RoundedBorder::new(Color::BLACK, 3.0, 5.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RoundedBorder<S: ShapeStyle> {
    style: S,
    width: f32,
    corner_radius: f32,
}

impl<S: ShapeStyle> RoundedBorder<S> {
    pub fn new(style: S, width: f32, corner_radius: f32) -> Self {
        Self {
            style,
            width,
            corner_radius,
        }
    }

    /// A border with the default 1-point stroke.
    pub fn with_radius(style: S, corner_radius: f32) -> Self {
        Self::new(style, DEFAULT_BORDER_WIDTH, corner_radius)
    }
}

impl<S: ShapeStyle> ViewModifier for RoundedBorder<S> {
    fn body(&self, content: Modifier) -> Modifier {
        content.then(stroke_border_overlay(
            self.style.to_brush(),
            self.width,
            self.corner_radius,
        ))
    }
}

impl Modifier {
    /// Overlays a rounded outline of `style` on the node.
    pub fn add_border<S: ShapeStyle>(self, style: S, width: f32, corner_radius: f32) -> Modifier {
        self.then(stroke_border_overlay(style.to_brush(), width, corner_radius))
    }

    /// [`add_border`](Self::add_border) with the default 1-point stroke.
    pub fn add_border_radius<S: ShapeStyle>(self, style: S, corner_radius: f32) -> Modifier {
        self.add_border(style, DEFAULT_BORDER_WIDTH, corner_radius)
    }
}

// Negative widths are passed through untouched; they paint nothing.
fn stroke_border_overlay(brush: Brush, width: f32, corner_radius: f32) -> Modifier {
    let shape = RoundedCornerShape::uniform(corner_radius);
    Modifier::draw_with_content(move |scope| {
        let size = scope.size();
        let radii = shape.resolve(size.width, size.height);
        scope.stroke_border(brush.clone(), radii, width);
    })
}
