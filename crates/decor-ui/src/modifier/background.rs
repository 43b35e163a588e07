//! Filled backgrounds.
//!
//! A fill is the non-border decoration the demo swaps in with
//! [`Modifier::conditional_modifier_either`]: it paints underneath the
//! content instead of on top of it, and like a border it never affects
//! layout.

use super::{Color, DrawPrimitive, ModOp, Modifier, Rect, RoundedCornerShape};
use decor_graphics::Brush;

/// Solid color painted behind a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundFill {
    pub color: Color,
    pub shape: RoundedCornerShape,
}

impl BackgroundFill {
    /// The primitive covering `rect`, with corner radii clamped to it.
    pub fn primitive(&self, rect: Rect) -> DrawPrimitive {
        DrawPrimitive::RoundRect {
            rect,
            brush: Brush::solid(self.color),
            radii: self.shape.resolve(rect.width, rect.height),
        }
    }
}

impl Modifier {
    /// A background whose corners are rounded by `corner_radius`.
    pub fn rounded_background(color: Color, corner_radius: f32) -> Self {
        Self::with_op(ModOp::Background(BackgroundFill {
            color,
            shape: RoundedCornerShape::uniform(corner_radius),
        }))
    }

    /// The fill that gets painted: the last background in the chain wins.
    pub fn background_fill(&self) -> Option<BackgroundFill> {
        self.0.iter().rev().find_map(|op| match op {
            ModOp::Background(fill) => Some(*fill),
            _ => None,
        })
    }
}
