use crate::brush::Brush;
use crate::geometry::{CornerRadii, Rect, Size};

/// A single paint operation recorded by a draw scope.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    RoundRect {
        rect: Rect,
        brush: Brush,
        radii: CornerRadii,
    },
    /// Outline painted inside `rect`: the band between the rounded rect and
    /// the same shape inset by `width`. A non-positive width paints nothing.
    RoundRectBorder {
        rect: Rect,
        brush: Brush,
        radii: CornerRadii,
        width: f32,
    },
}

impl DrawPrimitive {
    pub fn rect(&self) -> Rect {
        match self {
            DrawPrimitive::RoundRect { rect, .. }
            | DrawPrimitive::RoundRectBorder { rect, .. } => *rect,
        }
    }

    pub fn brush(&self) -> &Brush {
        match self {
            DrawPrimitive::RoundRect { brush, .. }
            | DrawPrimitive::RoundRectBorder { brush, .. } => brush,
        }
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        match self {
            DrawPrimitive::RoundRect { rect, brush, radii } => DrawPrimitive::RoundRect {
                rect: rect.translate(dx, dy),
                brush,
                radii,
            },
            DrawPrimitive::RoundRectBorder {
                rect,
                brush,
                radii,
                width,
            } => DrawPrimitive::RoundRectBorder {
                rect: rect.translate(dx, dy),
                brush,
                radii,
                width,
            },
        }
    }
}

/// Drawing surface handed to draw modifiers. Coordinates are local to the
/// decorated node, with `(0, 0)` at its top-left corner.
pub trait DrawScope {
    fn size(&self) -> Size;

    /// Strokes the rounded outline of the scope bounds, keeping the whole
    /// stroke inside them.
    fn stroke_border(&mut self, brush: Brush, radii: CornerRadii, width: f32);
}

/// [`DrawScope`] that records primitives for later replay.
#[derive(Debug, Clone)]
pub struct DrawScopeDefault {
    size: Size,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn stroke_border(&mut self, brush: Brush, radii: CornerRadii, width: f32) {
        self.primitives.push(DrawPrimitive::RoundRectBorder {
            rect: Rect::from_size(self.size),
            brush,
            radii,
            width,
        });
    }
}
