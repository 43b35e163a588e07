use crate::brush::Brush;
use crate::color::Color;

/// Anything that can paint a shape: a flat color or a brush.
pub trait ShapeStyle: Clone + 'static {
    fn to_brush(&self) -> Brush;
}

impl ShapeStyle for Color {
    fn to_brush(&self) -> Brush {
        Brush::solid(*self)
    }
}

impl ShapeStyle for Brush {
    fn to_brush(&self) -> Brush {
        self.clone()
    }
}
