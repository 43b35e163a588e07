use crate::color::Color;
use crate::geometry::Rect;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Colors spread evenly from the top edge to the bottom edge.
    LinearGradient(Vec<Color>),
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn linear_gradient(colors: Vec<Color>) -> Self {
        Brush::LinearGradient(colors)
    }

    /// Color at height `y` of a shape occupying `rect`.
    pub fn sample(&self, rect: Rect, y: f32) -> Color {
        match self {
            Brush::Solid(color) => *color,
            Brush::LinearGradient(colors) => {
                let t = if rect.height.abs() <= f32::EPSILON {
                    0.0
                } else {
                    ((y - rect.y) / rect.height).clamp(0.0, 1.0)
                };
                interpolate_colors(colors, t)
            }
        }
    }
}

fn interpolate_colors(colors: &[Color], t: f32) -> Color {
    let (first, last) = match (colors.first(), colors.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Color::TRANSPARENT,
    };
    if colors.len() == 1 {
        return first;
    }
    let segments = (colors.len() - 1) as f32;
    let scaled = t.clamp(0.0, 1.0) * segments;
    let index = scaled.floor() as usize;
    if index >= colors.len() - 1 {
        return last;
    }
    colors[index].lerp(colors[index + 1], scaled - index as f32)
}
