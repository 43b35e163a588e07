use decor_graphics::{Brush, Color, CornerRadii, DrawPrimitive, EdgeInsets, Rect};
use decor_ui::{RecordedRenderScene, RenderOp};
use once_cell::sync::OnceCell;
use rusttype::{point, Font, Scale};

use crate::font::{installed_font, TEXT_SIZE};
use crate::RenderError;

const TEXT_COLOR: Color = Color::BLACK;

static MISSING_FONT_WARNING: OnceCell<()> = OnceCell::new();

/// A borrowed RGBA8 frame buffer of known dimensions.
pub struct FrameTarget<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameTarget<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Result<Self, RenderError> {
        let expected = width as usize * height as usize * 4;
        if frame.len() != expected {
            return Err(RenderError::FrameSize {
                width,
                height,
                expected,
                actual: frame.len(),
            });
        }
        Ok(Self {
            frame,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA value at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.index(x as i32, y as i32)?;
        let mut out = [0; 4];
        out.copy_from_slice(&self.frame[idx..idx + 4]);
        Some(out)
    }

    pub fn fill(&mut self, color: Color) {
        let rgba = to_rgba8(color.to_array());
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(((y as u32 * self.width + x as u32) * 4) as usize)
    }

    /// Source-over blend of `color` onto the pixel at `(x, y)`.
    fn blend(&mut self, x: i32, y: i32, color: [f32; 4]) {
        let alpha = color[3];
        if alpha <= 0.0 {
            return;
        }
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let existing = &mut self.frame[idx..idx + 4];
        for i in 0..3 {
            let dst = existing[i] as f32 / 255.0;
            let blended = color[i] * alpha + dst * (1.0 - alpha);
            existing[i] = (blended.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
        let dst_alpha = existing[3] as f32 / 255.0;
        let out_alpha = alpha + dst_alpha * (1.0 - alpha);
        existing[3] = (out_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
}

/// Clears `frame` to `background` and paints every operation of `scene` in
/// order. Text is skipped when no font has been loaded.
pub fn draw_scene(
    frame: &mut [u8],
    width: u32,
    height: u32,
    scene: &RecordedRenderScene,
    background: Color,
) -> Result<(), RenderError> {
    let mut target = FrameTarget::new(frame, width, height)?;
    target.fill(background);
    for op in scene.operations() {
        match op {
            RenderOp::Primitive { primitive, .. } => draw_primitive(&mut target, primitive),
            RenderOp::Text { rect, value, .. } => match installed_font() {
                Some(font) => draw_text(&mut target, font, *rect, value),
                None => {
                    MISSING_FONT_WARNING
                        .get_or_init(|| log::warn!("no font loaded; text will not be drawn"));
                }
            },
        }
    }
    Ok(())
}

fn draw_primitive(target: &mut FrameTarget<'_>, primitive: &DrawPrimitive) {
    match primitive {
        DrawPrimitive::RoundRect { rect, brush, radii } => {
            fill_region(target, *rect, brush, |x, y| rect.contains_rounded(*radii, x, y));
        }
        DrawPrimitive::RoundRectBorder {
            rect,
            brush,
            radii,
            width,
        } => {
            if width.is_nan() || *width <= 0.0 {
                return;
            }
            let (inner, inner_radii) = border_inner_edge(*rect, *radii, *width);
            fill_region(target, *rect, brush, |x, y| {
                rect.contains_rounded(*radii, x, y)
                    && !inner.is_some_and(|inner| inner.contains_rounded(inner_radii, x, y))
            });
        }
    }
}

/// The hole left inside a border stroke, if the stroke does not cover the
/// whole shape.
fn border_inner_edge(rect: Rect, radii: CornerRadii, width: f32) -> (Option<Rect>, CornerRadii) {
    let inner = rect.inset(EdgeInsets::uniform(width));
    let hole = (inner.width > 0.0 && inner.height > 0.0).then_some(inner);
    (hole, radii.shrink(width))
}

/// Paints every pixel of `bounds` whose center satisfies `inside`.
fn fill_region(
    target: &mut FrameTarget<'_>,
    bounds: Rect,
    brush: &Brush,
    inside: impl Fn(f32, f32) -> bool,
) {
    let start_x = bounds.x.max(0.0).floor() as i32;
    let start_y = bounds.y.max(0.0).floor() as i32;
    let end_x = (bounds.x + bounds.width).min(target.width as f32).ceil() as i32;
    let end_y = (bounds.y + bounds.height).min(target.height as f32).ceil() as i32;
    for py in start_y..end_y {
        for px in start_x..end_x {
            let point_x = px as f32 + 0.5;
            let point_y = py as f32 + 0.5;
            if !inside(point_x, point_y) {
                continue;
            }
            let color = brush.sample(bounds, point_y).to_array();
            target.blend(px, py, color);
        }
    }
}

fn draw_text(target: &mut FrameTarget<'_>, font: &Font<'static>, rect: Rect, text: &str) {
    let color = TEXT_COLOR.to_array();
    let scale = Scale::uniform(TEXT_SIZE);
    let v_metrics = font.v_metrics(scale);
    let offset = point(rect.x, rect.y + v_metrics.ascent);
    for glyph in font.layout(text, scale, offset) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                target.blend(px, py, [color[0], color[1], color[2], color[3] * coverage]);
            });
        }
    }
}

fn to_rgba8(color: [f32; 4]) -> [u8; 4] {
    color.map(|component| (component * 255.0).round() as u8)
}

#[cfg(test)]
#[path = "tests/raster_tests.rs"]
mod tests;
