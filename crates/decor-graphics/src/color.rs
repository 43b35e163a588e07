/// Linear RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const BLUE: Color = Color(0.0, 0.478, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);

    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Color(self.0, self.1, self.2, alpha)
    }

    /// Components clamped to the displayable range.
    pub fn to_array(self) -> [f32; 4] {
        [
            self.0.clamp(0.0, 1.0),
            self.1.clamp(0.0, 1.0),
            self.2.clamp(0.0, 1.0),
            self.3.clamp(0.0, 1.0),
        ]
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        let lerp = |start: f32, end: f32| start + (end - start) * t;
        Color(
            lerp(self.0, other.0),
            lerp(self.1, other.1),
            lerp(self.2, other.2),
            lerp(self.3, other.3),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::TRANSPARENT
    }
}
