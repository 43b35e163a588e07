use std::ops::AddAssign;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::from_origin_size(Point::ZERO, size)
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Shrinks the rect by `insets` on each edge. Width and height never go
    /// below zero.
    pub fn inset(&self, insets: EdgeInsets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: (self.width - insets.horizontal_sum()).max(0.0),
            height: (self.height - insets.vertical_sum()).max(0.0),
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }

    /// Whether `(x, y)` lies inside the rect with the given corners rounded off.
    pub fn contains_rounded(&self, radii: CornerRadii, x: f32, y: f32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let right = self.x + self.width;
        let bottom = self.y + self.height;
        let corners = [
            (
                radii.top_left,
                self.x + radii.top_left,
                self.y + radii.top_left,
            ),
            (
                radii.top_right,
                right - radii.top_right,
                self.y + radii.top_right,
            ),
            (
                radii.bottom_right,
                right - radii.bottom_right,
                bottom - radii.bottom_right,
            ),
            (
                radii.bottom_left,
                self.x + radii.bottom_left,
                bottom - radii.bottom_left,
            ),
        ];
        for (index, (radius, cx, cy)) in corners.into_iter().enumerate() {
            if radius <= 0.0 {
                continue;
            }
            let in_corner_x = if index == 0 || index == 3 {
                x < cx
            } else {
                x > cx
            };
            let in_corner_y = if index < 2 { y < cy } else { y > cy };
            if in_corner_x && in_corner_y {
                let dx = x - cx;
                let dy = y - cy;
                return dx * dx + dy * dy <= radius * radius;
            }
        }
        true
    }
}

/// Padding values for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub fn uniform(all: f32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn horizontal(horizontal: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            ..Self::default()
        }
    }

    pub fn from_components(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

impl AddAssign for EdgeInsets {
    fn add_assign(&mut self, rhs: Self) {
        self.left += rhs.left;
        self.top += rhs.top;
        self.right += rhs.right;
        self.bottom += rhs.bottom;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Radii of the same shape inset by `amount`, floored at zero.
    pub fn shrink(&self, amount: f32) -> Self {
        Self {
            top_left: (self.top_left - amount).max(0.0),
            top_right: (self.top_right - amount).max(0.0),
            bottom_right: (self.bottom_right - amount).max(0.0),
            bottom_left: (self.bottom_left - amount).max(0.0),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoundedCornerShape {
    radii: CornerRadii,
}

impl RoundedCornerShape {
    pub fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            radii: CornerRadii {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            },
        }
    }

    pub fn uniform(radius: f32) -> Self {
        Self {
            radii: CornerRadii::uniform(radius),
        }
    }

    /// Clamps every radius into `0..=min(width, height) / 2`.
    pub fn resolve(&self, width: f32, height: f32) -> CornerRadii {
        let limit = (width / 2.0).min(height / 2.0).max(0.0);
        let clamp = |radius: f32| radius.clamp(0.0, limit);
        CornerRadii {
            top_left: clamp(self.radii.top_left),
            top_right: clamp(self.radii.top_right),
            bottom_right: clamp(self.radii.bottom_right),
            bottom_left: clamp(self.radii.bottom_left),
        }
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
