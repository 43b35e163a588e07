/// Min/max bounds handed from a parent to a child during measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Constraints allowing any size up to `width` x `height`.
    pub fn loose(width: f32, height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width: width,
            min_height: 0.0,
            max_height: height,
        }
    }
}

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Align children to the leading edge.
    Start,
    /// Align children to the horizontal center.
    CenterHorizontally,
    /// Align children to the trailing edge.
    End,
}

impl HorizontalAlignment {
    /// Offset of a child of width `child` inside `available` space.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            HorizontalAlignment::Start => 0.0,
            HorizontalAlignment::CenterHorizontally => ((available - child) / 2.0).max(0.0),
            HorizontalAlignment::End => (available - child).max(0.0),
        }
    }
}

/// Trait implemented by alignment strategies that distribute children on an axis.
pub trait Arrangement {
    /// Computes the position for each child given the available space and their sizes.
    fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]);
}

/// Linear arrangements along the main axis of a column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinearArrangement {
    /// Place children consecutively starting from the leading edge.
    Start,
    /// Place children so the last child touches the trailing edge.
    End,
    /// Place children so they are centered as a block.
    Center,
    /// Insert a fixed amount of space between children.
    SpacedBy(f32),
}

impl LinearArrangement {
    pub fn spaced_by(spacing: f32) -> Self {
        Self::SpacedBy(spacing)
    }

    /// Fixed gap inserted between consecutive children.
    pub fn spacing(&self) -> f32 {
        match *self {
            LinearArrangement::SpacedBy(value) => value.max(0.0),
            _ => 0.0,
        }
    }

    fn fill_positions(start: f32, gap: f32, sizes: &[f32], out_positions: &mut [f32]) {
        debug_assert_eq!(sizes.len(), out_positions.len());
        let mut cursor = start;
        for (size, position) in sizes.iter().zip(out_positions.iter_mut()) {
            *position = cursor;
            cursor += size + gap;
        }
    }
}

impl Arrangement for LinearArrangement {
    fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]) {
        if sizes.is_empty() {
            return;
        }
        let remaining = total_size - sizes.iter().sum::<f32>();
        match *self {
            LinearArrangement::Start => Self::fill_positions(0.0, 0.0, sizes, out_positions),
            LinearArrangement::End => Self::fill_positions(remaining, 0.0, sizes, out_positions),
            LinearArrangement::Center => {
                Self::fill_positions(remaining / 2.0, 0.0, sizes, out_positions)
            }
            LinearArrangement::SpacedBy(_) => {
                Self::fill_positions(0.0, self.spacing(), sizes, out_positions)
            }
        }
    }
}
