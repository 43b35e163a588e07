//! Modifier chains.
//!
//! A [`Modifier`] is an immutable, cheaply clonable list of operations that
//! decorate a node: layout operations (padding, fill) feed the layout engine,
//! paint operations feed the renderer. Chains are combined with
//! [`Modifier::then`].

use std::fmt;
use std::rc::Rc;

mod background;
mod border;
mod conditional;
mod draw_cache;
mod padding;

pub use background::BackgroundFill;
pub use border::{RoundedBorder, DEFAULT_BORDER_WIDTH};
pub use conditional::{Either, EmptyModifier, ViewModifier};
pub use decor_graphics::{
    Brush, Color, CornerRadii, DrawPrimitive, DrawScope, EdgeInsets, Point, Rect,
    RoundedCornerShape, ShapeStyle, Size,
};

/// Paint callback evaluated against the size of the decorated node.
pub type DrawFn = Rc<dyn Fn(Size) -> Vec<DrawPrimitive>>;

#[derive(Clone)]
pub(crate) enum ModOp {
    Padding(EdgeInsets),
    Background(BackgroundFill),
    FillMaxWidth(f32),
    FillMaxHeight(f32),
    /// Painted on top of the node's content.
    Overlay(DrawFn),
}

#[derive(Clone, Default)]
pub struct Modifier(Rc<Vec<ModOp>>);

impl PartialEq for Modifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Modifier {}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Modifier").field(&self.0.len()).finish()
    }
}

impl Modifier {
    pub fn empty() -> Self {
        Self::default()
    }

    fn with_op(op: ModOp) -> Self {
        Self(Rc::new(vec![op]))
    }

    fn with_ops(ops: Vec<ModOp>) -> Self {
        Self(Rc::new(ops))
    }

    /// Takes all the space the parent allows on both axes.
    pub fn fill_max_size() -> Self {
        Self::fill_max_size_fraction(1.0)
    }

    /// Takes `fraction` of the space the parent allows on both axes.
    pub fn fill_max_size_fraction(fraction: f32) -> Self {
        let clamped = fraction.clamp(0.0, 1.0);
        Self::with_ops(vec![
            ModOp::FillMaxWidth(clamped),
            ModOp::FillMaxHeight(clamped),
        ])
    }

    /// Appends `next` after the operations of `self`.
    ///
    /// Chaining with an empty modifier on either side returns the other chain
    /// itself, so `m.then(Modifier::empty()) == m`.
    pub fn then(&self, next: Modifier) -> Modifier {
        if self.0.is_empty() {
            return next;
        }
        if next.0.is_empty() {
            return self.clone();
        }
        let mut ops = (*self.0).clone();
        ops.extend(next.0.iter().cloned());
        Modifier(Rc::new(ops))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn padding_values(&self) -> EdgeInsets {
        self.layout_properties().padding
    }

    /// Overlay paint callbacks in chain order.
    pub fn overlays(&self) -> Vec<DrawFn> {
        self.0
            .iter()
            .filter_map(|op| match op {
                ModOp::Overlay(func) => Some(Rc::clone(func)),
                _ => None,
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum DimensionConstraint {
    /// Sized by content.
    #[default]
    Unspecified,
    /// A fraction of the parent's maximum.
    Fill(f32),
}

/// Everything the layout engine reads from a chain. Paint operations never
/// contribute here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct LayoutProperties {
    padding: EdgeInsets,
    width: DimensionConstraint,
    height: DimensionConstraint,
}

impl LayoutProperties {
    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    pub fn width(&self) -> DimensionConstraint {
        self.width
    }

    pub fn height(&self) -> DimensionConstraint {
        self.height
    }
}

impl Modifier {
    pub(crate) fn layout_properties(&self) -> LayoutProperties {
        let mut props = LayoutProperties::default();
        for op in self.0.iter() {
            match op {
                ModOp::Padding(padding) => props.padding += *padding,
                ModOp::FillMaxWidth(fraction) => {
                    props.width = DimensionConstraint::Fill(*fraction);
                }
                ModOp::FillMaxHeight(fraction) => {
                    props.height = DimensionConstraint::Fill(*fraction);
                }
                ModOp::Background(_) | ModOp::Overlay(_) => {}
            }
        }
        props
    }
}

#[cfg(test)]
#[path = "tests/modifier_tests.rs"]
mod tests;
