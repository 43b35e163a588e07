use super::{ModOp, Modifier, Size};
use decor_graphics::{DrawScope, DrawScopeDefault};
use std::rc::Rc;

impl Modifier {
    /// Paints on top of the node's content, inside its laid-out bounds.
    pub fn draw_with_content(f: impl Fn(&mut dyn DrawScope) + 'static) -> Self {
        let func = Rc::new(move |size: Size| {
            let mut scope = DrawScopeDefault::new(size);
            f(&mut scope);
            scope.into_primitives()
        });
        Self::with_op(ModOp::Overlay(func))
    }
}
