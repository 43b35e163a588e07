//! Decorations as values, and picking between them at render time.

use super::Modifier;

/// A reusable decoration that rewrites the modifier chain of an element.
pub trait ViewModifier {
    fn body(&self, content: Modifier) -> Modifier;
}

/// Leaves the element untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyModifier;

impl ViewModifier for EmptyModifier {
    fn body(&self, content: Modifier) -> Modifier {
        content
    }
}

/// A plain chain is itself a decoration: it is appended to the content.
impl ViewModifier for Modifier {
    fn body(&self, content: Modifier) -> Modifier {
        content.then(self.clone())
    }
}

/// `None` applies nothing.
impl<M: ViewModifier> ViewModifier for Option<M> {
    fn body(&self, content: Modifier) -> Modifier {
        match self {
            Some(modifier) => modifier.body(content),
            None => content,
        }
    }
}

impl<M: ViewModifier + ?Sized> ViewModifier for &M {
    fn body(&self, content: Modifier) -> Modifier {
        (**self).body(content)
    }
}

/// One of two decorations of possibly different types.
///
/// ```rust,ignore
/// let border = if highlighted {
///     Either::Left(RoundedBorder::new(Color::BLUE, 3.0, 5.0))
/// } else {
///     Either::Right(Modifier::rounded_background(Color::WHITE, 5.0))
/// };
/// let modifier = Modifier::padding(16.0).apply(border);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// `Left(when_true)` if `condition` holds, `Right(when_false)` otherwise.
    pub fn select(condition: bool, when_true: L, when_false: R) -> Self {
        if condition {
            Either::Left(when_true)
        } else {
            Either::Right(when_false)
        }
    }
}

impl<L: ViewModifier, R: ViewModifier> ViewModifier for Either<L, R> {
    fn body(&self, content: Modifier) -> Modifier {
        match self {
            Either::Left(modifier) => modifier.body(content),
            Either::Right(modifier) => modifier.body(content),
        }
    }
}

impl Modifier {
    /// Decorates this chain with `modifier`.
    pub fn apply<M: ViewModifier>(self, modifier: M) -> Modifier {
        modifier.body(self)
    }

    /// Applies `modifier` only when `condition` holds; otherwise returns this
    /// chain unchanged.
    pub fn conditional_modifier<M: ViewModifier>(self, condition: bool, modifier: M) -> Modifier {
        if condition {
            modifier.body(self)
        } else {
            self
        }
    }

    /// Applies `when_true` if `condition` holds and `when_false` otherwise.
    /// Exactly one of the two is always applied.
    pub fn conditional_modifier_either<T, F>(
        self,
        condition: bool,
        when_true: T,
        when_false: F,
    ) -> Modifier
    where
        T: ViewModifier,
        F: ViewModifier,
    {
        self.apply(Either::select(condition, when_true, when_false))
    }
}
