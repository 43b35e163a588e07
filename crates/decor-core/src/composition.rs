use std::cell::RefCell;
use std::mem;

use crate::applier::{Applier, MemoryApplier, Node};
use crate::{ComposeError, NodeError, NodeId};

thread_local! {
    static CURRENT_COMPOSER: RefCell<Option<Composer>> = const { RefCell::new(None) };
}

/// Receives nodes emitted by composable functions during one render pass.
pub struct Composer {
    applier: MemoryApplier,
    parents: Vec<NodeId>,
    roots: Vec<NodeId>,
    error: Option<NodeError>,
}

impl Composer {
    fn new(applier: MemoryApplier) -> Self {
        Self {
            applier,
            parents: Vec::new(),
            roots: Vec::new(),
            error: None,
        }
    }

    /// Stores `node` and attaches it to the innermost open parent.
    pub fn emit_node<N: Node + 'static>(&mut self, node: N) -> NodeId {
        let id = self.applier.create(Box::new(node));
        match self.parents.last().copied() {
            Some(parent) => match self.applier.get_mut(parent) {
                Ok(parent_node) => parent_node.insert_child(id),
                Err(err) => {
                    log::error!("failed to attach node {id} to parent {parent}: {err}");
                    self.error.get_or_insert(err);
                }
            },
            None => self.roots.push(id),
        }
        id
    }

    pub fn push_parent(&mut self, parent: NodeId) {
        self.parents.push(parent);
    }

    pub fn pop_parent(&mut self) -> Option<NodeId> {
        self.parents.pop()
    }
}

/// Runs `f` against the composer of the render pass running on this thread.
///
/// # Panics
///
/// Panics when called outside [`Composition::render`], or re-entrantly from
/// inside `f`.
pub fn with_current_composer<R>(f: impl FnOnce(&mut Composer) -> R) -> R {
    CURRENT_COMPOSER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let composer = slot.as_mut().expect("no composer installed");
        f(composer)
    })
}

pub fn is_composing() -> bool {
    CURRENT_COMPOSER.with(|slot| slot.borrow().is_some())
}

pub fn emit_node<N: Node + 'static>(node: N) -> NodeId {
    with_current_composer(|composer| composer.emit_node(node))
}

/// Runs `content` with `parent` as the target for emitted children.
pub fn with_parent<R>(parent: NodeId, content: impl FnOnce() -> R) -> R {
    with_current_composer(|composer| composer.push_parent(parent));
    let result = content();
    with_current_composer(|composer| composer.pop_parent());
    result
}

/// Clears the thread-local slot even if `content` unwinds.
struct ComposerGuard;

impl ComposerGuard {
    fn install(composer: Composer) -> Self {
        CURRENT_COMPOSER.with(|slot| *slot.borrow_mut() = Some(composer));
        ComposerGuard
    }

    fn finish(self) -> Option<Composer> {
        CURRENT_COMPOSER.with(|slot| slot.borrow_mut().take())
    }
}

impl Drop for ComposerGuard {
    fn drop(&mut self) {
        CURRENT_COMPOSER.with(|slot| {
            if let Ok(mut slot) = slot.try_borrow_mut() {
                slot.take();
            }
        });
    }
}

/// Owns the node tree produced by the most recent render pass.
///
/// Every call to [`render`](Self::render) discards the previous tree and
/// builds a fresh one.
#[derive(Default)]
pub struct Composition {
    applier: MemoryApplier,
    root: Option<NodeId>,
    render_count: u64,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, content: impl FnOnce()) -> Result<Option<NodeId>, ComposeError> {
        if is_composing() {
            return Err(ComposeError::AlreadyComposing);
        }
        let mut applier = mem::take(&mut self.applier);
        applier.clear();
        self.root = None;

        let guard = ComposerGuard::install(Composer::new(applier));
        content();
        let composer = guard.finish().ok_or(ComposeError::ComposerLost)?;

        let Composer {
            applier,
            roots,
            error,
            ..
        } = composer;
        self.applier = applier;
        self.render_count += 1;
        if let Some(err) = error {
            return Err(err.into());
        }
        if roots.len() > 1 {
            log::warn!(
                "composition emitted {} root nodes; keeping the first",
                roots.len()
            );
        }
        self.root = roots.first().copied();
        log::trace!(
            "render #{} produced {} nodes",
            self.render_count,
            self.applier.len()
        );
        Ok(self.root)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn applier(&self) -> &MemoryApplier {
        &self.applier
    }

    pub fn applier_mut(&mut self) -> &mut MemoryApplier {
        &mut self.applier
    }

    pub fn dump_tree(&self) -> String {
        self.applier.dump_tree(self.root)
    }
}

#[cfg(test)]
#[path = "tests/composition_tests.rs"]
mod tests;
