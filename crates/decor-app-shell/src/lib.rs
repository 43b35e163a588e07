//! Runs the compose → layout → render pipeline for a window-sized viewport
//! and keeps the latest recorded scene around for painting.

mod options;

pub use options::{parse_size, AppOptions, ConfigError, FONT_VAR, SIZE_VAR};

use decor_core::Composition;
use decor_ui::{
    log_layout_tree, log_render_scene, log_screen_summary, HeadlessRenderer, LayoutEngine,
    LayoutTree, RecordedRenderScene, Size,
};

pub struct AppShell {
    composition: Composition,
    content: Box<dyn FnMut()>,
    viewport: (f32, f32),
    buffer_size: (u32, u32),
    last_layout: Option<LayoutTree>,
    scene: RecordedRenderScene,
    needs_redraw: bool,
}

impl AppShell {
    pub fn new(content: impl FnMut() + 'static) -> Self {
        let mut shell = Self {
            composition: Composition::new(),
            content: Box::new(content),
            viewport: (800.0, 600.0),
            buffer_size: (800, 600),
            last_layout: None,
            scene: RecordedRenderScene::default(),
            needs_redraw: true,
        };
        shell.rebuild_scene();
        shell
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        self.rebuild_scene();
    }

    pub fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.buffer_size = (width, height);
    }

    pub fn buffer_size(&self) -> (u32, u32) {
        self.buffer_size
    }

    /// Replaces the content and rebuilds the scene from it.
    pub fn set_content(&mut self, content: impl FnMut() + 'static) {
        self.content = Box::new(content);
        self.rebuild_scene();
    }

    /// Rebuilds the scene after state read by the content has changed.
    pub fn invalidate(&mut self) {
        self.rebuild_scene();
    }

    pub fn scene(&self) -> &RecordedRenderScene {
        &self.scene
    }

    pub fn layout(&self) -> Option<&LayoutTree> {
        self.last_layout.as_ref()
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Whether the scene changed since the last [`mark_rendered`](Self::mark_rendered).
    pub fn should_render(&self) -> bool {
        self.needs_redraw
    }

    pub fn mark_rendered(&mut self) {
        self.needs_redraw = false;
    }

    pub fn log_debug_info(&self) {
        log::info!("════════ DEBUG: CURRENT SCREEN STATE ════════");
        log::info!("node tree:\n{}", self.composition.dump_tree());
        match self.last_layout {
            Some(ref layout) => {
                log_layout_tree(layout);
                log_render_scene(&self.scene);
                log_screen_summary(layout, &self.scene);
            }
            None => log::info!("no layout available"),
        }
    }

    // On failure the previous scene stays in place.
    fn rebuild_scene(&mut self) {
        let content = &mut self.content;
        let root = match self.composition.render(|| content()) {
            Ok(Some(root)) => root,
            Ok(None) => {
                log::warn!("content emitted no nodes");
                self.last_layout = None;
                self.scene = RecordedRenderScene::default();
                self.needs_redraw = true;
                return;
            }
            Err(err) => {
                log::error!("composition failed: {err}");
                return;
            }
        };

        let viewport_size = Size {
            width: self.viewport.0,
            height: self.viewport.1,
        };
        let applier = self.composition.applier_mut();
        let layout = match applier.compute_layout(root, viewport_size) {
            Ok(layout) => layout,
            Err(err) => {
                log::error!("failed to compute layout: {err}");
                return;
            }
        };
        match HeadlessRenderer::new(applier).render(&layout) {
            Ok(scene) => {
                self.scene = scene;
                self.last_layout = Some(layout);
                self.needs_redraw = true;
            }
            Err(err) => log::error!("failed to record scene: {err}"),
        }
    }
}
