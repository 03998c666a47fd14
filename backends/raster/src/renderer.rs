//! Drives one frame: layout passes, paint recording, presentation.

use enhanced_tooltip_core::{Element, ProposalSize, Size};

use crate::{
    backend::{FrameResult, RenderBackend, RenderError},
    context::RenderCtx,
    scene::Scene,
};

/// Renders a root element through a backend surface.
///
/// The root is measured against the viewport and arranged at its desired
/// size, clamped to the viewport, the way a popup sizes to its content.
pub struct Renderer<B: RenderBackend> {
    backend: B,
    scene: Scene,
}

impl<B: RenderBackend> core::fmt::Debug for Renderer<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Renderer")
            .field("backend", &self.backend)
            .field("commands", &self.scene.commands().len())
            .finish()
    }
}

impl<B: RenderBackend> Renderer<B> {
    /// Creates a renderer backed by the provided surface.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            scene: Scene::default(),
        }
    }

    /// Lays out, paints and presents `root` inside `viewport`.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`RenderError`].
    pub fn render(
        &mut self,
        root: &mut dyn Element,
        viewport: Size,
    ) -> Result<FrameResult, RenderError> {
        let desired = root.measure(ProposalSize::from(viewport));
        let granted = Size::new(
            desired.width.min(viewport.width).max(0.0),
            desired.height.min(viewport.height).max(0.0),
        );
        root.arrange(granted);

        let mut ctx = RenderCtx::new();
        root.render(&mut ctx);
        self.scene = ctx.finish();

        let result = self.backend.present(&self.scene)?;
        tracing::debug!(?viewport, ?granted, ?result, "frame rendered");
        Ok(result)
    }

    /// Scene recorded by the most recent [`render`](Self::render).
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Returns a reference to the underlying backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns a mutable reference to the underlying backend.
    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
