use asset_viewer_api::RendererRegistry;
use asset_viewer_core::render::{ModelRenderer, TextureRenderer};
use std::sync::Arc;

/// Assembles the renderer set the viewer ships with.
///
/// This is the one place that decides which renderer draws which asset
/// kind; the page served to the browser is built from its result.
pub fn build_default_renderers() -> RendererRegistry {
    let mut registry = RendererRegistry::new();

    if let Err(e) = registry.register(Arc::new(ModelRenderer::new())) {
        tracing::error!("Failed to register model renderer: {}", e);
    }
    if let Err(e) = registry.register(Arc::new(TextureRenderer::new())) {
        tracing::error!("Failed to register texture renderer: {}", e);
    }

    if let Err(e) = registry.ensure_complete() {
        tracing::warn!("Renderer set is incomplete: {}", e);
    }

    registry
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module, mirroring output to stderr.
pub fn init_logging(component: &str) -> impl Drop {
    asset_viewer_core::logging::init_logging(component, true)
}
