//! Renderer capability for the browser UI.
//!
//! Each asset kind is drawn by exactly one renderer. A renderer contributes
//! markup for the page `<head>` (an import map, for example) and the body of
//! an ES module that defines `function render(asset, url, thumb, meta)`.
//! The page registers that function under the renderer's kind, so the choice
//! of renderer is fixed when the registry is assembled rather than by
//! conditional imports in the browser.

use crate::error::{ApiError, ApiResult};
use crate::models::AssetKind;
use std::sync::Arc;

pub trait AssetRenderer: Send + Sync {
    /// The asset kind this renderer draws
    fn kind(&self) -> AssetKind;

    /// Renderer name (for logging/debugging)
    fn name(&self) -> &str;

    /// Markup injected into the page `<head>`
    fn head(&self) -> Option<&str> {
        None
    }

    /// Module body defining `render(asset, url, thumb, meta)`
    fn script(&self) -> &str;
}

/// Renderers keyed by asset kind.
#[derive(Default, Clone)]
pub struct RendererRegistry {
    renderers: Vec<Arc<dyn AssetRenderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer. A second renderer for the same kind is rejected.
    pub fn register(&mut self, renderer: Arc<dyn AssetRenderer>) -> ApiResult<()> {
        if let Some(existing) = self.get(renderer.kind()) {
            return Err(ApiError::DuplicateRenderer {
                kind: renderer.kind(),
                existing: existing.name().to_string(),
            });
        }
        self.renderers.push(renderer);
        Ok(())
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with_renderer(mut self, renderer: Arc<dyn AssetRenderer>) -> ApiResult<Self> {
        self.register(renderer)?;
        Ok(self)
    }

    pub fn get(&self, kind: AssetKind) -> Option<&Arc<dyn AssetRenderer>> {
        self.renderers.iter().find(|r| r.kind() == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn AssetRenderer>> {
        self.renderers.iter()
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Fails with the first asset kind that has no renderer.
    pub fn ensure_complete(&self) -> ApiResult<()> {
        match AssetKind::ALL.into_iter().find(|kind| self.get(*kind).is_none()) {
            Some(kind) => Err(ApiError::MissingRenderer(kind)),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.renderers.iter().map(|r| (r.kind(), r.name().to_string())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRenderer {
        kind: AssetKind,
        name: &'static str,
    }

    impl AssetRenderer for MockRenderer {
        fn kind(&self) -> AssetKind {
            self.kind
        }

        fn name(&self) -> &str {
            self.name
        }

        fn script(&self) -> &str {
            "function render() {}"
        }
    }

    fn mock(kind: AssetKind, name: &'static str) -> Arc<dyn AssetRenderer> {
        Arc::new(MockRenderer { kind, name })
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = RendererRegistry::new()
            .with_renderer(mock(AssetKind::Model, "mock model"))
            .unwrap()
            .with_renderer(mock(AssetKind::Texture, "mock texture"))
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(AssetKind::Model).unwrap().name(), "mock model");
        assert_eq!(registry.get(AssetKind::Texture).unwrap().head(), None);
        assert!(registry.ensure_complete().is_ok());
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let mut registry = RendererRegistry::new();
        registry.register(mock(AssetKind::Model, "first")).unwrap();

        let err = registry.register(mock(AssetKind::Model, "second")).unwrap_err();
        assert!(matches!(
            err,
            ApiError::DuplicateRenderer { kind: AssetKind::Model, ref existing } if existing == "first"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_kind_reported() {
        let registry = RendererRegistry::new()
            .with_renderer(mock(AssetKind::Model, "model only"))
            .unwrap();

        assert!(matches!(
            registry.ensure_complete(),
            Err(ApiError::MissingRenderer(AssetKind::Texture))
        ));
    }
}
