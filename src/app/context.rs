use crate::domain::TemplateRenderer;
use crate::ports::{ArtifactStore, MapRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<T: TemplateRenderer, M: MapRenderer, S: ArtifactStore> {
    templates: T,
    maps: M,
    store: S,
}

impl<T: TemplateRenderer, M: MapRenderer, S: ArtifactStore> AppContext<T, M, S> {
    /// Create a new application context.
    pub fn new(templates: T, maps: M, store: S) -> Self {
        Self { templates, maps, store }
    }

    /// Get a reference to the prompt and page template renderer.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the map renderer.
    pub fn maps(&self) -> &M {
        &self.maps
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
