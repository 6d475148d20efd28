use crate::configuration::docs_config::DocsConfig;
use crate::listing::ApiDocumentation;
use std::sync::Arc;

/// Shared handler state. The documentation is assembled once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub documentation: Arc<ApiDocumentation>,
    pub settings: DocsConfig,
}
