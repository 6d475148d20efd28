pub mod docs_config;

use crate::configuration::docs_config::DocsConfig;
use config::{Config, ConfigError, File, FileFormat};

/// Builds the service configuration from an optional TOML file plus
/// `{prefix}_*` environment variables; the environment wins on conflicts.
pub fn get_config(prefix: &str) -> Result<DocsConfig, ConfigError> {
    let mut builder = Config::builder();
    if let Ok(path) = std::env::var(format!("{prefix}_CONFIG_FILE")) {
        builder = builder.add_source(File::new(&path, FileFormat::Toml));
    }
    builder
        .add_source(config::Environment::with_prefix(prefix))
        .build()?
        .try_deserialize::<DocsConfig>()
}

/// Constructs the listen address for the docs controller.
pub fn get_host_url(prefix: &str, default_port: u16) -> String {
    let host = std::env::var(format!("{prefix}_HOST")).unwrap_or_else(|_| "0.0.0.0".into());
    let port = std::env::var(format!("{prefix}_PORT")).unwrap_or_else(|_| default_port.to_string());
    format!("{host}:{port}")
}
