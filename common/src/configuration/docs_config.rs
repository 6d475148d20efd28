use serde::{Deserialize, Serialize};
#[cfg(feature = "swagger")]
use utoipa::ToSchema;

#[cfg_attr(feature = "swagger", derive(ToSchema))]
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DocsConfig {
    /// Version string reported in the resource listing.
    pub api_version: String,
    /// Prefix prepended to group URIs when filtering endpoint descriptions.
    pub api_resource_prefix: String,
    /// Base path reported in the listing and declarations. When set to a full
    /// URL the absolute path provider is used instead of the relative one.
    pub application_base_path: String,
    /// JSON file holding the controller metadata and endpoint descriptions.
    pub controllers_file: String,
    pub logging_level: String,
    pub log_root: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            api_version: "1.0".to_string(),
            api_resource_prefix: String::new(),
            application_base_path: "/".to_string(),
            controllers_file: "controllers.json".to_string(),
            logging_level: "info".to_string(),
            log_root: "/logs".to_string(),
        }
    }
}
