//! Path providers for the generated documentation.

/// Where the documented API lives, as far as generated paths are concerned.
/// The resource prefix is prepended to a group's real URI when filtering
/// endpoint descriptions.
pub trait PathProvider: Send + Sync {
    fn resource_prefix(&self) -> String;
    fn application_base_path(&self) -> String;
}

/// Paths relative to the serving application root. The default provider.
#[derive(Debug, Clone, Default)]
pub struct RelativePathProvider {
    resource_prefix: String,
}

impl RelativePathProvider {
    pub fn new(resource_prefix: &str) -> Self {
        Self {
            resource_prefix: resource_prefix.to_string(),
        }
    }
}

impl PathProvider for RelativePathProvider {
    fn resource_prefix(&self) -> String {
        self.resource_prefix.clone()
    }

    fn application_base_path(&self) -> String {
        "/".to_string()
    }
}

/// Paths anchored to a configured application URL, for docs served from a
/// different host than the documented API.
#[derive(Debug, Clone)]
pub struct AbsolutePathProvider {
    app_url: String,
    resource_prefix: String,
}

impl AbsolutePathProvider {
    pub fn new(app_url: &str, resource_prefix: &str) -> Self {
        Self {
            app_url: app_url.to_string(),
            resource_prefix: resource_prefix.to_string(),
        }
    }
}

impl PathProvider for AbsolutePathProvider {
    fn resource_prefix(&self) -> String {
        self.resource_prefix.clone()
    }

    fn application_base_path(&self) -> String {
        self.app_url.clone()
    }
}
