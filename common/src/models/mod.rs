use crate::utilities::strings::maybe_chomp_leading_slash;
use serde::{Deserialize, Serialize};
#[cfg(feature = "swagger")]
use utoipa::ToSchema;

pub mod controller;

/// A named bucket of API endpoints, typically one per controller. The real
/// URI is the path prefix used when filtering endpoint descriptions into the
/// group.
#[cfg_attr(feature = "swagger", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub name: String,
    pub real_uri: String,
}

impl ResourceGroup {
    /// Group derived from a routing prefix; the real URI is the group name
    /// under the root.
    pub fn new(name: &str) -> Self {
        let name = maybe_chomp_leading_slash(name);
        Self {
            name: name.to_string(),
            real_uri: format!("/{name}"),
        }
    }

    pub fn with_uri(name: &str, real_uri: &str) -> Self {
        Self {
            name: name.to_string(),
            real_uri: real_uri.to_string(),
        }
    }
}

/// One documented operation produced by the scanning side: method, full
/// path, and a short description.
#[cfg_attr(feature = "swagger", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiDescription {
    pub method: String,
    pub path: String,
    pub description: String,
}

/// Default response entry attached to operations that do not declare their
/// own.
#[cfg_attr(feature = "swagger", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub code: u16,
    pub message: String,
    pub response_model: Option<String>,
}

impl ResponseMessage {
    pub fn new(code: u16, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
            response_model: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::ResourceGroup;
    use std::collections::HashSet;

    #[test]
    fn groups_dedup_by_name_and_uri() {
        let mut groups = HashSet::new();
        groups.insert(ResourceGroup::new("orders"));
        groups.insert(ResourceGroup::new("/orders"));
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn new_group_gets_slash_prefixed_uri() {
        let group = ResourceGroup::new("orders");
        assert_eq!(group.name, "orders");
        assert_eq!(group.real_uri, "/orders");
    }
}
