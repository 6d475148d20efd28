use crate::models::ApiDescription;
use serde::{Deserialize, Serialize};
#[cfg(feature = "swagger")]
use utoipa::ToSchema;

/// Documentation strings a controller declares for itself. An empty string
/// counts as absent.
#[cfg_attr(feature = "swagger", derive(ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControllerDoc {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: String,
}

/// Routing metadata for one controller, extracted up front by whatever
/// scans the fleet: the simple type name, the routing prefixes all of its
/// endpoints share, and its optional documentation strings.
#[cfg_attr(feature = "swagger", derive(ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerMetadata {
    pub name: String,
    #[serde(default)]
    pub routing_prefixes: Vec<String>,
    #[serde(default)]
    pub doc: Option<ControllerDoc>,
}

impl ControllerMetadata {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            routing_prefixes: Vec::new(),
            doc: None,
        }
    }

    pub fn with_prefixes(name: &str, prefixes: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            routing_prefixes: prefixes.iter().map(ToString::to_string).collect(),
            doc: None,
        }
    }
}

/// Everything the docs controller needs from one scan of the fleet.
#[cfg_attr(feature = "swagger", derive(ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocSet {
    pub controllers: Vec<ControllerMetadata>,
    pub descriptions: Vec<ApiDescription>,
}

#[cfg(test)]
mod tests {
    use crate::models::controller::{ControllerMetadata, DocSet};

    #[test]
    fn missing_fields_deserialize_as_absent() {
        let controller: ControllerMetadata =
            serde_json::from_str(r#"{"name": "OrderController"}"#).unwrap();
        assert_eq!(controller.name, "OrderController");
        assert!(controller.routing_prefixes.is_empty());
        assert!(controller.doc.is_none());
    }

    #[test]
    fn doc_set_round_trips() {
        let json = r#"{
            "controllers": [
                {"name": "OrderController", "routing_prefixes": ["/orders"],
                 "doc": {"value": "Orders"}}
            ],
            "descriptions": [
                {"method": "GET", "path": "/orders/{id}", "description": "Fetch one order"}
            ]
        }"#;
        let doc_set: DocSet = serde_json::from_str(json).unwrap();
        assert_eq!(doc_set.controllers.len(), 1);
        assert_eq!(doc_set.descriptions.len(), 1);
        assert_eq!(doc_set.controllers[0].doc.as_ref().unwrap().value, "Orders");
        assert_eq!(doc_set.controllers[0].doc.as_ref().unwrap().description, "");
    }
}
