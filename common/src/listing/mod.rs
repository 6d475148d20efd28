use crate::grouping::ResourceGroupingStrategy;
use crate::models::controller::ControllerMetadata;
use crate::models::{ApiDescription, ResourceGroup};
use crate::paths::PathProvider;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
#[cfg(feature = "swagger")]
use utoipa::ToSchema;

/// Top-level index of the generated documentation: one entry per resource
/// group, pointing at that group's declaration.
#[cfg_attr(feature = "swagger", derive(ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceListing {
    pub api_version: String,
    pub base_path: String,
    pub apis: Vec<ResourceListingEntry>,
}

#[cfg_attr(feature = "swagger", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceListingEntry {
    pub path: String,
    pub description: String,
}

/// All documented operations of one resource group.
#[cfg_attr(feature = "swagger", derive(ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDeclaration {
    pub resource_path: String,
    pub base_path: String,
    pub apis: Vec<ApiDescription>,
}

/// Result of one documentation pass. Built once, shared read-only.
#[derive(Debug, Clone)]
pub struct ApiDocumentation {
    pub listing: ResourceListing,
    declarations: HashMap<String, ApiDeclaration>,
}

impl ApiDocumentation {
    pub fn declaration(&self, group_name: &str) -> Option<&ApiDeclaration> {
        self.declarations.get(group_name)
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.declarations.keys().map(String::as_str).collect()
    }
}

/// Runs the grouping strategy over a set of controllers and endpoint
/// descriptions, producing the listing and the per-group declarations.
pub struct ApiDocumentationScanner {
    api_version: String,
    strategy: Box<dyn ResourceGroupingStrategy>,
    path_provider: Box<dyn PathProvider>,
}

impl ApiDocumentationScanner {
    pub fn new(
        api_version: &str,
        strategy: Box<dyn ResourceGroupingStrategy>,
        path_provider: Box<dyn PathProvider>,
    ) -> Self {
        Self {
            api_version: api_version.to_string(),
            strategy,
            path_provider,
        }
    }

    pub fn scan(
        &self,
        controllers: &[ControllerMetadata],
        descriptions: &[ApiDescription],
    ) -> ApiDocumentation {
        let descriptions: HashSet<ApiDescription> = descriptions.iter().cloned().collect();

        // A group can be produced by more than one controller; the first
        // controller's description wins.
        let mut groups: Vec<(ResourceGroup, String)> = Vec::new();
        let mut seen: HashSet<ResourceGroup> = HashSet::new();
        for controller in controllers {
            let description = self.strategy.resource_description(controller);
            for group in self.strategy.resource_groups(controller) {
                if seen.insert(group.clone()) {
                    groups.push((group, description.clone()));
                }
            }
        }
        groups.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name));

        let mut entries = Vec::with_capacity(groups.len());
        let mut declarations = HashMap::with_capacity(groups.len());
        for (group, description) in groups {
            entries.push(ResourceListingEntry {
                path: format!("/api-docs/{}", group.name),
                description,
            });

            let mut apis: Vec<ApiDescription> = self
                .strategy
                .filter_api_descriptions(self.path_provider.as_ref(), &group, &descriptions)
                .into_iter()
                .collect();
            apis.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));

            declarations.insert(
                group.name.clone(),
                ApiDeclaration {
                    resource_path: group.real_uri,
                    base_path: self.path_provider.application_base_path(),
                    apis,
                },
            );
        }

        ApiDocumentation {
            listing: ResourceListing {
                api_version: self.api_version.clone(),
                base_path: self.path_provider.application_base_path(),
                apis: entries,
            },
            declarations,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::grouping::ControllerGrouping;
    use crate::listing::{ApiDocumentationScanner, ResourceListingEntry};
    use crate::models::controller::{ControllerDoc, ControllerMetadata};
    use crate::models::ApiDescription;
    use crate::paths::RelativePathProvider;

    fn scanner(resource_prefix: &str) -> ApiDocumentationScanner {
        ApiDocumentationScanner::new(
            "1.0",
            Box::new(ControllerGrouping),
            Box::new(RelativePathProvider::new(resource_prefix)),
        )
    }

    fn description(path: &str) -> ApiDescription {
        ApiDescription {
            method: "GET".to_string(),
            path: path.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn listing_has_one_sorted_entry_per_group() {
        let controllers = vec![
            ControllerMetadata::with_prefixes("UserController", &["/users"]),
            ControllerMetadata::with_prefixes("OrderController", &["/orders"]),
        ];
        let documentation = scanner("").scan(&controllers, &[]);

        assert_eq!(documentation.listing.api_version, "1.0");
        assert_eq!(documentation.listing.base_path, "/");
        assert_eq!(
            documentation.listing.apis,
            vec![
                ResourceListingEntry {
                    path: "/api-docs/orders".to_string(),
                    description: "Order Controller".to_string(),
                },
                ResourceListingEntry {
                    path: "/api-docs/users".to_string(),
                    description: "User Controller".to_string(),
                },
            ]
        );
    }

    #[test]
    fn declarations_contain_the_filtered_descriptions_sorted_by_path() {
        let controllers = vec![ControllerMetadata::with_prefixes(
            "OrderController",
            &["/orders"],
        )];
        let descriptions = vec![
            description("/orders/{id}"),
            description("/orders"),
            description("/users"),
        ];
        let documentation = scanner("").scan(&controllers, &descriptions);

        let declaration = documentation.declaration("orders").unwrap();
        assert_eq!(declaration.resource_path, "/orders");
        assert_eq!(
            declaration
                .apis
                .iter()
                .map(|api| api.path.as_str())
                .collect::<Vec<_>>(),
            vec!["/orders", "/orders/{id}"]
        );
        assert!(documentation.declaration("users").is_none());
    }

    #[test]
    fn first_controller_wins_a_shared_group() {
        let mut first = ControllerMetadata::with_prefixes("OrderController", &["/orders"]);
        first.doc = Some(ControllerDoc {
            value: "Orders".to_string(),
            description: String::new(),
        });
        let second = ControllerMetadata::with_prefixes("OrderAdminController", &["/orders"]);

        let documentation = scanner("").scan(&[first, second], &[]);
        assert_eq!(documentation.listing.apis.len(), 1);
        assert_eq!(documentation.listing.apis[0].description, "Orders");
    }

    #[test]
    fn unknown_group_has_no_declaration() {
        let documentation = scanner("").scan(&[], &[]);
        assert!(documentation.declaration("missing").is_none());
        assert!(documentation.listing.apis.is_empty());
    }
}
