use crate::models::controller::ControllerMetadata;
use crate::models::{ApiDescription, ResourceGroup};
use crate::paths::PathProvider;
use crate::utilities::strings::{first_path_segment, maybe_chomp_leading_slash, split_camel_case};
use std::collections::HashSet;

/// Decides which resource groups a controller's endpoints land in, what a
/// group is called in the listing, and which generated descriptions belong
/// to a group.
pub trait ResourceGroupingStrategy: Send + Sync {
    fn resource_groups(&self, controller: &ControllerMetadata) -> HashSet<ResourceGroup>;

    fn resource_description(&self, controller: &ControllerMetadata) -> String;

    fn filter_api_descriptions(
        &self,
        path_provider: &dyn PathProvider,
        group: &ResourceGroup,
        descriptions: &HashSet<ApiDescription>,
    ) -> HashSet<ApiDescription>;
}

/// Groups by the first segment of the controller's routing prefixes, falling
/// back to a name derived from the controller type name.
#[derive(Debug, Clone, Default)]
pub struct ControllerGrouping;

impl ResourceGroupingStrategy for ControllerGrouping {
    fn resource_groups(&self, controller: &ControllerMetadata) -> HashSet<ResourceGroup> {
        let mut groups = HashSet::new();
        for prefix in &controller.routing_prefixes {
            if !prefix.is_empty() {
                let name = maybe_chomp_leading_slash(first_path_segment(prefix));
                groups.insert(ResourceGroup::new(name));
            }
        }
        if !groups.is_empty() {
            return groups;
        }

        let default_name = split_camel_case(&controller.name, "-").to_lowercase();
        let default_name = maybe_chomp_leading_slash(&default_name);
        HashSet::from([ResourceGroup::with_uri(default_name, "/")])
    }

    fn resource_description(&self, controller: &ControllerMetadata) -> String {
        if let Some(doc) = &controller.doc {
            if !doc.value.is_empty() {
                return doc.value.clone();
            }
            if !doc.description.is_empty() {
                return doc.description.clone();
            }
        }
        split_camel_case(&controller.name, " ")
    }

    fn filter_api_descriptions(
        &self,
        path_provider: &dyn PathProvider,
        group: &ResourceGroup,
        descriptions: &HashSet<ApiDescription>,
    ) -> HashSet<ApiDescription> {
        // Plain concatenation, no separator normalization.
        let group_prefix = format!("{}{}", path_provider.resource_prefix(), group.real_uri);
        descriptions
            .iter()
            .filter(|description| description.path.starts_with(&group_prefix))
            .cloned()
            .collect()
    }
}
