use axum::extract::{Path, State};
use axum::Json;
use common::api::errors::app_error::AppError;
use common::api::errors::group_error::GroupError;
use common::api::state::AppState;
use common::listing::{ApiDeclaration, ResourceListing};

#[tracing::instrument(skip(state))]
#[cfg_attr(feature = "swagger", utoipa::path(
get,
path = "/api-docs",
responses(
(status = 200, description = "Resource listing with one entry per group", body = ResourceListing)
)
))]
pub async fn get_resource_listing(State(state): State<AppState>) -> Json<ResourceListing> {
    Json(state.documentation.listing.clone())
}

#[tracing::instrument(skip(state))]
#[cfg_attr(feature = "swagger", utoipa::path(
get,
path = "/api-docs/{group_name}",
params(
("group_name" = String, Path, description = "Name of the resource group")
),
responses(
(status = 200, description = "API declaration for the group", body = ApiDeclaration),
(status = 404, description = "Unknown resource group")
)
))]
pub async fn get_api_declaration(
    Path(group_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiDeclaration>, AppError> {
    match state.documentation.declaration(&group_name) {
        Some(declaration) => Ok(Json(declaration.clone())),
        None => Err(GroupError::NotFound(group_name).into()),
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::{get_api_declaration, get_resource_listing};
    use axum::extract::{Path, State};
    use common::api::state::AppState;
    use common::configuration::docs_config::DocsConfig;
    use common::defaults::{default_grouping_strategy, default_path_provider};
    use common::listing::ApiDocumentationScanner;
    use common::models::controller::ControllerMetadata;
    use common::models::ApiDescription;
    use std::sync::Arc;

    fn state() -> AppState {
        let scanner = ApiDocumentationScanner::new(
            "1.0",
            default_grouping_strategy(),
            default_path_provider(),
        );
        let controllers = vec![ControllerMetadata::with_prefixes(
            "OrderController",
            &["/orders"],
        )];
        let descriptions = vec![ApiDescription {
            method: "GET".to_string(),
            path: "/orders".to_string(),
            description: "List orders".to_string(),
        }];
        AppState {
            documentation: Arc::new(scanner.scan(&controllers, &descriptions)),
            settings: DocsConfig::default(),
        }
    }

    #[tokio::test]
    async fn listing_route_returns_all_groups() {
        let listing = get_resource_listing(State(state())).await;
        assert_eq!(listing.0.apis.len(), 1);
        assert_eq!(listing.0.apis[0].path, "/api-docs/orders");
    }

    #[tokio::test]
    async fn declaration_route_returns_the_group_apis() {
        let declaration = get_api_declaration(Path("orders".to_string()), State(state()))
            .await
            .unwrap();
        assert_eq!(declaration.0.resource_path, "/orders");
        assert_eq!(declaration.0.apis.len(), 1);
    }

    #[tokio::test]
    async fn unknown_group_is_an_error() {
        let result = get_api_declaration(Path("users".to_string()), State(state())).await;
        assert!(result.is_err());
    }
}
