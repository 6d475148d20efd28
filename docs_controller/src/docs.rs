#[cfg(feature = "swagger")]
use utoipa::OpenApi;

#[cfg(feature = "swagger")]
#[cfg_attr(feature = "swagger", derive(OpenApi))]
#[cfg_attr(
    feature = "swagger",
    openapi(
        paths(
            crate::routes::get_resource_listing,
            crate::routes::get_api_declaration,
            common::api::health
        ),
        components(schemas(
            common::listing::ResourceListing,
            common::listing::ResourceListingEntry,
            common::listing::ApiDeclaration,
            common::models::ApiDescription,
            common::models::ResourceGroup
        ))
    )
)]
pub struct ApiDoc;
