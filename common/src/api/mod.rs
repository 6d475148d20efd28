use axum::http::StatusCode;
use axum::response::IntoResponse;

pub mod errors;
pub mod state;

#[tracing::instrument]
#[cfg_attr(feature = "swagger", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Check health of controller")
    )
))]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "Ok")
}
