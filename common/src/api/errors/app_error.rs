use crate::api::errors::group_error::GroupError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum AppError {
    Group(GroupError),
}

impl From<GroupError> for AppError {
    fn from(inner: GroupError) -> Self {
        Self::Group(inner)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::Group(GroupError::NotFound(name)) => {
                let message = format!("Resource group {name} is not in the listing");
                tracing::debug!("GroupError::NotFound: {}", name);
                (StatusCode::NOT_FOUND, message)
            }
        };

        let body = Json(ApiErrorMessage {
            error: error_message,
        });

        (status, body).into_response()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ApiErrorMessage {
    error: String,
}

#[cfg(test)]
mod tests {
    use crate::api::errors::app_error::AppError;
    use crate::api::errors::group_error::GroupError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn unknown_group_maps_to_not_found() {
        let response = AppError::Group(GroupError::NotFound("orders".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
