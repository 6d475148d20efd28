//! The fixed defaults handed to the documentation pass: grouping strategy,
//! path provider, per-method response tables, and parameter types that never
//! show up in generated docs.

use crate::grouping::{ControllerGrouping, ResourceGroupingStrategy};
use crate::models::ResponseMessage;
use crate::paths::{PathProvider, RelativePathProvider};
use axum::http::{Method, StatusCode};
use std::collections::{HashMap, HashSet};

pub fn default_grouping_strategy() -> Box<dyn ResourceGroupingStrategy> {
    Box::new(ControllerGrouping)
}

pub fn default_path_provider() -> Box<dyn PathProvider> {
    Box::<RelativePathProvider>::default()
}

/// Extractor and infrastructure parameter types that carry no request data
/// worth documenting.
pub fn default_ignorable_parameter_types() -> HashSet<&'static str> {
    HashSet::from([
        "axum::extract::State",
        "axum::extract::Extension",
        "axum::extract::ConnectInfo",
        "axum::extract::MatchedPath",
        "axum::extract::OriginalUri",
        "axum::http::HeaderMap",
        "axum::http::Request",
        "axum::http::Uri",
        "axum::http::Method",
    ])
}

/// Response messages set on all operations, keyed by HTTP method.
pub fn default_response_messages() -> HashMap<Method, Vec<ResponseMessage>> {
    let mut responses = HashMap::new();
    responses.insert(
        Method::GET,
        vec![
            message(StatusCode::OK),
            message(StatusCode::NOT_FOUND),
            message(StatusCode::FORBIDDEN),
            message(StatusCode::UNAUTHORIZED),
        ],
    );

    for method in [Method::PUT, Method::POST] {
        responses.insert(
            method,
            vec![
                message(StatusCode::CREATED),
                message(StatusCode::NOT_FOUND),
                message(StatusCode::FORBIDDEN),
                message(StatusCode::UNAUTHORIZED),
            ],
        );
    }

    for method in [
        Method::DELETE,
        Method::PATCH,
        Method::TRACE,
        Method::OPTIONS,
        Method::HEAD,
    ] {
        responses.insert(
            method,
            vec![
                // 204 carries the "Created" reason text.
                ResponseMessage::new(
                    StatusCode::NO_CONTENT.as_u16(),
                    StatusCode::CREATED.canonical_reason().unwrap_or_default(),
                ),
                message(StatusCode::FORBIDDEN),
                message(StatusCode::UNAUTHORIZED),
            ],
        );
    }
    responses
}

fn message(status: StatusCode) -> ResponseMessage {
    ResponseMessage::new(status.as_u16(), status.canonical_reason().unwrap_or_default())
}
