#[cfg(feature = "swagger")]
mod docs;
mod docset;
mod routes;

#[cfg(feature = "swagger")]
use crate::docs::ApiDoc;
use crate::docset::load_doc_set;
use crate::routes::{get_api_declaration, get_resource_listing};
use axum::http::Request;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use axum::{error_handling::HandleErrorLayer, http::StatusCode};
use common::api::health;
use common::api::state::AppState;
use common::configuration::{get_config, get_host_url};
use common::defaults::default_grouping_strategy;
use common::listing::ApiDocumentationScanner;
use common::logging::init_logging;
use common::paths::{AbsolutePathProvider, PathProvider, RelativePathProvider};
use tower::{BoxError, ServiceBuilder};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{debug, Span};
#[cfg(feature = "swagger")]
use utoipa::OpenApi;
#[cfg(feature = "swagger")]
use utoipa_swagger_ui::SwaggerUi;

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::{net::SocketAddr, time::Duration};

static PREFIX: &str = "APIDOCS";

#[tokio::main]
async fn main() {
    let host_url = get_host_url(PREFIX, 8084);

    let settings = get_config(PREFIX).unwrap(); //panic if we can't get the config
    let env_log = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!(
            "info,common={},docs_controller={}",
            &settings.logging_level, &settings.logging_level
        )
    });
    let log_path = format!("{}/docs_controller", &settings.log_root);
    let log_file = "docs_controller.log";
    let full_path = Path::new(&log_path).join(log_file);
    if full_path.exists() {
        tokio::fs::remove_file(full_path).await.unwrap();
    }

    let (non_blocking_stdout, _guard) = tracing_appender::non_blocking(std::io::stdout());
    let non_blocking_file = tracing_appender::rolling::never(&log_path, log_file);
    init_logging(&env_log, non_blocking_stdout, non_blocking_file);

    let doc_set = load_doc_set(&settings.controllers_file).unwrap(); //panic if there is nothing to document

    let path_provider: Box<dyn PathProvider> =
        if settings.application_base_path.starts_with("http") {
            Box::new(AbsolutePathProvider::new(
                &settings.application_base_path,
                &settings.api_resource_prefix,
            ))
        } else {
            Box::new(RelativePathProvider::new(&settings.api_resource_prefix))
        };
    let scanner = ApiDocumentationScanner::new(
        &settings.api_version,
        default_grouping_strategy(),
        path_provider,
    );
    let documentation = scanner.scan(&doc_set.controllers, &doc_set.descriptions);
    tracing::info!(
        "Documented {} resource groups from {} controllers",
        documentation.listing.apis.len(),
        doc_set.controllers.len()
    );

    let state = AppState {
        documentation: Arc::new(documentation),
        settings,
    };

    #[allow(unused_mut)]
    let mut router = Router::<AppState>::new();
    #[cfg(feature = "swagger")]
    {
        router = router
            .merge(SwaggerUi::new("/swagger-ui/").url("/api-doc/openapi.json", ApiDoc::openapi()));
    }
    // Compose the routes
    let app = router
        .route("/api-docs", get(get_resource_listing))
        .route("/api-docs/:group_name", get(get_api_declaration))
        // Add middleware to all routes
        .layer(
            TraceLayer::new_for_http()
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!("started {} {}", request.method(), request.uri().path());
                })
                .on_response(|_response: &Response, latency: Duration, _span: &Span| {
                    tracing::debug!("response generated in {:?}", latency);
                }),
        )
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|error: BoxError| async move {
                    if error.is::<tower::timeout::error::Elapsed>() {
                        Ok(StatusCode::REQUEST_TIMEOUT)
                    } else {
                        Err((
                            StatusCode::INTERNAL_SERVER_ERROR,
                            format!("Unhandled internal error: {error}"),
                        ))
                    }
                }))
                .timeout(Duration::from_secs(30))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new())
                        .on_request(DefaultOnRequest::new())
                        .on_response(DefaultOnResponse::new()),
                )
                .into_inner(),
        )
        .with_state(state);

    let addr = SocketAddr::from_str(&host_url).unwrap();
    tracing::debug!("listening on {}", addr);
    let graceful_server = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal());

    if let Err(e) = graceful_server.await {
        tracing::error!("server error: {}", e);
    }
}

/// Tokio signal handler that will wait for a user to press CTRL+C.
/// We use this in our hyper `Server` method `with_graceful_shutdown`.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    debug!("signal received, starting graceful shutdown");
}
