use std::sync::Arc;

use crate::application::http::health::health_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::application::http::spool::router::spool_routes;
use crate::args::Args;

use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use spooltag_core::{
    application::{SpoolTagService, create_service},
    domain::{common::SpoolTagConfig, spool::ports::SpoolAnalyzer},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{debug, info, info_span};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

pub fn state(args: Arc<Args>) -> AppState<SpoolTagService> {
    let config = SpoolTagConfig::from(args.as_ref().clone());
    let service = create_service(config);

    AppState::new(args, service)
}

///  Returns the [`Router`] of this application.
pub fn router<A>(state: AppState<A>) -> Result<Router, anyhow::Error>
where
    A: SpoolAnalyzer + 'static,
{
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs = openapi.clone();

    // The upload page lives at `{root_path}/` and posts to a relative URL.
    let static_files = ServeDir::new(&state.args.server.static_dir);
    let static_files: Router = if root_path.is_empty() {
        Router::new().fallback_service(static_files)
    } else {
        Router::new().nest_service(&root_path, static_files)
    };

    let router = axum::Router::new()
        .merge(Scalar::with_url(format!("{}/scalar", root_path), openapi))
        .route(
            &format!("{}/api-docs/openapi.json", root_path),
            get(|| async move { Json(api_docs) }),
        )
        .merge(spool_routes(state.clone()))
        .merge(health_routes(&root_path))
        .fallback_service(static_files)
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}

/// Binds the listen address and serves until Ctrl-C.
pub async fn serve(args: Arc<Args>) -> Result<(), anyhow::Error> {
    let addr = args.server.socket_addr()?;
    let root_path = args.server.root_path.clone();

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
    let app = router(state(args))?
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer);

    let handle = axum_server::Handle::new();
    let shutdown_handle = handle.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            shutdown_handle.graceful_shutdown(None);
        }
    });

    info!("listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
