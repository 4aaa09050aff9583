use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{
    ApiConfig, error, metrics,
    middleware::{cors, request_id, security_headers},
    openapi,
    state::ApiState,
    user,
};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .route(openapi::OPENAPI_PATH, get(openapi::openapi_json))
        .merge(user::routes())
        .fallback(handler_404)
}

/// Full application: routes, the optional `/metrics` endpoint and every layer.
pub fn app(
    state: ApiState,
    config: &ApiConfig,
    metrics_handle: Option<PrometheusHandle>,
) -> Router {
    let mut routes = router();

    // Kept separate from the main state
    if let Some(handle) = metrics_handle {
        routes = routes.merge(
            Router::new()
                .route("/metrics", get(metrics::metrics_handler))
                .with_state(handle),
        );
    }

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let environment = state.environment;
    let app = routes
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors::create_cors_layer(config.parsed_allowed_origins()))
        .layer(trace_layer)
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(middleware::from_fn(request_id::request_id_middleware));

    security_headers::apply_security_headers(app, environment)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
