//! Combined router for all sandbox endpoints

use std::sync::Arc;

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use vulnlab::ToggleState;

/// Create a combined router for all sandbox endpoints
///
/// The endpoints will be available at:
/// - {VULNLAB_ROUTE_PREFIX}/access/...
/// - {VULNLAB_ROUTE_PREFIX}/inputs/...
/// - {VULNLAB_ROUTE_PREFIX}/control-panel
/// - {VULNLAB_ROUTE_PREFIX}/xss-panel
///
/// The toggle state is passed in explicitly so a host application (or a
/// test) can run isolated sandbox instances.
pub fn vulnlab_router(toggles: Arc<ToggleState>) -> Router {
    vulnlab_router_no_trace(toggles).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`vulnlab_router`] but without HTTP tracing middleware
///
/// Use this if you want to add your own tracing middleware or don't need
/// request tracing.
pub fn vulnlab_router_no_trace(toggles: Arc<ToggleState>) -> Router {
    Router::new()
        .nest("/access", super::access::router())
        .nest("/inputs", super::inputs::router())
        .merge(super::pages::router())
        .with_state(toggles)
}
