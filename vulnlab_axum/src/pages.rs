//! Server-rendered panels for driving the sandbox from a browser

use std::sync::Arc;

use askama::Template;
use axum::{Router, http::StatusCode, response::Html, routing::get};

use vulnlab::{ToggleState, VULNLAB_ROUTE_PREFIX};

pub(super) fn router() -> Router<Arc<ToggleState>> {
    Router::new()
        .route("/control-panel", get(control_panel))
        .route("/xss-panel", get(xss_panel))
}

#[derive(Template)]
#[template(path = "control_panel.j2")]
struct ControlPanelTemplate<'a> {
    lab_route_prefix: &'a str,
}

/// The access-control panel: toggle protection/admin, fetch one or all users
async fn control_panel() -> Result<Html<String>, (StatusCode, String)> {
    let template = ControlPanelTemplate {
        lab_route_prefix: VULNLAB_ROUTE_PREFIX.as_str(),
    };
    let html = template
        .render()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Html(html))
}

#[derive(Template)]
#[template(path = "xss_panel.j2")]
struct XssPanelTemplate<'a> {
    lab_route_prefix: &'a str,
}

/// The XSS test panel: toggle sanitization, submit/list/clear stored inputs
///
/// The listing script assigns stored content to `innerHTML` on purpose;
/// with sanitization off, submitted markup executes. That rendering path
/// is the demo.
async fn xss_panel() -> Result<Html<String>, (StatusCode, String)> {
    let template = XssPanelTemplate {
        lab_route_prefix: VULNLAB_ROUTE_PREFIX.as_str(),
    };
    let html = template
        .render()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Html(html))
}
