//! vulnlab-axum - HTTP surface for the vulnlab teaching sandbox
//!
//! Thin plumbing around the decision core: routers, handlers that map
//! verdicts and errors onto status codes, and the two server-rendered
//! panels (access control, XSS test).

mod access;
mod error;
mod inputs;
mod pages;
mod router;

pub use router::{vulnlab_router, vulnlab_router_no_trace};

// Re-export what a host application needs to mount the sandbox
pub use vulnlab::{Flag, ToggleState, VULNLAB_ROUTE_PREFIX};
