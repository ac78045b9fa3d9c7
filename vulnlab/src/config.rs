//! Central configuration for the vulnlab crate

use std::sync::LazyLock;

/// Route prefix for all vulnlab endpoints
///
/// This is the main prefix under which the sandbox endpoints and panels
/// will be mounted.
/// Default: "/lab"
pub static VULNLAB_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| std::env::var("VULNLAB_ROUTE_PREFIX").unwrap_or_else(|_| "/lab".to_string()));
