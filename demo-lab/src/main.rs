//! Runnable sandbox demo
//!
//! Seeds two demo accounts (alice, a plain user; bob, an admin) and serves
//! the control and XSS panels under the configured route prefix.

mod server;

use std::sync::Arc;

use axum::{Router, response::Redirect, routing::get};
use vulnlab::{Role, ToggleState, User, UserStore, VULNLAB_ROUTE_PREFIX};
use vulnlab_axum::vulnlab_router;

use server::{init_tracing, spawn_http_server};

async fn seed_demo_users() -> Result<(), Box<dyn std::error::Error>> {
    UserStore::upsert_user(User::new("alice".to_string(), Role::User)).await?;
    UserStore::upsert_user(User::new("bob".to_string(), Role::Admin)).await?;
    tracing::info!("Seeded demo users: alice (user), bob (admin)");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("demo_lab");

    vulnlab::init().await?;
    seed_demo_users().await?;

    // One shared security posture for the whole process; a restart resets it
    let toggles = Arc::new(ToggleState::new());

    let control_panel = format!("{}/control-panel", VULNLAB_ROUTE_PREFIX.as_str());
    let app = Router::new()
        .route("/", get(move || async move { Redirect::to(&control_panel) }))
        .nest(VULNLAB_ROUTE_PREFIX.as_str(), vulnlab_router(toggles));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(4000);

    let handle = spawn_http_server(port, app);
    handle.await?;

    Ok(())
}
