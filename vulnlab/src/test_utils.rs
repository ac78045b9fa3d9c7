//! Shared test initialization
//!
//! Database-backed tests across the crate go through one process-wide
//! data store, so they run under `#[serial]` and share this setup. The
//! store URL points at a named shared-cache in-memory SQLite database so
//! every pooled connection sees the same tables.

use std::sync::Once;

use crate::inputs::InputStore;
use crate::userdb::UserStore;

/// Initialize the test environment and the database tables
///
/// Loads `.env_test` (falling back to `.env`) once, then fills in
/// in-memory SQLite defaults for anything still unset so the suite runs
/// without external configuration.
pub async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }

        unsafe {
            if std::env::var("GENERIC_DATA_STORE_TYPE").is_err() {
                std::env::set_var("GENERIC_DATA_STORE_TYPE", "sqlite");
            }
            if std::env::var("GENERIC_DATA_STORE_URL").is_err() {
                std::env::set_var(
                    "GENERIC_DATA_STORE_URL",
                    "sqlite:file:vulnlab_test?mode=memory&cache=shared",
                );
            }
        }
    });

    if let Err(e) = UserStore::init().await {
        eprintln!("Warning: Failed to initialize UserStore: {e}");
    }
    if let Err(e) = InputStore::init().await {
        eprintln!("Warning: Failed to initialize InputStore: {e}");
    }
}
