//! vulnlab - decision core for a broken-access-control / XSS teaching sandbox
//!
//! This crate holds the parts of the sandbox with actual branching logic:
//! the process-wide toggle flags, the role/flag authorization engine, the
//! sanitization gate, and the user-directory / input-store contracts that
//! back them. HTTP transport lives in the companion axum crate.

mod authz;
mod config;
mod coordination;
mod inputs;
mod sanitize;
mod storage;
mod toggles;
mod userdb;

#[cfg(test)]
mod test_utils;

pub use authz::{AccessVerdict, authorize_bulk, authorize_single};
pub use config::VULNLAB_ROUTE_PREFIX;
pub use coordination::{
    CoordinationError, clear_inputs, get_all_user_data, get_user_data, list_inputs, submit_input,
};
pub use inputs::{InputError, InputRecord, InputStore};
pub use sanitize::sanitize;
pub use toggles::{Flag, FlagSnapshot, ToggleState};
pub use userdb::{Role, User, UserError, UserStore};

/// Initialize the sandbox core
///
/// Creates the user and input tables in the configured data store.
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    userdb::init().await?;
    inputs::init().await?;
    Ok(())
}
