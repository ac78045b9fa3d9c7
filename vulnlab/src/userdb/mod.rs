mod errors;
mod postgres;
mod sqlite;
mod store_type;
mod types;

pub use errors::UserError;
pub use store_type::UserStore;
pub use types::{Role, User};

pub(crate) async fn init() -> Result<(), UserError> {
    UserStore::init().await
}
