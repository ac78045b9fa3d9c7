mod errors;
mod postgres;
mod sqlite;
mod store_type;
mod types;

pub use errors::InputError;
pub use store_type::InputStore;
pub use types::InputRecord;

pub(crate) async fn init() -> Result<(), InputError> {
    InputStore::init().await
}
