mod config;
mod data_store;

pub(crate) use config::{DB_TABLE_USER_INPUTS, DB_TABLE_USERS};
pub(crate) use data_store::GENERIC_DATA_STORE;
