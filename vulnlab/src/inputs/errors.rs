use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum InputError {
    #[error("Storage error: {0}")]
    Storage(String),
}
