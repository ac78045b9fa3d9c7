//! Database table configuration

use std::env;
use std::sync::LazyLock;

/// Table prefix from environment variable
pub static TABLE_PREFIX: LazyLock<String> =
    LazyLock::new(|| env::var("DB_TABLE_PREFIX").unwrap_or_else(|_| "lab_".to_string()));

/// Users table name
pub static DB_TABLE_USERS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_USERS").unwrap_or_else(|_| format!("{}{}", *TABLE_PREFIX, "users"))
});

/// Stored user inputs table name
pub static DB_TABLE_USER_INPUTS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_USER_INPUTS")
        .unwrap_or_else(|_| format!("{}{}", *TABLE_PREFIX, "user_inputs"))
});
