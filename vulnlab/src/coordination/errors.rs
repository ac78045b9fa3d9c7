//! Error types for the coordination layer

use thiserror::Error;

use crate::inputs::InputError;
use crate::userdb::UserError;

/// Errors that can occur while coordinating a sandbox operation
///
/// A denial is deliberately distinct from a missing resource so the
/// access-control boundary stays visible to the caller.
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// A required request parameter was absent or empty
    #[error("{0} is required")]
    MissingParameter(&'static str),

    /// The authorization engine refused the request
    #[error("Access Denied: {0}")]
    AccessDenied(&'static str),

    /// A looked-up resource does not exist
    #[error("{resource_type} not found: {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Error from the user directory
    #[error("User error: {0}")]
    UserError(UserError),

    /// Error from the input store
    #[error("Input error: {0}")]
    InputError(InputError),
}

impl CoordinationError {
    /// Log the error and return self
    ///
    /// Allows method chaining where an error is constructed and reported
    /// at the same site.
    pub fn log(self) -> Self {
        match &self {
            Self::MissingParameter(name) => tracing::warn!("Missing parameter: {}", name),
            Self::AccessDenied(reason) => tracing::warn!("Access denied: {}", reason),
            Self::ResourceNotFound {
                resource_type,
                resource_id,
            } => tracing::warn!("{} not found: {}", resource_type, resource_id),
            Self::UserError(err) => tracing::error!("User error: {}", err),
            Self::InputError(err) => tracing::error!("Input error: {}", err),
        }
        self
    }
}

// Custom From implementations that automatically log errors

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        let error = Self::UserError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<InputError> for CoordinationError {
    fn from(err: InputError) -> Self {
        let error = Self::InputError(err);
        tracing::error!("{}", error);
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<CoordinationError>();
    }

    #[test]
    fn test_error_display() {
        let err = CoordinationError::MissingParameter("username");
        assert_eq!(err.to_string(), "username is required");

        let err = CoordinationError::AccessDenied("Admin rights required");
        assert_eq!(err.to_string(), "Access Denied: Admin rights required");

        let err = CoordinationError::ResourceNotFound {
            resource_type: "User".to_string(),
            resource_id: "mallory".to_string(),
        };
        assert_eq!(err.to_string(), "User not found: mallory");
    }

    #[test]
    fn test_from_user_error() {
        let user_err = UserError::Storage("user db error".to_string());
        let err: CoordinationError = user_err.into();

        match err {
            CoordinationError::UserError(UserError::Storage(msg)) => {
                assert_eq!(msg, "user db error");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_from_input_error() {
        let input_err = InputError::Storage("input db error".to_string());
        let err: CoordinationError = input_err.into();

        match err {
            CoordinationError::InputError(InputError::Storage(msg)) => {
                assert_eq!(msg, "input db error");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_log_returns_self() {
        let err = CoordinationError::AccessDenied("Admin rights required").log();
        assert!(matches!(err, CoordinationError::AccessDenied(_)));
    }
}
