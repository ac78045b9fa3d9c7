use http::StatusCode;
use vulnlab::CoordinationError;

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Implementation for CoordinationError to map variants to appropriate status codes
///
/// A denial stays a 403 with its reason text; it is never collapsed into
/// the 404 path, so the access-control boundary remains visible.
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match e {
                CoordinationError::MissingParameter(_) => StatusCode::BAD_REQUEST,
                CoordinationError::AccessDenied(_) => StatusCode::FORBIDDEN,
                CoordinationError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
                CoordinationError::UserError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                CoordinationError::InputError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string())
        })
    }
}
