use crate::authz::{AccessVerdict, authorize_bulk, authorize_single};
use crate::toggles::FlagSnapshot;
use crate::userdb::{User, UserStore};

use super::errors::CoordinationError;

/// Fetch a single user's record, gated by the authorization engine
///
/// The directory lookup runs first: an unknown username is reported as
/// not-found before authorization is ever consulted.
pub async fn get_user_data(
    username: &str,
    flags: &FlagSnapshot,
) -> Result<User, CoordinationError> {
    if username.is_empty() {
        return Err(CoordinationError::MissingParameter("username").log());
    }

    tracing::debug!("Fetching data for user: {}", username);

    let user = UserStore::find_by_username(username).await?.ok_or_else(|| {
        CoordinationError::ResourceNotFound {
            resource_type: "User".to_string(),
            resource_id: username.to_string(),
        }
        .log()
    })?;

    tracing::debug!(
        "protection_enabled={}, admin_active={}",
        flags.protection_enabled,
        flags.admin_active
    );

    match authorize_single(&user, flags) {
        AccessVerdict::Allow => Ok(user),
        AccessVerdict::Deny { reason } => Err(CoordinationError::AccessDenied(reason).log()),
    }
}

/// Fetch every user record, gated by the bulk authorization rule
///
/// The requesting user's stored role is looked up from the directory; the
/// shared admin flag alone is not enough while protection is on.
pub async fn get_all_user_data(
    username: &str,
    flags: &FlagSnapshot,
) -> Result<Vec<User>, CoordinationError> {
    if username.is_empty() {
        return Err(CoordinationError::MissingParameter("username").log());
    }

    let requester = UserStore::find_by_username(username).await?.ok_or_else(|| {
        CoordinationError::ResourceNotFound {
            resource_type: "User".to_string(),
            resource_id: username.to_string(),
        }
        .log()
    })?;

    tracing::debug!(
        "Bulk fetch by {}: protection_enabled={}, admin_active={}",
        requester.username,
        flags.protection_enabled,
        flags.admin_active
    );

    match authorize_bulk(&requester, flags) {
        AccessVerdict::Allow => Ok(UserStore::get_all_users().await?),
        AccessVerdict::Deny { reason } => Err(CoordinationError::AccessDenied(reason).log()),
    }
}
