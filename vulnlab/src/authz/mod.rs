//! Role/flag authorization engine
//!
//! Pure decision functions over a looked-up user and one flag snapshot.
//! The engine never touches storage and has no side effects; the caller
//! performs the directory lookup first, so "unknown username" is reported
//! before authorization ever runs and stays distinct from a denial.

use crate::toggles::FlagSnapshot;
use crate::userdb::{Role, User};

/// Outcome of an authorization decision
///
/// Derived per request, never stored. A denial carries the human-readable
/// reason shown to the caller; keeping the reason visible is part of the
/// teaching contract, so it is never downgraded to a not-found answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessVerdict {
    /// The caller may see the requested payload
    Allow,
    /// The caller is refused, with a reason
    Deny {
        /// Why access was refused
        reason: &'static str,
    },
}

impl AccessVerdict {
    /// Whether this verdict permits access
    pub fn is_allow(&self) -> bool {
        matches!(self, AccessVerdict::Allow)
    }
}

pub(crate) const DENY_SINGLE_ADMIN_INACTIVE: &str = "Admin rights required";
pub(crate) const DENY_BULK_NOT_ADMIN: &str =
    "Only admins can fetch all data when protection is enabled";

/// Decide whether a user may see their own record
///
/// Protection off: always allowed. Protection on: a plain user may still
/// see their own record, while an admin-role account additionally needs
/// the process-wide admin flag to be active.
pub fn authorize_single(user: &User, flags: &FlagSnapshot) -> AccessVerdict {
    if !flags.protection_enabled {
        return AccessVerdict::Allow;
    }

    match (user.role, flags.admin_active) {
        (Role::User, _) => AccessVerdict::Allow,
        (Role::Admin, true) => AccessVerdict::Allow,
        (Role::Admin, false) => AccessVerdict::Deny {
            reason: DENY_SINGLE_ADMIN_INACTIVE,
        },
    }
}

/// Decide whether a requester may see every user record
///
/// Protection off: always allowed. Protection on: requires both the
/// requester's stored role to be admin and the process-wide admin flag to
/// be active. A user-role account never reaches bulk data while
/// protection is on, regardless of the admin flag.
pub fn authorize_bulk(requester: &User, flags: &FlagSnapshot) -> AccessVerdict {
    if !flags.protection_enabled {
        return AccessVerdict::Allow;
    }

    match (requester.role, flags.admin_active) {
        (Role::Admin, true) => AccessVerdict::Allow,
        (Role::Admin, false) | (Role::User, _) => AccessVerdict::Deny {
            reason: DENY_BULK_NOT_ADMIN,
        },
    }
}
