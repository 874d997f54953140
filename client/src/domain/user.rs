//! User records shown by the table.

use serde::{Deserialize, Serialize};

use crate::domain::ports::RemoteUser;

/// Department shown when a remote record carries no company.
pub const DEPARTMENT_FALLBACK: &str = "N/A";

/// A row of the displayed user table.
///
/// ## Invariants
/// - `id` is unique within the roster and stable for the lifetime of the
///   record; it is assigned locally on create, never taken from the remote
///   response.
/// - `full_name` always equals the trimmed single-space join of the form's
///   first and last name fields ([`combine_name`] contract).
///
/// [`combine_name`]: crate::domain::name::combine_name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Local identifier, unique within the roster.
    pub id: u64,
    /// Display name, first and last name joined.
    pub full_name: String,
    /// Contact email address.
    pub email: String,
    /// Department label, [`DEPARTMENT_FALLBACK`] when the remote record had
    /// no company.
    pub department: String,
}

impl UserRecord {
    /// Map a remote user onto a table row, applying the department fallback.
    #[must_use]
    pub fn from_remote(remote: RemoteUser) -> Self {
        let RemoteUser {
            id,
            name,
            email,
            company_name,
        } = remote;
        Self {
            id,
            full_name: name,
            email,
            department: company_name.unwrap_or_else(|| DEPARTMENT_FALLBACK.to_owned()),
        }
    }
}
