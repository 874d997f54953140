//! The authoritative in-memory user roster.
//!
//! This service implements the data-consistency contract between the form,
//! the remote collection, and the displayed table. The remote endpoint does
//! not persist writes, so the roster treats its own list as the real store:
//! every operation first lets the gateway call resolve, then applies exactly
//! one local mutation — append, replace in place, or remove — for the
//! targeted id. Gateway failures leave the list untouched.

use crate::domain::form::FormValues;
use crate::domain::name::combine_name;
use crate::domain::ports::{DirectoryError, UserDirectory, UserPayload};
use crate::domain::user::UserRecord;

/// Operation failures surfaced to the shell.
///
/// Coarse by design: one condition per operation, rendered as the banner
/// text the shell shows, with the gateway failure attached as the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// The bulk fetch failed; the list was left as previously set.
    #[error("Failed to fetch users")]
    Fetch {
        /// Gateway failure that caused this.
        #[source]
        source: DirectoryError,
    },
    /// The create call failed; nothing was appended.
    #[error("Failed to add user")]
    Create {
        /// Gateway failure that caused this.
        #[source]
        source: DirectoryError,
    },
    /// The update call failed; the record kept its prior values.
    #[error("Failed to update user")]
    Update {
        /// Gateway failure that caused this.
        #[source]
        source: DirectoryError,
    },
    /// The delete call failed; the record was retained.
    #[error("Failed to delete user")]
    Delete {
        /// Gateway failure that caused this.
        #[source]
        source: DirectoryError,
    },
}

/// Single source of truth for what the user table currently shows.
///
/// The roster exclusively owns its list; all mutation flows through
/// [`fetch_all`](Self::fetch_all), [`create`](Self::create),
/// [`update`](Self::update), and [`delete`](Self::delete). Operations take
/// `&mut self`, so invocations are serialized by construction — the
/// single-operator assumption the id-assignment policy relies on is enforced
/// by ownership rather than locking.
pub struct UserRoster<D> {
    directory: D,
    users: Vec<UserRecord>,
    loading: bool,
    error: Option<String>,
    success: Option<String>,
}

impl<D> UserRoster<D> {
    /// A roster with an empty list, in the loading state, bound to the given
    /// directory gateway.
    pub const fn new(directory: D) -> Self {
        Self {
            directory,
            users: Vec::new(),
            loading: true,
            error: None,
            success: None,
        }
    }

    /// The gateway this roster calls through.
    #[must_use]
    pub const fn directory(&self) -> &D {
        &self.directory
    }

    /// The records the table renders, in display order.
    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Whether the initial fetch has yet to resolve.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Banner text for the most recent failure, until dismissed or until the
    /// next successful operation.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Transient confirmation text for the most recent successful mutation.
    #[must_use]
    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Clear the failure banner (the shell's explicit dismissal).
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Take the confirmation text, clearing it (the shell's auto-dismissing
    /// snackbar).
    pub fn take_success(&mut self) -> Option<String> {
        self.success.take()
    }

    fn note_success(&mut self, message: &str) {
        self.success = Some(message.to_owned());
        self.error = None;
    }

    fn note_failure(&mut self, error: &RosterError) {
        tracing::warn!(%error, "roster operation failed");
        self.error = Some(error.to_string());
    }

    fn next_local_id(&self) -> u64 {
        self.users.len() as u64 + 1
    }
}

impl<D: UserDirectory> UserRoster<D> {
    /// Replace the whole list from the remote collection.
    ///
    /// Each remote user maps onto a [`UserRecord`] with the department
    /// fallback applied. On failure the list is left as previously set. The
    /// loading flag clears regardless of outcome.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Fetch`] when the gateway call fails.
    pub async fn fetch_all(&mut self) -> Result<(), RosterError> {
        let outcome = self.directory.list().await;
        self.loading = false;
        match outcome {
            Ok(remote) => {
                self.users = remote.into_iter().map(UserRecord::from_remote).collect();
                self.error = None;
                tracing::debug!(count = self.users.len(), "roster refreshed");
                Ok(())
            }
            Err(source) => {
                let error = RosterError::Fetch { source };
                self.note_failure(&error);
                Err(error)
            }
        }
    }

    /// Create a user from validated form values.
    ///
    /// The remote response body is ignored beyond success: the demo backend
    /// echoes a template id without storing anything, so the new record's id
    /// is assigned locally as `list length + 1`. Swapping this for the
    /// remote-assigned id would break the working behaviour against the
    /// non-persistent backend; the local list is the real store.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Create`] when the gateway call fails; nothing
    /// is appended in that case.
    pub async fn create(&mut self, values: &FormValues) -> Result<(), RosterError> {
        let full_name = combine_name(&values.first_name, &values.last_name);
        let payload = UserPayload {
            name: full_name.clone(),
            email: values.email.clone(),
            department: values.department.clone(),
        };
        match self.directory.create(&payload).await {
            Ok(_echo) => {
                let record = UserRecord {
                    id: self.next_local_id(),
                    full_name,
                    email: payload.email,
                    department: payload.department,
                };
                tracing::debug!(id = record.id, "user appended to roster");
                self.users.push(record);
                self.note_success("User added successfully!");
                Ok(())
            }
            Err(source) => {
                let error = RosterError::Create { source };
                self.note_failure(&error);
                Err(error)
            }
        }
    }

    /// Replace the fields of the record with the given id.
    ///
    /// On success the matching record's name, email, and department are
    /// replaced in place, preserving its position; no other record changes.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Update`] when the gateway call fails; the
    /// record keeps its prior values in that case.
    pub async fn update(&mut self, id: u64, values: &FormValues) -> Result<(), RosterError> {
        let full_name = combine_name(&values.first_name, &values.last_name);
        let payload = UserPayload {
            name: full_name.clone(),
            email: values.email.clone(),
            department: values.department.clone(),
        };
        match self.directory.update(id, &payload).await {
            Ok(_echo) => {
                if let Some(record) = self.users.iter_mut().find(|record| record.id == id) {
                    record.full_name = full_name;
                    record.email = payload.email;
                    record.department = payload.department;
                    tracing::debug!(id, "user replaced in roster");
                }
                self.note_success("User updated successfully!");
                Ok(())
            }
            Err(source) => {
                let error = RosterError::Update { source };
                self.note_failure(&error);
                Err(error)
            }
        }
    }

    /// Remove the record with the given id.
    ///
    /// Confirmation is the shell's responsibility, before this is invoked.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Delete`] when the gateway call fails; the
    /// record is retained in that case.
    pub async fn delete(&mut self, id: u64) -> Result<(), RosterError> {
        match self.directory.delete(id).await {
            Ok(()) => {
                self.users.retain(|record| record.id != id);
                tracing::debug!(id, "user removed from roster");
                self.note_success("User deleted successfully!");
                Ok(())
            }
            Err(source) => {
                let error = RosterError::Delete { source };
                self.note_failure(&error);
                Err(error)
            }
        }
    }
}
