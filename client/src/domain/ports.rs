//! Outbound port for the remote user collection.
//!
//! In hexagonal terms this is a *driven* port: the roster calls it to reach
//! the remote collection without knowing (or importing) the transport. The
//! remote endpoint is a demo service that echoes writes back without storing
//! them, so implementations are honest about what the wire carries — the
//! caller decides how much of a response to trust.

use async_trait::async_trait;

/// A user as the remote collection reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUser {
    /// Identifier assigned by the remote collection.
    ///
    /// For created users this is a template echo, not durable storage;
    /// callers must not treat it as stable.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Company name, when the record carries one.
    pub company_name: Option<String>,
}

/// The body sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPayload {
    /// Combined display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Department label, sent as the company name.
    pub department: String,
}

/// Errors raised by user directory adapters.
///
/// Coarse and message-only: there is no retry metadata because nothing is
/// retried — each call is fire-once and the failure is surfaced as a single
/// condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// The request never completed at the transport level.
    #[error("user directory transport failed: {message}")]
    Transport {
        /// Transport failure detail.
        message: String,
    },
    /// The request ran out of time at the transport default deadline.
    #[error("user directory request timed out: {message}")]
    Timeout {
        /// Timeout detail.
        message: String,
    },
    /// The remote answered with a non-success status.
    #[error("user directory returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Bounded preview of the response body.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("user directory payload could not be decoded: {message}")]
    Decode {
        /// Decode failure detail.
        message: String,
    },
}

impl DirectoryError {
    /// Construct a [`DirectoryError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Construct a [`DirectoryError::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Construct a [`DirectoryError::Status`].
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Construct a [`DirectoryError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for the four calls against the remote user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the full collection.
    async fn list(&self) -> Result<Vec<RemoteUser>, DirectoryError>;

    /// Create a user. The response is a template echo; its id is not stable.
    async fn create(&self, payload: &UserPayload) -> Result<RemoteUser, DirectoryError>;

    /// Replace the user with the given remote id.
    async fn update(&self, id: u64, payload: &UserPayload) -> Result<RemoteUser, DirectoryError>;

    /// Delete the user with the given remote id.
    async fn delete(&self, id: u64) -> Result<(), DirectoryError>;
}

/// The id the fixture directory assigns to every created user, mirroring the
/// demo backend's template echo.
pub const FIXTURE_CREATED_ID: u64 = 11;

/// Deterministic in-memory directory for tests and network-free shells.
///
/// Mirrors the demo backend's non-persistence: `list` always returns the
/// seed, `create` and `update` echo the payload back, and nothing a caller
/// writes is ever visible in a later `list`.
#[derive(Debug, Clone)]
pub struct FixtureUserDirectory {
    seed: Vec<RemoteUser>,
}

impl FixtureUserDirectory {
    /// Directory answering `list` with the given seed.
    #[must_use]
    pub const fn new(seed: Vec<RemoteUser>) -> Self {
        Self { seed }
    }

    fn echo(id: u64, payload: &UserPayload) -> RemoteUser {
        RemoteUser {
            id,
            name: payload.name.clone(),
            email: payload.email.clone(),
            company_name: Some(payload.department.clone()),
        }
    }
}

impl Default for FixtureUserDirectory {
    fn default() -> Self {
        Self::new(vec![
            RemoteUser {
                id: 1,
                name: "Leanne Graham".to_owned(),
                email: "Sincere@april.biz".to_owned(),
                company_name: Some("Romaguera-Crona".to_owned()),
            },
            RemoteUser {
                id: 2,
                name: "Ervin Howell".to_owned(),
                email: "Shanna@melissa.tv".to_owned(),
                company_name: Some("Deckow-Crist".to_owned()),
            },
            RemoteUser {
                id: 3,
                name: "Clementine Bauch".to_owned(),
                email: "Nathan@yesenia.net".to_owned(),
                company_name: Some("Romaguera-Jacobson".to_owned()),
            },
        ])
    }
}

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn list(&self) -> Result<Vec<RemoteUser>, DirectoryError> {
        Ok(self.seed.clone())
    }

    async fn create(&self, payload: &UserPayload) -> Result<RemoteUser, DirectoryError> {
        Ok(Self::echo(FIXTURE_CREATED_ID, payload))
    }

    async fn update(&self, id: u64, payload: &UserPayload) -> Result<RemoteUser, DirectoryError> {
        Ok(Self::echo(id, payload))
    }

    async fn delete(&self, _id: u64) -> Result<(), DirectoryError> {
        Ok(())
    }
}
