//! Signup, login, and the session gate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::{SessionId, SessionRecord};
use crate::store::{self, RecordStore};

#[derive(Error, Debug)]
pub enum Error {
    #[error("username and password are both required")]
    Validation,
    #[error("username has been taken")]
    UsernameTaken,
    #[error("username or password is not correct")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] store::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// A stored user credential.
///
/// The password is kept verbatim; this crate is a demo and deliberately
/// performs no hashing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
}

/// The authentication gate: signup, login, and session checks over two
/// record stores, one keyed by username, the other by session id.
#[derive(Clone, Debug)]
pub struct AuthGate<S: RecordStore> {
    users: S,
    sessions: S,
}

impl<S: RecordStore> AuthGate<S> {
    pub fn new(users: S, sessions: S) -> Self {
        Self { users, sessions }
    }

    /// Registers a new user and issues their first session.
    ///
    /// Fails with [`Error::Validation`] when either field is empty and
    /// [`Error::UsernameTaken`] when a record already exists for `username`.
    /// Two concurrent signups for the same fresh username can both pass the
    /// existence check and race the write; the later write wins.
    #[tracing::instrument(name = "signing up", skip(self, password))]
    pub async fn signup(&self, username: &str, password: &str) -> Result<SessionId> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::Validation);
        }

        if self.users.get::<UserRecord>(username).await?.is_some() {
            return Err(Error::UsernameTaken);
        }

        let user = UserRecord {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        self.users.set(username, &user).await?;

        self.issue_session(username).await
    }

    /// Checks credentials and issues a fresh session.
    ///
    /// The password comparison is plaintext equality against the stored
    /// record. An unknown username and a wrong password are indistinguishable
    /// to the caller, both are [`Error::InvalidCredentials`].
    #[tracing::instrument(name = "logging in", skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionId> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::Validation);
        }

        let user = match self.users.get::<UserRecord>(username).await {
            Ok(user) => user,
            // A name the store cannot even key can never have been signed up.
            Err(store::Error::InvalidKey(_)) => None,
            Err(err) => return Err(err.into()),
        };

        match user {
            Some(user) if user.password == password => self.issue_session(username).await,
            _ => Err(Error::InvalidCredentials),
        }
    }

    /// Stores a new session record for `username` and returns its id.
    ///
    /// Every successful signup or login gets its own session; old sessions
    /// for the same user stay valid forever.
    #[tracing::instrument(name = "issuing session", skip(self))]
    pub async fn issue_session(&self, username: &str) -> Result<SessionId> {
        let id = SessionId::default();
        let record = SessionRecord {
            username: username.to_owned(),
        };
        self.sessions.set(&id.to_string(), &record).await?;

        Ok(id)
    }

    /// Resolves a presented `sid` cookie value to its session record.
    ///
    /// Returns `None` for a missing cookie, a malformed id, or an id that was
    /// never issued. Presence of the cookie alone never passes the gate; the
    /// stored record must exist.
    #[tracing::instrument(name = "checking session", skip_all)]
    pub async fn require_session(&self, cookie: Option<&str>) -> Result<Option<SessionRecord>> {
        let Some(raw) = cookie else {
            return Ok(None);
        };

        let Ok(id) = raw.parse::<SessionId>() else {
            tracing::warn!("possibly suspicious activity: malformed session id");
            return Ok(None);
        };

        Ok(self.sessions.get(&id.to_string()).await?)
    }
}
