//! Session records and cookie configuration.

use cookie::SameSite;
use serde::{Deserialize, Serialize};

mod id;
pub use id::SessionId;

/// The record stored under a session id: who the session belongs to.
///
/// Session records are written once at issuance and never expired or
/// deleted; the gate re-reads them on every request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub username: String,
}

/// Configuration options for the session cookie.
///
/// # Example
///
/// ```rust
/// use turnstile::CookieOptions;
///
/// let cookie_options = CookieOptions::build()
///     .name("sid")
///     .http_only(true)
///     .same_site(cookie::SameSite::Lax)
///     .path("/");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CookieOptions {
    pub name: &'static str,
    pub http_only: bool,
    pub same_site: SameSite,
    pub secure: bool,
    pub path: &'static str,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            name: "sid",
            http_only: true,
            same_site: SameSite::Lax,
            secure: false,
            path: "/",
        }
    }
}

impl CookieOptions {
    /// Creates a new `CookieOptions` with default values.
    pub fn build() -> Self {
        Self::default()
    }

    /// Sets the name of the cookie.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn path(mut self, path: &'static str) -> Self {
        self.path = path;
        self
    }
}
