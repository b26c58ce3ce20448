//! # Turnstile: file-backed sessions and a cookie auth gate for axum
//!
//! `turnstile` is a small web-authentication crate: user credentials and
//! session tokens persist as one JSON file per key under a data directory,
//! and a cookie check gates protected pages behind login.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use turnstile::store::FileStore;
//! use turnstile::{AppConfig, AppState, AuthGate, build_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::build().data_dir("./data");
//!
//!     let users = FileStore::open(config.data_dir.join("users")).unwrap();
//!     let sessions = FileStore::open(config.data_dir.join("sessions")).unwrap();
//!
//!     let state = AppState {
//!         gate: Arc::new(AuthGate::new(users, sessions)),
//!         cookie: config.cookie,
//!     };
//!
//!     let app = build_router(state);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```
//!
//! The router serves `GET`/`POST /login` and `/signup`, and a gated `GET /`
//! that redirects to `/login` unless the request carries a `sid` cookie whose
//! session record exists.
//!
//! # Stores
//!
//! Persistence goes through the [`store::RecordStore`] trait. Two
//! implementations ship with the crate:
//!
//! - [`store::FileStore`] — one JSON file per key under a namespace
//!   directory; the durable store the binary runs on.
//! - [`store::MemoryStore`] — a HashMap behind a lock, for tests.
//!
//! The gate itself is usable without the router:
//!
//! ```rust,no_run
//! use turnstile::AuthGate;
//! use turnstile::store::MemoryStore;
//!
//! # async fn demo() {
//! let gate = AuthGate::new(MemoryStore::new(), MemoryStore::new());
//!
//! let sid = gate.signup("alice", "pw1").await.unwrap();
//! let session = gate.require_session(Some(&sid.to_string())).await.unwrap();
//! assert_eq!(session.unwrap().username, "alice");
//! # }
//! ```
//!
//! # What this crate does not do
//!
//! This is a demo of the storage and gating contracts, not a hardened auth
//! system. Passwords are stored in plaintext, sessions never expire, there is
//! no TLS termination and no CSRF protection. Do not put it in front of
//! anything you care about.

pub use cookie;

mod app;
pub use app::*;

mod auth;
pub use auth::*;

mod extract;
pub use extract::*;

mod render;
pub use render::render;

mod session;
pub use session::*;

pub mod store;

pub use tower_cookies;
