//! Router, handlers, and application configuration.

use std::path::PathBuf;
use std::sync::Arc;

use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router, extract::State};
use http::StatusCode;
use serde::Deserialize;
use tower_cookies::{Cookie, CookieManagerLayer, Cookies};

use crate::auth::{self, AuthGate};
use crate::extract::Authenticated;
use crate::render::render;
use crate::session::{CookieOptions, SessionId};
use crate::store::{self, RecordStore};

/// Application configuration.
///
/// # Example
///
/// ```rust
/// use turnstile::{AppConfig, CookieOptions};
///
/// let config = AppConfig::build()
///     .data_dir("/var/lib/turnstile")
///     .cookie(CookieOptions::build().name("sid").path("/"));
/// ```
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Root directory for persisted state; user records live under
    /// `<data_dir>/users`, session records under `<data_dir>/sessions`.
    pub data_dir: PathBuf,
    pub cookie: CookieOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            cookie: CookieOptions::default(),
        }
    }
}

impl AppConfig {
    /// Creates a new `AppConfig` with default values.
    pub fn build() -> Self {
        Self::default()
    }

    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn cookie(mut self, cookie: CookieOptions) -> Self {
        self.cookie = cookie;
        self
    }
}

/// Shared state behind every handler: the gate and the cookie settings.
#[derive(Clone, Debug)]
pub struct AppState<S: RecordStore> {
    pub gate: Arc<AuthGate<S>>,
    pub cookie: CookieOptions,
}

/// Builds the application router: login and signup forms, the gated home
/// page, and a 404 fallback for everything else.
pub fn build_router<S: RecordStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/login", get(login_form).post(login::<S>))
        .route("/signup", get(signup_form).post(signup::<S>))
        .route("/", get(home))
        .fallback(not_found)
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct Credentials {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

async fn login_form() -> Html<String> {
    Html(render("login", &[]))
}

async fn signup_form() -> Html<String> {
    Html(render("signup", &[]))
}

async fn login<S: RecordStore>(
    State(state): State<AppState<S>>,
    cookies: Cookies,
    Form(form): Form<Credentials>,
) -> Response {
    match state.gate.login(&form.username, &form.password).await {
        Ok(id) => grant(&state.cookie, &cookies, id),
        Err(err) => form_failure("login", &form.username, err),
    }
}

async fn signup<S: RecordStore>(
    State(state): State<AppState<S>>,
    cookies: Cookies,
    Form(form): Form<Credentials>,
) -> Response {
    match state.gate.signup(&form.username, &form.password).await {
        Ok(id) => grant(&state.cookie, &cookies, id),
        Err(err) => form_failure("signup", &form.username, err),
    }
}

async fn home(Authenticated(session): Authenticated) -> Html<String> {
    Html(render("home", &[("username", &session.username)]))
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(String::new())).into_response()
}

// A page rather than a bare 302: some browsers drop Set-Cookie on an
// immediate redirect response.
const REDIRECT_HOME_PAGE: &str =
    r#"<html><head><meta http-equiv="refresh" content="2;url=/" /></head></html>"#;

fn grant(options: &CookieOptions, cookies: &Cookies, id: SessionId) -> Response {
    let cookie = Cookie::build((options.name, id.to_string()))
        .http_only(options.http_only)
        .same_site(options.same_site)
        .secure(options.secure)
        .path(options.path)
        .build();
    cookies.add(cookie);

    Html(REDIRECT_HOME_PAGE).into_response()
}

fn form_failure(tpl: &str, username: &str, err: auth::Error) -> Response {
    let (status, msg) = match err {
        auth::Error::Validation => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "username and password are both required!",
        ),
        auth::Error::UsernameTaken => (StatusCode::UNPROCESSABLE_ENTITY, "username has been taken!"),
        auth::Error::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            "username or password is not correct!",
        ),
        auth::Error::Store(store::Error::InvalidKey(_)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "username contains unsupported characters!",
        ),
        auth::Error::Store(err) => {
            tracing::error!(err = %err, "store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "something went wrong, please try again later",
            )
        }
    };

    (
        status,
        Html(render(tpl, &[("username", username), ("msg", msg)])),
    )
        .into_response()
}
