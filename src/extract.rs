use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use http::{StatusCode, header::LOCATION, request::Parts};
use tower_cookies::Cookies;

use crate::app::AppState;
use crate::session::SessionRecord;
use crate::store::RecordStore;

/// Axum extractor for handlers behind the login gate.
///
/// Reads the session cookie, loads its record through
/// [`AuthGate::require_session`](crate::AuthGate::require_session), and
/// rejects ungated requests with a 302 to `/login`.
#[derive(Clone, Debug)]
pub struct Authenticated(pub SessionRecord);

impl<S> FromRequestParts<AppState<S>> for Authenticated
where
    S: RecordStore,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>().cloned().ok_or_else(|| {
            tracing::error!("cookie layer not found in the request extensions");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })?;

        let sid = cookies
            .get(state.cookie.name)
            .map(|cookie| cookie.value().to_owned());

        match state.gate.require_session(sid.as_deref()).await {
            Ok(Some(record)) => Ok(Self(record)),
            Ok(None) => Err((StatusCode::FOUND, [(LOCATION, "/login")]).into_response()),
            Err(err) => {
                tracing::error!(err = %err, "failed to load session from store");
                Err(StatusCode::INTERNAL_SERVER_ERROR.into_response())
            }
        }
    }
}
