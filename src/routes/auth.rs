//! Auth routes: mock login, role signups, session lookup, logout.
//!
//! Nothing is checked against stored credentials. A form that passes
//! validation waits out the configured latency, records a session marker,
//! and hands back an HttpOnly cookie carrying its token.

use std::time::Duration;

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;

use crate::services::forms::{Accepted, FormError, LearnerSignupForm, LoginForm, TeacherSignupForm, Toast};
use crate::services::session::SessionMarker;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
const DASHBOARD_PATH: &str = "/dashboard";

/// Session token from the request cookie, if one was sent.
pub(crate) fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(COOKIE_NAME).map(Cookie::value).filter(|t| !t.is_empty())
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Session marker extracted from the session cookie.
/// Use as a handler parameter to require a session.
pub struct AuthUser {
    pub marker: SessionMarker,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar).ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = AppState::from_ref(state);
        let marker = app_state.sessions.get(token).await.ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { marker, token: token.to_owned() })
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: SessionMarker,
    pub toast: Toast,
    pub redirect: &'static str,
}

#[derive(Serialize)]
pub struct RejectedResponse {
    pub error: String,
    pub toast: Toast,
}

pub(crate) fn form_error_to_response(err: &FormError) -> Response {
    let body = RejectedResponse { error: err.to_string(), toast: err.toast() };
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

/// Wait out `delay`, replace any previous session, and set the new cookie.
async fn establish(state: &AppState, jar: CookieJar, accepted: Accepted, delay: Duration) -> Response {
    tokio::time::sleep(delay).await;

    if let Some(previous) = session_token(&jar) {
        state.sessions.clear(previous).await;
        state.close_owned_conversations(previous).await;
    }

    let Accepted { marker, toast } = accepted;
    let token = state.sessions.create(marker.clone()).await;
    tracing::info!(user_type = %marker.user_type, username = %marker.username, "session created");

    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    (jar, Json(AuthResponse { user: marker, toast, redirect: DASHBOARD_PATH })).into_response()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login` — mock login for either role.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(form): Json<LoginForm>) -> Response {
    match form.validate() {
        Ok(accepted) => establish(&state, jar, accepted, state.config.delays.login).await,
        Err(e) => {
            tracing::warn!(error = %e, "login rejected");
            form_error_to_response(&e)
        }
    }
}

/// `POST /api/auth/signup/learner`
pub async fn signup_learner(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(form): Json<LearnerSignupForm>,
) -> Response {
    match form.validate() {
        Ok(accepted) => establish(&state, jar, accepted, state.config.delays.learner_signup).await,
        Err(e) => {
            tracing::warn!(error = %e, "learner signup rejected");
            form_error_to_response(&e)
        }
    }
}

/// `POST /api/auth/signup/teacher`
pub async fn signup_teacher(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(form): Json<TeacherSignupForm>,
) -> Response {
    match form.validate() {
        Ok(accepted) => establish(&state, jar, accepted, state.config.delays.teacher_signup).await,
        Err(e) => {
            tracing::warn!(error = %e, "teacher signup rejected");
            form_error_to_response(&e)
        }
    }
}

/// `GET /api/auth/me` — return the current session marker.
pub async fn me(auth: AuthUser) -> Json<SessionMarker> {
    Json(auth.marker)
}

/// `POST /api/auth/logout` — clear session, owned conversations, and cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    state.sessions.clear(&auth.token).await;
    let closed = state.close_owned_conversations(&auth.token).await;
    tracing::info!(username = %auth.marker.username, closed, "session cleared");

    let cookie = Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .max_age(time::Duration::ZERO);

    let jar = CookieJar::new().add(cookie);
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
