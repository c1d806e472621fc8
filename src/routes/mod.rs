//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every portal page is backed by a JSON endpoint here: auth forms under
//! `/api/auth`, the role dashboard, read-only catalogs, and the two
//! chatbots under `/api/chat`.

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod dashboard;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full API router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/signup/learner", post(auth::signup_learner))
        .route("/api/auth/signup/teacher", post(auth::signup_teacher))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/dashboard", get(dashboard::dashboard))
        .route("/api/catalog/bursaries", get(catalog::bursaries))
        .route("/api/catalog/careers", get(catalog::careers))
        .route("/api/catalog/universities", get(catalog::universities))
        .route("/api/catalog/resources", get(catalog::resources))
        .route("/api/catalog/resource-subjects", get(catalog::resource_subjects))
        .route("/api/catalog/services/student", get(catalog::student_services))
        .route("/api/catalog/services/teacher", get(catalog::teacher_services))
        .route("/api/catalog/about", get(catalog::about))
        .route("/api/catalog/teacher-subjects", get(catalog::teacher_subjects))
        .route("/api/chat/general", post(chat::open_general))
        .route("/api/chat/learner", post(chat::open_learner))
        .route("/api/chat/{id}", get(chat::get_conversation).delete(chat::close_conversation))
        .route("/api/chat/{id}/messages", post(chat::send_message))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use axum::body::Body;
    use axum::http::{Request, header};
    use axum::response::Response;
    use tower::ServiceExt;

    use crate::state::AppState;

    /// Drive one request through the full router.
    pub async fn send(state: &AppState, request: Request<Body>) -> Response {
        super::app(state.clone()).oneshot(request).await.unwrap()
    }

    pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
        with_cookie(Request::get(uri), token).body(Body::empty()).unwrap()
    }

    pub fn delete(uri: &str, token: Option<&str>) -> Request<Body> {
        with_cookie(Request::delete(uri), token).body(Body::empty()).unwrap()
    }

    pub fn post_json(uri: &str, token: Option<&str>, body: &serde_json::Value) -> Request<Body> {
        with_cookie(Request::post(uri), token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn with_cookie(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
        match token {
            Some(token) => builder.header(header::COOKIE, format!("{}={token}", super::auth::COOKIE_NAME)),
            None => builder,
        }
    }

    pub async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Token from the `set-cookie` header, if the response set one.
    pub fn set_cookie_token(response: &Response) -> Option<String> {
        let raw = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
        let pair = raw.split(';').next()?;
        pair.split_once('=').map(|(_, value)| value.to_owned())
    }

    /// Sign up the demo learner and return their session token.
    pub async fn learner_session(state: &AppState, full_name: &str) -> String {
        let body = serde_json::json!({
            "full_name": full_name,
            "email": "learner@example.com",
            "password": "secret",
            "school_name": "Greenside High",
            "report_file": "report.pdf",
        });
        let response = send(state, post_json("/api/auth/signup/learner", None, &body)).await;
        set_cookie_token(&response).unwrap()
    }

    /// Sign up a teacher and return their session token.
    pub async fn teacher_session(state: &AppState, full_name: &str, subject: &str) -> String {
        let body = serde_json::json!({
            "full_name": full_name,
            "email": "teacher@example.com",
            "password": "secret",
            "subject": subject,
        });
        let response = send(state, post_json("/api/auth/signup/teacher", None, &body)).await;
        set_cookie_token(&response).unwrap()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
