use axum::http::{StatusCode, header};
use serde_json::json;

use super::*;
use crate::routes::test_helpers::{get, json_body, learner_session, post_json, send, set_cookie_token};
use crate::services::chatbot::Bot;
use crate::services::conversation::Conversation;
use crate::services::session::UserType;
use crate::state::test_helpers::{sample_profile, seed_conversation, test_app_state};

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_sets_cookie_and_records_session() {
    let state = test_app_state();
    let body = json!({ "user_type": "learner", "email": "thandi@school.za", "password": "pw" });
    let response = send(&state, post_json("/api/auth/login", None, &body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let raw_cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap().to_owned();
    assert!(raw_cookie.contains("HttpOnly"));
    let token = set_cookie_token(&response).unwrap();
    assert_eq!(token.len(), 64);

    let json = json_body(response).await;
    assert_eq!(json["user"]["username"], "thandi");
    assert_eq!(json["user"]["user_type"], "learner");
    assert_eq!(json["redirect"], "/dashboard");
    assert_eq!(json["toast"]["title"], "Welcome back!");
    assert_eq!(json["toast"]["description"], "Logging in as learner...");

    let marker = state.sessions.get(&token).await.unwrap();
    assert_eq!(marker.username, "thandi");
}

#[tokio::test]
async fn teacher_login_defaults_subject() {
    let state = test_app_state();
    let body = json!({ "user_type": "teacher", "email": "sipho@school.za", "password": "pw" });
    let response = send(&state, post_json("/api/auth/login", None, &body)).await;
    let token = set_cookie_token(&response).unwrap();

    let marker = state.sessions.get(&token).await.unwrap();
    assert_eq!(marker.user_type, UserType::Teacher);
    assert_eq!(marker.subject.as_deref(), Some("Mathematics"));
}

#[tokio::test]
async fn login_with_empty_password_is_blocked() {
    let state = test_app_state();
    let body = json!({ "user_type": "learner", "email": "thandi@school.za", "password": "" });
    let response = send(&state, post_json("/api/auth/login", None, &body)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let json = json_body(response).await;
    assert_eq!(json["toast"]["variant"], "destructive");
    assert_eq!(json["toast"]["description"], "Please enter email and password");
    assert_eq!(state.sessions.len().await, 0);
}

#[tokio::test]
async fn login_replaces_previous_session() {
    let state = test_app_state();
    let old = learner_session(&state, "Thandi").await;
    seed_conversation(&state, Conversation::new(Bot::Learner(sample_profile()), Some(old.clone()))).await;

    let body = json!({ "user_type": "learner", "email": "thandi@school.za", "password": "pw" });
    let response = send(&state, post_json("/api/auth/login", Some(&old), &body)).await;
    let new = set_cookie_token(&response).unwrap();

    assert_ne!(old, new);
    assert!(state.sessions.get(&old).await.is_none());
    assert_eq!(state.sessions.len().await, 1);
    assert!(state.conversations.read().await.is_empty());
}

// =============================================================================
// signup
// =============================================================================

#[tokio::test]
async fn learner_signup_uses_full_name() {
    let state = test_app_state();
    let token = learner_session(&state, "Thandi Mokoena").await;

    let marker = state.sessions.get(&token).await.unwrap();
    assert_eq!(marker.user_type, UserType::Learner);
    assert_eq!(marker.username, "Thandi Mokoena");
    assert_eq!(marker.subject, None);
}

#[tokio::test]
async fn learner_signup_without_report_is_blocked() {
    let state = test_app_state();
    let body = json!({
        "full_name": "Thandi",
        "email": "t@example.com",
        "password": "pw",
        "school_name": "Greenside High",
    });
    let response = send(&state, post_json("/api/auth/signup/learner", None, &body)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = json_body(response).await;
    assert_eq!(json["error"], "missing fields: report_file");
    assert_eq!(json["toast"]["description"], "Please fill in all fields and upload your school report");
    assert_eq!(state.sessions.len().await, 0);
}

#[tokio::test]
async fn teacher_signup_success_toast_names_subject() {
    let state = test_app_state();
    let body = json!({
        "full_name": "Sipho Dlamini",
        "email": "s@example.com",
        "password": "pw",
        "subject": "Chemistry",
    });
    let response = send(&state, post_json("/api/auth/signup/teacher", None, &body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["toast"]["description"], "Welcome Sipho Dlamini! Teaching Chemistry");
    assert_eq!(json["user"]["subject"], "Chemistry");
}

#[tokio::test]
async fn teacher_signup_with_unknown_subject_is_blocked() {
    let state = test_app_state();
    let body = json!({
        "full_name": "Sipho",
        "email": "s@example.com",
        "password": "pw",
        "subject": "Astrology",
    });
    let response = send(&state, post_json("/api/auth/signup/teacher", None, &body)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.sessions.len().await, 0);
}

// =============================================================================
// me / logout
// =============================================================================

#[tokio::test]
async fn me_returns_marker() {
    let state = test_app_state();
    let token = learner_session(&state, "Thandi").await;

    let response = send(&state, get("/api/auth/me", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["username"], "Thandi");
}

#[tokio::test]
async fn me_without_cookie_is_unauthorized() {
    let state = test_app_state();
    let response = send(&state, get("/api/auth/me", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_session_cookie_and_owned_conversations() {
    let state = test_app_state();
    let token = learner_session(&state, "Thandi").await;
    seed_conversation(&state, Conversation::new(Bot::Learner(sample_profile()), Some(token.clone()))).await;
    let public = seed_conversation(&state, Conversation::new(Bot::General, None)).await;

    let response = send(&state, post_json("/api/auth/logout", Some(&token), &json!({}))).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(set_cookie_token(&response).as_deref(), Some(""));

    assert!(state.sessions.get(&token).await.is_none());
    let conversations = state.conversations.read().await;
    assert_eq!(conversations.len(), 1);
    assert!(conversations.contains_key(&public));
    drop(conversations);

    let response = send(&state, get("/api/dashboard", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_session_is_unauthorized() {
    let state = test_app_state();
    let response = send(&state, post_json("/api/auth/logout", None, &json!({}))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn form_error_maps_to_unprocessable() {
    let err = FormError::UnknownSubject("Astrology".into());
    assert_eq!(form_error_to_response(&err).status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn session_token_ignores_empty_cookie() {
    let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, ""));
    assert_eq!(session_token(&jar), None);
}
