//! Catalog routes. Read-only, no session required.

use axum::extract::Query;
use axum::response::Json;
use serde::Deserialize;

use crate::services::catalog::{
    self, ADMIN, AdminInfo, BURSARIES, Bursary, CAREERS, Career, RESOURCE_SUBJECTS, ResourceCategory,
    STUDENT_SERVICES, Service, TEACHER_SERVICES, TEACHER_SUBJECTS, UNIVERSITIES, University,
};

/// `GET /api/catalog/bursaries`
pub async fn bursaries() -> Json<&'static [Bursary]> {
    Json(BURSARIES)
}

/// `GET /api/catalog/careers`
pub async fn careers() -> Json<&'static [Career]> {
    Json(CAREERS)
}

/// `GET /api/catalog/universities`
pub async fn universities() -> Json<&'static [University]> {
    Json(UNIVERSITIES)
}

#[derive(Deserialize)]
pub struct ResourceQuery {
    pub subject: Option<String>,
}

/// `GET /api/catalog/resources?subject=` — `All` or no subject returns everything.
pub async fn resources(Query(query): Query<ResourceQuery>) -> Json<Vec<ResourceCategory>> {
    Json(catalog::resources(query.subject.as_deref()))
}

/// `GET /api/catalog/resource-subjects`
pub async fn resource_subjects() -> Json<&'static [&'static str]> {
    Json(RESOURCE_SUBJECTS)
}

/// `GET /api/catalog/services/student`
pub async fn student_services() -> Json<&'static [Service]> {
    Json(STUDENT_SERVICES)
}

/// `GET /api/catalog/services/teacher`
pub async fn teacher_services() -> Json<&'static [Service]> {
    Json(TEACHER_SERVICES)
}

/// `GET /api/catalog/about`
pub async fn about() -> Json<AdminInfo> {
    Json(ADMIN)
}

/// `GET /api/catalog/teacher-subjects`
pub async fn teacher_subjects() -> Json<&'static [&'static str]> {
    Json(TEACHER_SUBJECTS)
}
