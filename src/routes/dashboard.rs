//! Dashboard route.

use axum::response::Json;

use crate::routes::auth::AuthUser;
use crate::services::dashboard::{self, DashboardView};

/// `GET /api/dashboard` — the signed-in user's role dashboard.
///
/// Without a session the extractor rejects with 401, the API's equivalent
/// of bouncing the visitor to the login page.
pub async fn dashboard(auth: AuthUser) -> Json<DashboardView> {
    Json(dashboard::build(&auth.marker))
}
