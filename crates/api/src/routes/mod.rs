pub mod dashboard;
pub mod health;
pub mod moderation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /moderation                          file flag (POST), review queue (GET)
/// /moderation/{content_id}             resolve pending flags (PATCH)
/// /moderation/{content_id}/content     remove flagged content (DELETE)
///
/// /dashboard/stats                     aggregate stat cards (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Flag lifecycle and content removal.
        .nest("/moderation", moderation::router())
        // Dashboard stat cards.
        .nest("/dashboard", dashboard::router())
}
