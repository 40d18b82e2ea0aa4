//! Route definitions for the moderation surface.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::moderation;
use crate::state::AppState;

/// Moderation routes, nested under `/moderation`.
///
/// ```text
/// POST   /                          file_flag
/// GET    /                          list_flagged
/// PATCH  /{content_id}              resolve_flags
/// DELETE /{content_id}/content      remove_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(moderation::list_flagged).post(moderation::file_flag),
        )
        .route("/{content_id}", patch(moderation::resolve_flags))
        .route(
            "/{content_id}/content",
            delete(moderation::remove_content),
        )
}
