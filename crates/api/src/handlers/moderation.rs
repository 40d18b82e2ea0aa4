//! Handlers for the content flag lifecycle.
//!
//! Filing a flag, listing the pending review queue, resolving all pending
//! flags for a content item, and the decoupled content-removal action.
//! Resolving a flag never deletes content and deleting content is never
//! implied by a resolution; a resolved flag with intact content is a valid
//! end state.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use modboard_core::error::CoreError;
use modboard_core::flag::{validate_outcome, validate_reason};
use modboard_core::types::DbId;
use modboard_db::models::flag::{FileFlagRequest, ResolveFlagsRequest};
use modboard_db::repositories::{ContentRepo, FlagRepo};

use crate::error::AppResult;
use crate::response::{FlaggedContentResponse, ResolveFlagsResponse, SuccessResponse};
use crate::state::AppState;

/// POST /api/v1/moderation
///
/// File a flag against a content item. The reporter identity is a required
/// request parameter. No deduplication: repeat reports become distinct
/// records.
pub async fn file_flag(
    State(state): State<AppState>,
    Json(input): Json<FileFlagRequest>,
) -> AppResult<impl IntoResponse> {
    validate_reason(&input.reason).map_err(CoreError::Validation)?;

    let flag = FlagRepo::create(&state.pool, &input).await?;

    tracing::info!(
        flag_id = flag.id,
        content_id = flag.content_id,
        reporter_id = flag.reporter_id,
        "Content flagged"
    );

    Ok((StatusCode::CREATED, Json(flag)))
}

/// GET /api/v1/moderation
///
/// The moderator review queue: all content items with pending flags,
/// grouped per content item, newest flag first. An empty queue is a 200
/// with an empty list, never an error.
pub async fn list_flagged(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let flagged_content = FlagRepo::list_pending(&state.pool).await?;
    Ok(Json(FlaggedContentResponse { flagged_content }))
}

/// PATCH /api/v1/moderation/{content_id}
///
/// Resolve or dismiss every pending flag for a content item as one unit.
/// 404 when the content item has no pending flags; 409 when a concurrent
/// resolver emptied the pending set between the check and the update (the
/// caller may retry or refresh).
pub async fn resolve_flags(
    State(state): State<AppState>,
    Path(content_id): Path<DbId>,
    Json(input): Json<ResolveFlagsRequest>,
) -> AppResult<impl IntoResponse> {
    validate_outcome(&input.status).map_err(CoreError::Validation)?;

    let pending = FlagRepo::count_pending(&state.pool, content_id).await?;
    if pending == 0 {
        return Err(CoreError::NotFound {
            entity: "PendingFlag",
            id: content_id,
        }
        .into());
    }

    let updated_count =
        FlagRepo::resolve_pending(&state.pool, content_id, &input.status, input.resolver_id)
            .await?;

    if updated_count == 0 {
        // The pending set was non-empty a moment ago; another resolver won
        // the race at the storage layer.
        return Err(CoreError::Conflict(
            "Pending flags were resolved concurrently; refresh and retry".to_string(),
        )
        .into());
    }

    tracing::info!(
        content_id,
        resolver_id = input.resolver_id,
        outcome = %input.status,
        updated_count,
        "Flags resolved"
    );

    Ok(Json(ResolveFlagsResponse {
        success: true,
        updated_count,
    }))
}

/// DELETE /api/v1/moderation/{content_id}/content
///
/// Remove the flagged content itself. This is the explicit, separate
/// moderator action; it is never triggered implicitly by flag resolution.
/// Deletes the post and everything it owns (likes, comments and their
/// likes, flags, attachments) in one transaction.
pub async fn remove_content(
    State(state): State<AppState>,
    Path(content_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ContentRepo::find_by_id(&state.pool, content_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Post",
            id: content_id,
        })?;

    ContentRepo::delete_cascade(&state.pool, content_id).await?;

    tracing::info!(content_id, "Content removed");

    Ok(Json(SuccessResponse { success: true }))
}
