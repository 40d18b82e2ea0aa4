//! Route definitions for dashboard statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes, nested under `/dashboard`.
///
/// ```text
/// GET    /stats                     get_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(dashboard::get_stats))
}
