//! Landing page.

use axum::extract::State;
use axum::response::IntoResponse;

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::{HomePage, INDEX};

/// GET /
///
/// Shows the most recently added entries. A store failure is logged and the
/// page renders with an empty list; this page never fails because of the
/// store.
pub async fn index(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mangas = state
        .mangas
        .list_recent(state.config.recent_limit)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Failed to load recent mangas, rendering empty list");
            Vec::new()
        });

    state.views.render(INDEX, &HomePage::new(&mangas))
}
