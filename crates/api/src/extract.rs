//! Custom extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::Redirect;
use mangashelf_core::types::DbId;

use crate::handlers::HOME_PATH;

/// The `{id}` path segment of a `/mangas/{id}` route.
///
/// A segment that is not a valid id behaves like a missing entry: the
/// request is redirected home instead of being rejected with a 400.
#[derive(Debug, Clone, Copy)]
pub struct MangaId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for MangaId {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| Redirect::to(HOME_PATH))?;

        raw.parse::<DbId>().map(MangaId).map_err(|_| {
            tracing::debug!(id = %raw, "Malformed manga id, redirecting home");
            Redirect::to(HOME_PATH)
        })
    }
}
