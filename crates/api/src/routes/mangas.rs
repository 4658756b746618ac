//! Route definitions for mangas.

use axum::routing::get;
use axum::Router;

use crate::handlers::mangas;
use crate::state::AppState;

/// Routes mounted at `/mangas`.
///
/// ```text
/// GET    /            -> list (search)
/// POST   /            -> create
/// GET    /new         -> new_form
/// GET    /{id}        -> show
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// GET    /{id}/edit   -> edit_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mangas::list).post(mangas::create))
        .route("/new", get(mangas::new_form))
        .route(
            "/{id}",
            get(mangas::show).put(mangas::update).delete(mangas::delete),
        )
        .route("/{id}/edit", get(mangas::edit_form))
}
