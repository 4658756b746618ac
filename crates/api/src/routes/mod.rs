pub mod health;
pub mod mangas;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// /                       recently added
/// /mangas                 search, create
/// /mangas/new             new form
/// /mangas/{id}            show, update, delete
/// /mangas/{id}/edit       edit form
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .nest("/mangas", mangas::router())
}
