use std::sync::Arc;

use mangashelf_db::{AuthorStore, MangaStore};

use crate::config::ServerConfig;
use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Catalog entries.
    pub mangas: Arc<dyn MangaStore>,
    /// Authors offered in the entry forms.
    pub authors: Arc<dyn AuthorStore>,
    /// Compiled page templates.
    pub views: Arc<Views>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
