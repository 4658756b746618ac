//! Store traits consumed by the HTTP handlers.

use async_trait::async_trait;
use mangashelf_core::search::MangaFilter;
use mangashelf_core::types::DbId;

use crate::error::StoreError;
use crate::models::author::Author;
use crate::models::manga::{Manga, MangaWithAuthor, NewManga};

/// Catalog entries.
#[async_trait]
pub trait MangaStore: Send + Sync {
    /// Newest entries first (by creation time), at most `limit`.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Manga>, StoreError>;

    /// Entries matching every constraint in `filter`, in storage order.
    async fn search(&self, filter: &MangaFilter) -> Result<Vec<Manga>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Manga>, StoreError>;

    /// Like [`MangaStore::find_by_id`], with the author reference resolved.
    async fn find_with_author(&self, id: DbId) -> Result<Option<MangaWithAuthor>, StoreError>;

    /// Insert a new entry; the store assigns `id` and `created_at`.
    async fn create(&self, input: &NewManga) -> Result<Manga, StoreError>;

    /// Overwrite every mutable column of `manga` by id.
    ///
    /// Returns `None` if no row with that id exists.
    async fn save(&self, manga: &Manga) -> Result<Option<Manga>, StoreError>;

    /// Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    /// Cheap reachability probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Read-only access to authors.
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// All authors ordered by name.
    async fn list(&self) -> Result<Vec<Author>, StoreError>;
}
