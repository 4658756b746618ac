//! In-memory store (for tests and local experiments).
//!
//! Implements both store traits over one lock so the author reference on a
//! manga is checked the way the `author_id` foreign key is in PostgreSQL.

use std::collections::BTreeMap;

use async_trait::async_trait;
use mangashelf_core::search::MangaFilter;
use mangashelf_core::types::DbId;
use parking_lot::RwLock;

use crate::error::StoreError;
use crate::models::author::Author;
use crate::models::manga::{Manga, MangaWithAuthor, NewManga};
use crate::store::{AuthorStore, MangaStore};

#[derive(Default)]
struct Tables {
    mangas: BTreeMap<DbId, Manga>,
    authors: BTreeMap<DbId, Author>,
    next_manga_id: DbId,
    next_author_id: DbId,
}

impl Tables {
    fn check_author(&self, author_id: Option<DbId>) -> Result<(), StoreError> {
        match author_id {
            Some(id) if !self.authors.contains_key(&id) => Err(StoreError::MissingAuthor(id)),
            _ => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an author, returning it with its assigned id.
    pub fn add_author(&self, name: impl Into<String>) -> Author {
        let mut tables = self.tables.write();
        tables.next_author_id += 1;
        let author = Author {
            id: tables.next_author_id,
            name: name.into(),
        };
        tables.authors.insert(author.id, author.clone());
        author
    }

    /// Remove an author, nulling references to it.
    pub fn remove_author(&self, id: DbId) -> bool {
        let mut tables = self.tables.write();
        let removed = tables.authors.remove(&id).is_some();
        for manga in tables.mangas.values_mut() {
            if manga.author_id == Some(id) {
                manga.author_id = None;
            }
        }
        removed
    }
}

#[async_trait]
impl MangaStore for InMemoryStore {
    async fn list_recent(&self, limit: i64) -> Result<Vec<Manga>, StoreError> {
        let tables = self.tables.read();
        let mut mangas: Vec<Manga> = tables.mangas.values().cloned().collect();
        mangas.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        mangas.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(mangas)
    }

    async fn search(&self, filter: &MangaFilter) -> Result<Vec<Manga>, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .mangas
            .values()
            .filter(|m| filter.matches(&m.title, m.publish_date))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Manga>, StoreError> {
        Ok(self.tables.read().mangas.get(&id).cloned())
    }

    async fn find_with_author(&self, id: DbId) -> Result<Option<MangaWithAuthor>, StoreError> {
        let tables = self.tables.read();
        Ok(tables.mangas.get(&id).map(|manga| MangaWithAuthor {
            author: manga
                .author_id
                .and_then(|author_id| tables.authors.get(&author_id).cloned()),
            manga: manga.clone(),
        }))
    }

    async fn create(&self, input: &NewManga) -> Result<Manga, StoreError> {
        let mut tables = self.tables.write();
        tables.check_author(input.fields.author_id)?;

        tables.next_manga_id += 1;
        let mut manga = Manga {
            id: tables.next_manga_id,
            title: String::new(),
            author_id: None,
            publish_date: None,
            page_count: None,
            description: None,
            cover_image: None,
            cover_image_type: None,
            created_at: chrono::Utc::now(),
        };
        manga.apply_fields(input.fields.clone());
        if let Some(cover) = input.cover.clone() {
            manga.set_cover(cover);
        }

        tables.mangas.insert(manga.id, manga.clone());
        Ok(manga)
    }

    async fn save(&self, manga: &Manga) -> Result<Option<Manga>, StoreError> {
        let mut tables = self.tables.write();
        tables.check_author(manga.author_id)?;

        let Some(stored) = tables.mangas.get_mut(&manga.id) else {
            return Ok(None);
        };
        let created_at = stored.created_at;
        *stored = Manga {
            created_at,
            ..manga.clone()
        };
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.tables.write().mangas.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[async_trait]
impl AuthorStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Author>, StoreError> {
        let mut authors: Vec<Author> = self.tables.read().authors.values().cloned().collect();
        authors.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(authors)
    }
}
