//! Repository for the `mangas` table.

use async_trait::async_trait;
use mangashelf_core::search::MangaFilter;
use mangashelf_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::error::StoreError;
use crate::models::author::Author;
use crate::models::manga::{Manga, MangaWithAuthor, NewManga};
use crate::store::MangaStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author_id, publish_date, page_count, description, \
                       cover_image, cover_image_type, created_at";

/// PostgreSQL foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub struct MangaRepo {
    pool: PgPool,
}

impl MangaRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Joined row for [`MangaStore::find_with_author`].
#[derive(FromRow)]
struct MangaAuthorRow {
    #[sqlx(flatten)]
    manga: Manga,
    author_name: Option<String>,
}

#[async_trait]
impl MangaStore for MangaRepo {
    async fn list_recent(&self, limit: i64) -> Result<Vec<Manga>, StoreError> {
        let query =
            format!("SELECT {COLUMNS} FROM mangas ORDER BY created_at DESC, id DESC LIMIT $1");
        let mangas = sqlx::query_as::<_, Manga>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(mangas)
    }

    async fn search(&self, filter: &MangaFilter) -> Result<Vec<Manga>, StoreError> {
        // Build dynamic WHERE clauses; binds below follow the same order.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.title_contains.is_some() {
            conditions.push(format!("strpos(lower(title), lower(${bind_idx})) > 0"));
            bind_idx += 1;
        }
        if filter.published_before.is_some() {
            conditions.push(format!("publish_date <= ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.published_after.is_some() {
            conditions.push(format!("publish_date >= ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!("SELECT {COLUMNS} FROM mangas {where_clause} ORDER BY id");

        let mut q = sqlx::query_as::<_, Manga>(&query);
        if let Some(title) = &filter.title_contains {
            q = q.bind(title);
        }
        if let Some(before) = filter.published_before {
            q = q.bind(before);
        }
        if let Some(after) = filter.published_after {
            q = q.bind(after);
        }
        Ok(q.fetch_all(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Manga>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM mangas WHERE id = $1");
        let manga = sqlx::query_as::<_, Manga>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(manga)
    }

    async fn find_with_author(&self, id: DbId) -> Result<Option<MangaWithAuthor>, StoreError> {
        let row = sqlx::query_as::<_, MangaAuthorRow>(
            "SELECT m.id, m.title, m.author_id, m.publish_date, m.page_count, m.description, \
                    m.cover_image, m.cover_image_type, m.created_at, a.name AS author_name \
             FROM mangas m \
             LEFT JOIN authors a ON a.id = m.author_id \
             WHERE m.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| {
            let author = row
                .manga
                .author_id
                .zip(row.author_name)
                .map(|(id, name)| Author { id, name });
            MangaWithAuthor {
                manga: row.manga,
                author,
            }
        }))
    }

    async fn create(&self, input: &NewManga) -> Result<Manga, StoreError> {
        let query = format!(
            "INSERT INTO mangas \
                (title, author_id, publish_date, page_count, description, \
                 cover_image, cover_image_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let fields = &input.fields;
        sqlx::query_as::<_, Manga>(&query)
            .bind(&fields.title)
            .bind(fields.author_id)
            .bind(fields.publish_date)
            .bind(fields.page_count)
            .bind(&fields.description)
            .bind(input.cover.as_ref().map(|c| &c.image))
            .bind(input.cover.as_ref().map(|c| &c.image_type))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify_write_error(e, fields.author_id))
    }

    async fn save(&self, manga: &Manga) -> Result<Option<Manga>, StoreError> {
        let query = format!(
            "UPDATE mangas SET \
                title = $2, \
                author_id = $3, \
                publish_date = $4, \
                page_count = $5, \
                description = $6, \
                cover_image = $7, \
                cover_image_type = $8 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Manga>(&query)
            .bind(manga.id)
            .bind(&manga.title)
            .bind(manga.author_id)
            .bind(manga.publish_date)
            .bind(manga.page_count)
            .bind(&manga.description)
            .bind(&manga.cover_image)
            .bind(&manga.cover_image_type)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_write_error(e, manga.author_id))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM mangas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

/// Map a foreign key violation on `author_id` to [`StoreError::MissingAuthor`].
fn classify_write_error(err: sqlx::Error, author_id: Option<DbId>) -> StoreError {
    if let (sqlx::Error::Database(db_err), Some(author_id)) = (&err, author_id) {
        if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
            tracing::debug!(
                author_id,
                constraint = ?db_err.constraint(),
                "Manga write referenced a missing author"
            );
            return StoreError::MissingAuthor(author_id);
        }
    }
    StoreError::Database(err)
}
