//! Repository for the `authors` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::author::Author;
use crate::store::AuthorStore;

const COLUMNS: &str = "id, name";

pub struct AuthorRepo {
    pool: PgPool,
}

impl AuthorRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for AuthorRepo {
    async fn list(&self) -> Result<Vec<Author>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY name, id");
        let authors = sqlx::query_as::<_, Author>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }
}
