//! Author entity model. Authors are listed for selection, never edited here.

use mangashelf_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `authors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
}
