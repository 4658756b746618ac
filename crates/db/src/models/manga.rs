//! Manga entity model and DTOs.

use mangashelf_core::cover::Cover;
use mangashelf_core::form::MangaFields;
use mangashelf_core::types::{Date, DbId, Timestamp};
use sqlx::FromRow;

use super::author::Author;

/// A row from the `mangas` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Manga {
    pub id: DbId,
    pub title: String,
    pub author_id: Option<DbId>,
    pub publish_date: Option<Date>,
    pub page_count: Option<i32>,
    pub description: Option<String>,
    pub cover_image: Option<Vec<u8>>,
    pub cover_image_type: Option<String>,
    pub created_at: Timestamp,
}

impl Manga {
    /// The editable scalar fields.
    pub fn fields(&self) -> MangaFields {
        MangaFields {
            title: self.title.clone(),
            author_id: self.author_id,
            publish_date: self.publish_date,
            page_count: self.page_count,
            description: self.description.clone(),
        }
    }

    /// Overwrite every scalar field. Cover and identity are untouched.
    pub fn apply_fields(&mut self, fields: MangaFields) {
        self.title = fields.title;
        self.author_id = fields.author_id;
        self.publish_date = fields.publish_date;
        self.page_count = fields.page_count;
        self.description = fields.description;
    }

    /// Replace the stored cover image and its type together.
    pub fn set_cover(&mut self, cover: Cover) {
        self.cover_image = Some(cover.image);
        self.cover_image_type = Some(cover.image_type);
    }

    /// `data:` URI for the cover, if one is stored.
    pub fn cover_image_path(&self) -> Option<String> {
        match (&self.cover_image, &self.cover_image_type) {
            (Some(image), Some(image_type)) => Some(Cover::data_uri(image, image_type)),
            _ => None,
        }
    }
}

/// A manga with its author reference resolved.
#[derive(Debug, Clone)]
pub struct MangaWithAuthor {
    pub manga: Manga,
    pub author: Option<Author>,
}

/// DTO for creating a new manga.
#[derive(Debug, Clone)]
pub struct NewManga {
    pub fields: MangaFields,
    pub cover: Option<Cover>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manga() -> Manga {
        Manga {
            id: 1,
            title: "Old".into(),
            author_id: Some(1),
            publish_date: None,
            page_count: Some(10),
            description: None,
            cover_image: Some(vec![1, 2, 3]),
            cover_image_type: Some("image/png".into()),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn apply_fields_keeps_cover_and_id() {
        let mut m = manga();
        m.apply_fields(MangaFields {
            title: "New".into(),
            ..Default::default()
        });
        assert_eq!(m.id, 1);
        assert_eq!(m.title, "New");
        assert_eq!(m.author_id, None);
        assert_eq!(m.page_count, None);
        assert_eq!(m.cover_image, Some(vec![1, 2, 3]));
    }

    #[test]
    fn cover_path_requires_both_parts() {
        let mut m = manga();
        assert_eq!(
            m.cover_image_path().as_deref(),
            Some("data:image/png;base64,AQID")
        );
        m.cover_image_type = None;
        assert!(m.cover_image_path().is_none());
    }
}
