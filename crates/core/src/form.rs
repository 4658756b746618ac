//! Create/edit form parsing.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{parse_date, Date, DbId, DATE_FORMAT};

/// Editable scalar fields of a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MangaFields {
    pub title: String,
    pub author_id: Option<DbId>,
    pub publish_date: Option<Date>,
    pub page_count: Option<i32>,
    pub description: Option<String>,
}

/// Raw form body as posted by the new/edit pages.
///
/// Also serialized back into the form template so a failed submission is
/// re-rendered with what the user typed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MangaForm {
    pub title: String,
    pub author: String,
    pub publish_date: String,
    pub page_count: String,
    pub description: String,
    /// JSON-encoded cover; see [`crate::cover::decode_cover`].
    #[serde(skip_serializing)]
    pub cover: Option<String>,
}

impl MangaForm {
    /// Validate and convert the form into typed fields.
    pub fn parse(&self) -> Result<MangaFields, CoreError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation("Title is required".into()));
        }

        let author_id = optional(&self.author)
            .map(|v| {
                v.parse::<DbId>()
                    .map_err(|_| CoreError::Validation(format!("Invalid author id: {v}")))
            })
            .transpose()?;

        let publish_date = optional(&self.publish_date)
            .map(|v| {
                parse_date(v).ok_or_else(|| {
                    CoreError::Validation(format!("Publish date must be YYYY-MM-DD, got {v}"))
                })
            })
            .transpose()?;

        let page_count = optional(&self.page_count)
            .map(|v| {
                v.parse::<i32>()
                    .map_err(|_| CoreError::Validation(format!("Invalid page count: {v}")))
            })
            .transpose()?;

        let description = Some(self.description.clone()).filter(|d| !d.is_empty());

        Ok(MangaFields {
            title: title.to_string(),
            author_id,
            publish_date,
            page_count,
            description,
        })
    }

    /// Pre-fill a form from stored fields (edit page).
    pub fn from_fields(fields: &MangaFields) -> Self {
        Self {
            title: fields.title.clone(),
            author: fields.author_id.map(|id| id.to_string()).unwrap_or_default(),
            publish_date: fields
                .publish_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            page_count: fields.page_count.map(|n| n.to_string()).unwrap_or_default(),
            description: fields.description.clone().unwrap_or_default(),
            cover: None,
        }
    }
}

fn optional(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}
