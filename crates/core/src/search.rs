//! Catalog search filters.
//!
//! [`SearchOptions`] is the raw query string, echoed back to the search form.
//! [`MangaFilter`] is the parsed, typed form handed to the store.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{parse_date, Date};

/// Number of entries shown on the landing page.
pub const DEFAULT_RECENT_LIMIT: i64 = 10;

/// Raw `?title=&publishedBefore=&publishedAfter=` parameters.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub title: Option<String>,
    pub published_before: Option<String>,
    pub published_after: Option<String>,
}

/// Conjunctive filter over catalog entries. `None` fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MangaFilter {
    /// Case-insensitive substring of the title.
    pub title_contains: Option<String>,
    /// Inclusive upper bound on the publish date.
    pub published_before: Option<Date>,
    /// Inclusive lower bound on the publish date.
    pub published_after: Option<Date>,
}

impl MangaFilter {
    /// Build a filter from raw query parameters.
    ///
    /// Empty parameters are ignored. A date that is not `YYYY-MM-DD` is a
    /// validation error.
    pub fn from_options(options: &SearchOptions) -> Result<Self, CoreError> {
        Ok(Self {
            title_contains: non_empty(&options.title).map(str::to_string),
            published_before: non_empty(&options.published_before)
                .map(|v| parse_filter_date("publishedBefore", v))
                .transpose()?,
            published_after: non_empty(&options.published_after)
                .map(|v| parse_filter_date("publishedAfter", v))
                .transpose()?,
        })
    }

    /// Whether an entry with the given title and publish date passes.
    ///
    /// Entries without a publish date never pass a date bound.
    pub fn matches(&self, title: &str, publish_date: Option<Date>) -> bool {
        if let Some(needle) = &self.title_contains {
            if !title.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(before) = self.published_before {
            if !publish_date.is_some_and(|d| d <= before) {
                return false;
            }
        }
        if let Some(after) = self.published_after {
            if !publish_date.is_some_and(|d| d >= after) {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_filter_date(field: &str, value: &str) -> Result<Date, CoreError> {
    parse_date(value)
        .ok_or_else(|| CoreError::Validation(format!("{field} must be a YYYY-MM-DD date")))
}
