//! Server-rendered pages.
//!
//! Templates are embedded at compile time and rendered with `minijinja`
//! (HTML auto-escaping is on for every `.html` template). Each page has a
//! typed context struct below.

use axum::response::Html;
use mangashelf_core::form::MangaForm;
use mangashelf_core::search::SearchOptions;
use mangashelf_core::types::DbId;
use mangashelf_db::models::author::Author;
use mangashelf_db::models::manga::{Manga, MangaWithAuthor};
use minijinja::Environment;
use serde::Serialize;

use crate::error::AppResult;

pub const INDEX: &str = "index.html";
pub const MANGAS_INDEX: &str = "mangas/index.html";
pub const MANGAS_NEW: &str = "mangas/new.html";
pub const MANGAS_EDIT: &str = "mangas/edit.html";
pub const MANGAS_SHOW: &str = "mangas/show.html";

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    (INDEX, include_str!("../templates/index.html")),
    ("mangas/_grid.html", include_str!("../templates/mangas/_grid.html")),
    (
        "mangas/_form_fields.html",
        include_str!("../templates/mangas/_form_fields.html"),
    ),
    (MANGAS_INDEX, include_str!("../templates/mangas/index.html")),
    (MANGAS_NEW, include_str!("../templates/mangas/new.html")),
    (MANGAS_EDIT, include_str!("../templates/mangas/edit.html")),
    (MANGAS_SHOW, include_str!("../templates/mangas/show.html")),
];

/// Display format for publish dates on the detail page, e.g. `Fri Aug 25 1989`.
const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

/// Template environment shared by all handlers.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Compile the embedded templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render the named template with `ctx`.
    pub fn render<S: Serialize>(&self, name: &str, ctx: &S) -> AppResult<Html<String>> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }
}

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// Cover tile in a grid of entries.
#[derive(Debug, Serialize)]
pub struct MangaCard {
    pub id: DbId,
    pub title: String,
    pub cover_image_path: Option<String>,
}

impl From<&Manga> for MangaCard {
    fn from(manga: &Manga) -> Self {
        Self {
            id: manga.id,
            title: manga.title.clone(),
            cover_image_path: manga.cover_image_path(),
        }
    }
}

/// Everything the detail page shows.
#[derive(Debug, Serialize)]
pub struct MangaDetail {
    pub id: DbId,
    pub title: String,
    pub author: Option<Author>,
    pub publish_date: Option<String>,
    pub page_count: Option<i32>,
    pub description: Option<String>,
    pub cover_image_path: Option<String>,
}

impl From<&MangaWithAuthor> for MangaDetail {
    fn from(found: &MangaWithAuthor) -> Self {
        let manga = &found.manga;
        Self {
            id: manga.id,
            title: manga.title.clone(),
            author: found.author.clone(),
            publish_date: manga
                .publish_date
                .map(|d| d.format(DISPLAY_DATE_FORMAT).to_string()),
            page_count: manga.page_count,
            description: manga.description.clone(),
            cover_image_path: manga.cover_image_path(),
        }
    }
}

fn cards(mangas: &[Manga]) -> Vec<MangaCard> {
    mangas.iter().map(MangaCard::from).collect()
}

// ---------------------------------------------------------------------------
// Page contexts
// ---------------------------------------------------------------------------

/// `index.html`: recently added entries.
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub mangas: Vec<MangaCard>,
}

impl HomePage {
    pub fn new(mangas: &[Manga]) -> Self {
        Self {
            mangas: cards(mangas),
        }
    }
}

/// `mangas/index.html`: search form plus results.
#[derive(Debug, Serialize)]
pub struct CatalogPage {
    pub mangas: Vec<MangaCard>,
    pub search_options: SearchOptions,
}

impl CatalogPage {
    pub fn new(mangas: &[Manga], search_options: SearchOptions) -> Self {
        Self {
            mangas: cards(mangas),
            search_options,
        }
    }
}

/// `mangas/new.html` and `mangas/edit.html`.
#[derive(Debug, Serialize)]
pub struct FormPage {
    pub manga: MangaForm,
    /// Set on the edit page; the form posts back to this entry.
    pub manga_id: Option<DbId>,
    pub authors: Vec<Author>,
    pub error_message: Option<&'static str>,
}

/// `mangas/show.html`.
#[derive(Debug, Serialize)]
pub struct ShowPage {
    pub manga: MangaDetail,
    pub error_message: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_templates_compile() {
        let views = Views::new().unwrap();
        for &(name, _) in TEMPLATES {
            assert!(views.env.get_template(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn form_page_echoes_values_and_selects_author() {
        let views = Views::new().unwrap();
        let page = FormPage {
            manga: MangaForm {
                title: "Vagabond".into(),
                author: "2".into(),
                ..Default::default()
            },
            manga_id: Some(7),
            authors: vec![
                Author {
                    id: 1,
                    name: "Oda".into(),
                },
                Author {
                    id: 2,
                    name: "Inoue".into(),
                },
            ],
            error_message: Some("Error Updating Manga"),
        };
        let html = views.render(MANGAS_EDIT, &page).unwrap().0;
        assert!(html.contains("value=\"Vagabond\""));
        assert!(html.contains("<option value=\"2\" selected>Inoue</option>"));
        assert!(html.contains("<option value=\"1\">Oda</option>"));
        assert!(html.contains("Error Updating Manga"));
        assert!(html.contains("?_method=PUT"));
    }

    #[test]
    fn titles_are_escaped() {
        let views = Views::new().unwrap();
        let page = HomePage {
            mangas: vec![MangaCard {
                id: 1,
                title: "<script>".into(),
                cover_image_path: None,
            }],
        };
        let html = views.render(INDEX, &page).unwrap().0;
        assert!(html.contains("&lt;script&gt;"));
    }
}
