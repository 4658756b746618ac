//! Handlers for the `/mangas` resource.
//!
//! Failure policy per page:
//!
//! - list: any failure (unreadable query, bad filter or store error)
//!   redirects home.
//! - show / edit / delete: a missing or malformed id redirects home.
//! - create / update: the form is re-rendered with the submitted values and
//!   an error message. If the author list for the form cannot be loaded
//!   either, the request falls back to a redirect. A body that cannot be
//!   read as a form counts as a failed submission.

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use mangashelf_core::cover::decode_cover;
use mangashelf_core::error::CoreError;
use mangashelf_core::form::MangaForm;
use mangashelf_core::search::{MangaFilter, SearchOptions};
use mangashelf_core::types::DbId;
use mangashelf_db::models::manga::{Manga, NewManga};

use super::{manga_path, CATALOG_PATH, HOME_PATH};
use crate::error::{AppError, AppResult};
use crate::extract::MangaId;
use crate::state::AppState;
use crate::views::{
    CatalogPage, FormPage, MangaDetail, ShowPage, MANGAS_EDIT, MANGAS_INDEX, MANGAS_NEW,
    MANGAS_SHOW,
};

/// Which of the two entry forms is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKind {
    New,
    Edit,
}

impl FormKind {
    fn template(self) -> &'static str {
        match self {
            FormKind::New => MANGAS_NEW,
            FormKind::Edit => MANGAS_EDIT,
        }
    }

    fn error_message(self) -> &'static str {
        match self {
            FormKind::New => "Error Creating Manga",
            FormKind::Edit => "Error Updating Manga",
        }
    }
}

const DELETE_ERROR_MESSAGE: &str = "Could not remove manga";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /mangas?title=&publishedBefore=&publishedAfter=
///
/// Filtered catalog. The submitted filters are echoed back into the search
/// form.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<SearchOptions>, QueryRejection>,
) -> AppResult<Response> {
    let Query(options) = match query {
        Ok(query) => query,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable catalog query, redirecting home");
            return Ok(Redirect::to(HOME_PATH).into_response());
        }
    };

    let mangas = match search(&state, &options).await {
        Ok(mangas) => mangas,
        Err(err) => {
            tracing::warn!(error = %err, "Catalog search failed, redirecting home");
            return Ok(Redirect::to(HOME_PATH).into_response());
        }
    };

    tracing::debug!(count = mangas.len(), "Listed mangas");
    let page = CatalogPage::new(&mangas, options);
    Ok(state.views.render(MANGAS_INDEX, &page)?.into_response())
}

/// GET /mangas/new
pub async fn new_form(State(state): State<AppState>) -> AppResult<Response> {
    form_page(
        &state,
        FormKind::New,
        MangaForm::default(),
        None,
        false,
        CATALOG_PATH,
    )
    .await
}

/// POST /mangas
///
/// On success redirects to the new entry's detail page. An empty `cover`
/// field (no upload widget) means no cover.
pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<MangaForm>, FormRejection>,
) -> AppResult<Response> {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable manga form");
            return form_page(
                &state,
                FormKind::New,
                MangaForm::default(),
                None,
                true,
                CATALOG_PATH,
            )
            .await;
        }
    };

    match create_manga(&state, &form).await {
        Ok(manga) => {
            tracing::info!(id = manga.id, title = %manga.title, "Manga created");
            Ok(Redirect::to(&manga_path(manga.id)).into_response())
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to create manga");
            form_page(&state, FormKind::New, form, None, true, CATALOG_PATH).await
        }
    }
}

/// GET /mangas/{id}
///
/// Detail page with the author resolved.
pub async fn show(State(state): State<AppState>, MangaId(id): MangaId) -> AppResult<Response> {
    let found = match state.mangas.find_with_author(id).await {
        Ok(Some(found)) => found,
        Ok(None) => return Ok(not_found_redirect(id)),
        Err(err) => {
            tracing::warn!(id, error = %err, "Failed to load manga, redirecting home");
            return Ok(Redirect::to(HOME_PATH).into_response());
        }
    };

    let page = ShowPage {
        manga: MangaDetail::from(&found),
        error_message: None,
    };
    Ok(state.views.render(MANGAS_SHOW, &page)?.into_response())
}

/// GET /mangas/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    MangaId(id): MangaId,
) -> AppResult<Response> {
    let manga = match state.mangas.find_by_id(id).await {
        Ok(Some(manga)) => manga,
        Ok(None) => return Ok(not_found_redirect(id)),
        Err(err) => {
            tracing::warn!(id, error = %err, "Failed to load manga for edit, redirecting home");
            return Ok(Redirect::to(HOME_PATH).into_response());
        }
    };

    let form = MangaForm::from_fields(&manga.fields());
    form_page(&state, FormKind::Edit, form, Some(id), false, HOME_PATH).await
}

/// PUT /mangas/{id}
///
/// Overwrites every scalar field. The cover is replaced only when a
/// non-empty `cover` field is submitted.
pub async fn update(
    State(state): State<AppState>,
    MangaId(id): MangaId,
    form: Result<Form<MangaForm>, FormRejection>,
) -> AppResult<Response> {
    let manga = match state.mangas.find_by_id(id).await {
        Ok(Some(manga)) => manga,
        Ok(None) => return Ok(not_found_redirect(id)),
        Err(err) => {
            tracing::warn!(id, error = %err, "Failed to load manga for update, redirecting home");
            return Ok(Redirect::to(HOME_PATH).into_response());
        }
    };

    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::warn!(id, error = %rejection, "Unreadable manga form");
            let stored = MangaForm::from_fields(&manga.fields());
            return form_page(&state, FormKind::Edit, stored, Some(id), true, CATALOG_PATH).await;
        }
    };

    match update_manga(&state, manga, &form).await {
        Ok(saved) => {
            tracing::info!(id = saved.id, "Manga updated");
            Ok(Redirect::to(&manga_path(saved.id)).into_response())
        }
        Err(err) => {
            tracing::warn!(id, error = %err, "Failed to update manga");
            form_page(&state, FormKind::Edit, form, Some(id), true, CATALOG_PATH).await
        }
    }
}

/// DELETE /mangas/{id}
///
/// On failure the detail page is shown again with an inline error.
pub async fn delete(State(state): State<AppState>, MangaId(id): MangaId) -> AppResult<Response> {
    let found = match state.mangas.find_with_author(id).await {
        Ok(Some(found)) => found,
        Ok(None) => return Ok(not_found_redirect(id)),
        Err(err) => {
            tracing::warn!(id, error = %err, "Failed to load manga for delete, redirecting home");
            return Ok(Redirect::to(HOME_PATH).into_response());
        }
    };

    match state.mangas.delete(id).await {
        Ok(removed) => {
            tracing::info!(id, removed, "Manga deleted");
            Ok(Redirect::to(CATALOG_PATH).into_response())
        }
        Err(err) => {
            tracing::warn!(id, error = %err, "Failed to delete manga");
            let page = ShowPage {
                manga: MangaDetail::from(&found),
                error_message: Some(DELETE_ERROR_MESSAGE),
            };
            Ok(state.views.render(MANGAS_SHOW, &page)?.into_response())
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn search(state: &AppState, options: &SearchOptions) -> AppResult<Vec<Manga>> {
    let filter = MangaFilter::from_options(options)?;
    Ok(state.mangas.search(&filter).await?)
}

async fn create_manga(state: &AppState, form: &MangaForm) -> AppResult<Manga> {
    let fields = form.parse()?;
    let cover = match form.cover.as_deref().filter(|c| !c.is_empty()) {
        Some(encoded) => decode_cover(encoded)?,
        None => None,
    };
    Ok(state.mangas.create(&NewManga { fields, cover }).await?)
}

async fn update_manga(state: &AppState, mut manga: Manga, form: &MangaForm) -> AppResult<Manga> {
    manga.apply_fields(form.parse()?);
    if let Some(encoded) = form.cover.as_deref().filter(|c| !c.is_empty()) {
        if let Some(cover) = decode_cover(encoded)? {
            manga.set_cover(cover);
        }
    }

    let id = manga.id;
    state
        .mangas
        .save(&manga)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Manga",
            id,
        }))
}

/// Render the new/edit form with the author selection list.
///
/// Redirects to `fallback` if the authors cannot be loaded.
async fn form_page(
    state: &AppState,
    kind: FormKind,
    manga: MangaForm,
    manga_id: Option<DbId>,
    has_error: bool,
    fallback: &str,
) -> AppResult<Response> {
    let authors = match state.authors.list().await {
        Ok(authors) => authors,
        Err(err) => {
            tracing::warn!(error = %err, redirect = fallback, "Failed to load authors for form");
            return Ok(Redirect::to(fallback).into_response());
        }
    };

    let page = FormPage {
        manga,
        manga_id,
        authors,
        error_message: has_error.then(|| kind.error_message()),
    };
    Ok(state.views.render(kind.template(), &page)?.into_response())
}

fn not_found_redirect(id: DbId) -> Response {
    tracing::debug!(id, "Manga not found, redirecting home");
    Redirect::to(HOME_PATH).into_response()
}
