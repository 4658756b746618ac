#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use mangashelf_api::config::ServerConfig;
use mangashelf_api::router::{build_app_router, App};
use mangashelf_api::state::AppState;
use mangashelf_api::views::Views;
use mangashelf_core::form::MangaFields;
use mangashelf_core::search::MangaFilter;
use mangashelf_core::types::{parse_date, DbId};
use mangashelf_db::models::author::Author;
use mangashelf_db::models::manga::{Manga, MangaWithAuthor, NewManga};
use mangashelf_db::{AuthorStore, InMemoryStore, MangaStore, StoreError};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        body_limit_bytes: 10 * 1024 * 1024,
        recent_limit: 10,
    }
}

/// Build the full application over explicit stores.
///
/// This goes through `build_app_router`, so tests exercise the same
/// middleware stack (method override, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_app_with(mangas: Arc<dyn MangaStore>, authors: Arc<dyn AuthorStore>) -> App {
    let config = test_config();
    let state = AppState {
        mangas,
        authors,
        views: Arc::new(Views::new().unwrap()),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the application over a single in-memory store.
pub fn build_test_app(store: &Arc<InMemoryStore>) -> App {
    build_app_with(store.clone(), store.clone())
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: &App, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// POST an urlencoded form (HTML forms always POST; PUT/DELETE go through
/// `?_method=`).
pub async fn post_form(app: &App, uri: &str, fields: &[(&str, &str)]) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body(fields)))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

fn form_body(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).unwrap()
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a `303 See Other` to `target`.
pub fn assert_redirect(response: &Response, target: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION].to_str().unwrap(), target);
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn new_manga(title: &str, author_id: Option<DbId>, published: Option<&str>) -> NewManga {
    NewManga {
        fields: MangaFields {
            title: title.to_string(),
            author_id,
            publish_date: published.and_then(parse_date),
            page_count: Some(200),
            description: None,
        },
        cover: None,
    }
}

pub async fn stored(store: &InMemoryStore, id: DbId) -> Option<Manga> {
    MangaStore::find_by_id(store, id).await.unwrap()
}

/// A cover payload as the upload widget encodes it.
pub fn cover_json(mime_type: &str, data: &str) -> String {
    serde_json::json!({ "type": mime_type, "data": data }).to_string()
}

// ---------------------------------------------------------------------------
// Unreachable store
// ---------------------------------------------------------------------------

/// A store whose every call fails, as if the database were down.
pub struct UnreachableStore;

fn unreachable() -> StoreError {
    StoreError::Unavailable("connection refused".into())
}

#[async_trait]
impl MangaStore for UnreachableStore {
    async fn list_recent(&self, _limit: i64) -> Result<Vec<Manga>, StoreError> {
        Err(unreachable())
    }

    async fn search(&self, _filter: &MangaFilter) -> Result<Vec<Manga>, StoreError> {
        Err(unreachable())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Manga>, StoreError> {
        Err(unreachable())
    }

    async fn find_with_author(&self, _id: DbId) -> Result<Option<MangaWithAuthor>, StoreError> {
        Err(unreachable())
    }

    async fn create(&self, _input: &NewManga) -> Result<Manga, StoreError> {
        Err(unreachable())
    }

    async fn save(&self, _manga: &Manga) -> Result<Option<Manga>, StoreError> {
        Err(unreachable())
    }

    async fn delete(&self, _id: DbId) -> Result<bool, StoreError> {
        Err(unreachable())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unreachable())
    }
}

#[async_trait]
impl AuthorStore for UnreachableStore {
    async fn list(&self) -> Result<Vec<Author>, StoreError> {
        Err(unreachable())
    }
}
