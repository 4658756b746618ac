//! Request handlers.
//!
//! Handlers never surface store failures as error statuses. Each one either
//! renders a page, re-renders the originating form with an error message,
//! or redirects to a safe parent page.

pub mod home;
pub mod mangas;

/// Landing page.
pub const HOME_PATH: &str = "/";

/// Catalog search page.
pub const CATALOG_PATH: &str = "/mangas";

/// Detail page of one entry.
pub fn manga_path(id: mangashelf_core::types::DbId) -> String {
    format!("{CATALOG_PATH}/{id}")
}
