//! PostgreSQL implementations of the store traits.
//!
//! Each repository owns a clone of the pool (pools are reference counted).

pub mod author_repo;
pub mod manga_repo;

pub use author_repo::AuthorRepo;
pub use manga_repo::MangaRepo;
