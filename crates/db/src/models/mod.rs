pub mod author;
pub mod manga;
