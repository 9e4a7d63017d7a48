//! Data models for Shelfmark

pub mod author;
pub mod book;

// Re-export commonly used types
pub use author::{Author, CreateAuthor, NewAuthor};
pub use book::{Book, BookQuery, BookSort, BookWithAuthor, CreateBook};
