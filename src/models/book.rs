//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub isbn: String,
    pub title: String,
    pub publication_year: Option<i32>,
    pub author_id: i32,
}

/// Book row joined with its author's display name, as shown on the
/// catalog listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookWithAuthor {
    pub id: i32,
    pub isbn: String,
    pub title: String,
    pub publication_year: Option<i32>,
    pub author_id: i32,
    pub author_name: String,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub isbn: String,
    pub title: String,
    pub publication_year: Option<i32>,
    pub author_id: i32,
}

/// Catalog listing sort key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookSort {
    #[default]
    Title,
    Author,
}

/// Query parameters for the catalog listing
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookQuery {
    pub sort: Option<BookSort>,
    pub keyword: Option<String>,
}
