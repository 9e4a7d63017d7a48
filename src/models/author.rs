//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    /// Raw display name as entered, unique
    pub name: String,
    /// Canonical comparison key derived from `name`, unique
    pub normalized_name: String,
    pub birth_date: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Create author request
///
/// Dates arrive as raw form strings; the catalog service validates the
/// `YYYY-MM-DD` format and reports which fields were invalid.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAuthor {
    pub name: String,
    pub birth_date: Option<String>,
    pub date_of_death: Option<String>,
}

/// Author row ready for insertion, with the normalized key already computed
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub normalized_name: String,
    pub birth_date: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}
