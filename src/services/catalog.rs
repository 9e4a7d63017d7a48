//! Catalog management service

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, CreateAuthor, NewAuthor},
        book::{Book, BookQuery, BookWithAuthor, CreateBook},
    },
    normalize::normalize,
    repository::{AuthorStore, BookStore},
};

/// Result of deleting a book. When the deleted book was the author's last
/// one, the author is removed as well and reported here.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteBookOutcome {
    pub book_title: String,
    pub deleted_author: Option<String>,
}

#[derive(Clone)]
pub struct CatalogService {
    authors: Arc<dyn AuthorStore>,
    books: Arc<dyn BookStore>,
}

impl CatalogService {
    pub fn new(authors: Arc<dyn AuthorStore>, books: Arc<dyn BookStore>) -> Self {
        Self { authors, books }
    }

    /// List books with keyword filter and sorting
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<BookWithAuthor>> {
        self.books.list(query).await
    }

    /// List all authors (used by the add-book form)
    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.authors.list().await
    }

    /// Create a new author with duplicate detection.
    ///
    /// The raw name is normalized to its canonical key and checked against
    /// the stored keys; surface differences in case, diacritics, punctuation
    /// or initials do not produce a second author. The lookup-then-insert
    /// sequence can lose a race, so a unique violation at commit time is
    /// reported as the same duplicate outcome.
    pub async fn add_author(&self, req: CreateAuthor) -> AppResult<Author> {
        let name = req.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Name is required.".to_string()));
        }

        let birth_raw = req.birth_date.as_deref().map(str::trim).unwrap_or("");
        let death_raw = req.date_of_death.as_deref().map(str::trim).unwrap_or("");
        let birth_date = parse_iso_date(birth_raw);
        let date_of_death = parse_iso_date(death_raw);

        let mut invalid = Vec::new();
        if !birth_raw.is_empty() && birth_date.is_none() {
            invalid.push("birth_date");
        }
        if !death_raw.is_empty() && date_of_death.is_none() {
            invalid.push("date_of_death");
        }
        if !invalid.is_empty() {
            return Err(AppError::Validation(format!(
                "Invalid date for: {}. Please use the format YYYY-MM-DD.",
                invalid.join(", ")
            )));
        }

        let key = normalize(&name);
        if let Some(existing) = self.authors.find_by_normalized_name(&key).await? {
            return Err(AppError::Duplicate(format!(
                "Author '{}' already exists as '{}'.",
                name, existing.name
            )));
        }

        let new_author = NewAuthor {
            name: name.clone(),
            normalized_name: key,
            birth_date,
            date_of_death,
        };

        match self.authors.insert(&new_author).await {
            Ok(created) => {
                tracing::info!("Author '{}' created with id={}", created.name, created.id);
                Ok(created)
            }
            Err(e) if e.is_unique_violation() => {
                // Lost the check-then-insert race; report it as a duplicate,
                // naming whoever got there first.
                let display = self
                    .authors
                    .find_by_normalized_name(&new_author.normalized_name)
                    .await?
                    .map(|a| a.name)
                    .unwrap_or_else(|| name.clone());
                Err(AppError::Duplicate(format!(
                    "Author '{}' already exists as '{}'.",
                    name, display
                )))
            }
            Err(e) => Err(e),
        }
    }

    /// Create a new book for an existing author
    pub async fn add_book(&self, req: CreateBook) -> AppResult<Book> {
        if req.isbn.trim().is_empty() {
            return Err(AppError::Validation("ISBN is required.".to_string()));
        }
        if req.title.trim().is_empty() {
            return Err(AppError::Validation("Title is required.".to_string()));
        }

        self.authors
            .get_by_id(req.author_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Author with id {} not found", req.author_id))
            })?;

        match self.books.insert(&req).await {
            Ok(created) => {
                tracing::info!("Book '{}' created with id={}", created.title, created.id);
                Ok(created)
            }
            Err(e) if e.is_unique_violation() => Err(AppError::Duplicate(format!(
                "A book with ISBN {} already exists.",
                req.isbn
            ))),
            Err(e) => Err(e),
        }
    }

    /// Delete a book by id. Authors do not outlive their last book: when no
    /// other book references the owner, the author row is removed too.
    pub async fn delete_book(&self, id: i32) -> AppResult<DeleteBookOutcome> {
        let book = self
            .books
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        self.books.delete(id).await?;

        let mut deleted_author = None;
        if self.authors.count_books(book.author_id).await? == 0 {
            if let Some(author) = self.authors.get_by_id(book.author_id).await? {
                self.authors.delete(author.id).await?;
                tracing::info!("Author '{}' deleted along with their last book", author.name);
                deleted_author = Some(author.name);
            }
        }

        Ok(DeleteBookOutcome {
            book_title: book.title,
            deleted_author,
        })
    }
}

/// Parse a `YYYY-MM-DD` date string; empty or malformed input yields `None`
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
