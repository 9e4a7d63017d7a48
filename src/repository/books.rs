//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, BookSort, BookWithAuthor, CreateBook},
};

/// Storage port for book persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Catalog listing joined with author names, filtered and sorted
    async fn list(&self, query: &BookQuery) -> AppResult<Vec<BookWithAuthor>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>>;
    async fn insert(&self, book: &CreateBook) -> AppResult<Book>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn list(&self, query: &BookQuery) -> AppResult<Vec<BookWithAuthor>> {
        // Keyword matches case-insensitively against book title or author name.
        let sql = match query.sort.unwrap_or_default() {
            BookSort::Author => {
                r#"
                SELECT b.id, b.isbn, b.title, b.publication_year, b.author_id,
                       a.name AS author_name
                FROM books b
                JOIN authors a ON a.id = b.author_id
                WHERE $1 = '' OR b.title ILIKE '%' || $1 || '%' OR a.name ILIKE '%' || $1 || '%'
                ORDER BY a.name ASC
                "#
            }
            BookSort::Title => {
                r#"
                SELECT b.id, b.isbn, b.title, b.publication_year, b.author_id,
                       a.name AS author_name
                FROM books b
                JOIN authors a ON a.id = b.author_id
                WHERE $1 = '' OR b.title ILIKE '%' || $1 || '%' OR a.name ILIKE '%' || $1 || '%'
                ORDER BY b.title ASC
                "#
            }
        };

        let keyword = query.keyword.as_deref().unwrap_or("").trim();

        let books = sqlx::query_as::<_, BookWithAuthor>(sql)
            .bind(keyword)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, isbn, title, publication_year, author_id
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn insert(&self, book: &CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (isbn, title, publication_year, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, isbn, title, publication_year, author_id
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(book.publication_year)
        .bind(book.author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
