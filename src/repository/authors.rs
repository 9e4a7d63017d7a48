//! Authors repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::author::{Author, NewAuthor},
};

/// Storage port for author persistence.
///
/// The uniqueness of `name` and `normalized_name` is enforced by database
/// constraints; `insert` surfaces a violation as a database error for the
/// caller to interpret.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// Exact match on the canonical key, zero or one row
    async fn find_by_normalized_name(&self, key: &str) -> AppResult<Option<Author>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Author>>;
    async fn list(&self) -> AppResult<Vec<Author>>;
    async fn insert(&self, author: &NewAuthor) -> AppResult<Author>;
    async fn delete(&self, id: i32) -> AppResult<()>;
    /// Number of books still owned by the author
    async fn count_books(&self, author_id: i32) -> AppResult<i64>;
}

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for AuthorsRepository {
    async fn find_by_normalized_name(&self, key: &str) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, normalized_name, birth_date, date_of_death
            FROM authors
            WHERE normalized_name = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, normalized_name, birth_date, date_of_death
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    async fn list(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, normalized_name, birth_date, date_of_death
            FROM authors
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    async fn insert(&self, author: &NewAuthor) -> AppResult<Author> {
        let created = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (name, normalized_name, birth_date, date_of_death)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, normalized_name, birth_date, date_of_death
            "#,
        )
        .bind(&author.name)
        .bind(&author.normalized_name)
        .bind(author.birth_date)
        .bind(author.date_of_death)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count_books(&self, author_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
