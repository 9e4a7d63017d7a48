//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, BookWithAuthor, CreateBook},
    services::catalog::DeleteBookOutcome,
};

/// List books with search and sorting
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("sort" = Option<String>, Query, description = "Sort by \"title\" (default) or \"author\""),
        ("keyword" = Option<String>, Query, description = "Filter on book title or author name")
    ),
    responses(
        (status = 200, description = "List of books", body = Vec<BookWithAuthor>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<BookWithAuthor>>> {
    let books = state.services.catalog.list_books(&query).await?;
    Ok(Json(books))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 404, description = "Author not found"),
        (status = 409, description = "A book with this ISBN already exists")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.catalog.add_book(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a book, removing its author when no books remain
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = DeleteBookOutcome),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DeleteBookOutcome>> {
    let outcome = state.services.catalog.delete_book(id).await?;
    Ok(Json(outcome))
}
