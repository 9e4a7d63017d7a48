//! API integration tests
//!
//! These run against a live server with a fresh database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

async fn create_author(client: &Client, name: &str) -> reqwest::Response {
    client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send create-author request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_author_and_reject_variant() {
    let client = Client::new();

    let response = create_author(&client, "J.K. Rowling").await;
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["normalized_name"], "jk rowling");

    // Same person, differently typed: must be rejected as a duplicate.
    let response = create_author(&client, "Rowling, J. K.").await;
    assert_eq!(response.status(), 409);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .expect("No message in response")
        .contains("J.K. Rowling"));
}

#[tokio::test]
#[ignore]
async fn test_two_distinct_authors_both_insert() {
    let client = Client::new();

    let response = create_author(&client, "George Orwell").await;
    assert_eq!(response.status(), 201);

    let response = create_author(&client, "Harper Lee").await;
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_create_author_rejects_empty_name() {
    let client = Client::new();

    let response = create_author(&client, "   ").await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_create_author_rejects_malformed_date() {
    let client = Client::new();

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({
            "name": "Émile Zola",
            "birth_date": "02/04/1840"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .expect("No message in response")
        .contains("birth_date"));
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle_with_author_cleanup() {
    let client = Client::new();

    let response = create_author(&client, "F. Scott Fitzgerald").await;
    assert_eq!(response.status(), 201);
    let author: Value = response.json().await.expect("Failed to parse response");
    let author_id = author["id"].as_i64().expect("No author id");

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "isbn": "9780743273565",
            "title": "The Great Gatsby",
            "publication_year": 1925,
            "author_id": author_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let book: Value = response.json().await.expect("Failed to parse response");
    let book_id = book["id"].as_i64().expect("No book id");

    // Duplicate ISBN is a conflict.
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "isbn": "9780743273565",
            "title": "The Great Gatsby (reprint)",
            "author_id": author_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Deleting the author's only book removes the author too.
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book_title"], "The Great Gatsby");
    assert_eq!(body["deleted_author"], "F. Scott Fitzgerald");
}

#[tokio::test]
#[ignore]
async fn test_list_books_keyword_and_sort() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .query(&[("keyword", "orwell"), ("sort", "author")])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let books: Value = response.json().await.expect("Failed to parse response");
    assert!(books.is_array());
    for book in books.as_array().expect("Expected array") {
        assert!(book["author_name"]
            .as_str()
            .expect("No author_name")
            .to_lowercase()
            .contains("orwell"));
    }
}
