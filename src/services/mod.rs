//! Business logic services

pub mod catalog;

use std::sync::Arc;

use crate::repository::{AuthorStore, BookStore, Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        let authors: Arc<dyn AuthorStore> = Arc::new(repository.authors.clone());
        let books: Arc<dyn BookStore> = Arc::new(repository.books.clone());
        Self {
            catalog: catalog::CatalogService::new(authors, books),
        }
    }
}
