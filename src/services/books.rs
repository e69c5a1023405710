//! Book registration service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook},
        Receipt,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new book
    pub async fn register(&self, book: CreateBook) -> AppResult<Receipt> {
        book.validate()?;

        let created = self.repository.books.create(&book).await?;
        tracing::info!(book_id = created.id, title = %created.title, "Book registered");

        Ok(Receipt::new(created.id, "Livro cadastrado com sucesso"))
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }
}
