//! Book endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook},
        Receipt,
    },
};

use super::ApiJson;

/// List all registered books
#[utoipa::path(
    get,
    path = "/livros",
    tag = "livros",
    responses(
        (status = 200, description = "Registered books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Register a new book
#[utoipa::path(
    post,
    path = "/livros",
    tag = "livros",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book registered", body = Receipt),
        (status = 400, description = "Missing or invalid field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ApiJson(book): ApiJson<CreateBook>,
) -> AppResult<(StatusCode, Json<Receipt>)> {
    let receipt = state.services.books.register(book).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
