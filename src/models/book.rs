//! Book model and registration request

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

pub type BookId = i64;

/// Book record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    #[schema(value_type = i64)]
    pub id: BookId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "editora")]
    pub publisher: String,
    #[serde(rename = "edicao")]
    pub edition: i32,
    #[serde(rename = "ano_publicacao")]
    pub publication_year: i32,
    /// False while the book has an open loan
    #[serde(rename = "disponivel")]
    pub available: bool,
}

/// Register book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[serde(rename = "titulo", alias = "title")]
    #[validate(custom(function = "crate::models::not_blank"))]
    pub title: String,
    #[serde(rename = "autor", alias = "author")]
    #[validate(custom(function = "crate::models::not_blank"))]
    pub author: String,
    #[serde(rename = "editora", alias = "publisher")]
    #[validate(custom(function = "crate::models::not_blank"))]
    pub publisher: String,
    #[serde(rename = "edicao", alias = "edition")]
    #[validate(range(min = 1, message = "Edição deve ser maior que zero"))]
    pub edition: i32,
    #[serde(rename = "ano_publicacao", alias = "year")]
    pub publication_year: i32,
}
