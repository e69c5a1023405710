//! Loan management endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        book::BookId,
        loan::{Loan, LoanId},
        student::StudentId,
        Receipt,
    },
};

use super::{ApiJson, ApiPath};

/// Create loan request
#[derive(Deserialize, ToSchema)]
pub struct CreateLoanRequest {
    /// Borrowing student
    #[serde(rename = "aluno_id", alias = "student_id")]
    #[schema(value_type = i64)]
    pub student_id: StudentId,
    /// Book to lend
    #[serde(rename = "livro_id", alias = "book_id")]
    #[schema(value_type = i64)]
    pub book_id: BookId,
}

/// Return loan request
#[derive(Deserialize, ToSchema)]
pub struct ReturnLoanRequest {
    #[serde(rename = "emprestimo_id", alias = "loan_id")]
    #[schema(value_type = i64)]
    pub loan_id: LoanId,
}

/// List all loans
#[utoipa::path(
    get,
    path = "/emprestimos",
    tag = "emprestimos",
    responses(
        (status = 200, description = "All loans, open and returned", body = Vec<Loan>)
    )
)]
pub async fn list_loans(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Loan>>> {
    let loans = state.services.loans.list().await?;
    Ok(Json(loans))
}

/// Lend a book to a student
#[utoipa::path(
    post,
    path = "/emprestimos",
    tag = "emprestimos",
    request_body = CreateLoanRequest,
    responses(
        (status = 201, description = "Loan created", body = Receipt),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Student or book not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Book unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<CreateLoanRequest>,
) -> AppResult<(StatusCode, Json<Receipt>)> {
    let receipt = state
        .services
        .loans
        .create_loan(request.student_id, request.book_id)
        .await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}

/// Return a loaned book, identified in the body
#[utoipa::path(
    put,
    path = "/emprestimos",
    tag = "emprestimos",
    request_body = ReturnLoanRequest,
    responses(
        (status = 200, description = "Book returned", body = Receipt),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Already returned", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<ReturnLoanRequest>,
) -> AppResult<Json<Receipt>> {
    let receipt = state.services.loans.return_loan(request.loan_id).await?;
    Ok(Json(receipt))
}

/// Return a loaned book, identified in the path
#[utoipa::path(
    post,
    path = "/emprestimos/{id}/devolucao",
    tag = "emprestimos",
    params(
        ("id" = i64, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = Receipt),
        (status = 400, description = "Invalid loan ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Already returned", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_loan_by_id(
    State(state): State<crate::AppState>,
    ApiPath(loan_id): ApiPath<LoanId>,
) -> AppResult<Json<Receipt>> {
    let receipt = state.services.loans.return_loan(loan_id).await?;
    Ok(Json(receipt))
}
