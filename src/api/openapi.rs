//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca Escolar API",
        version = "1.0.0",
        description = "API para cadastro de alunos, livros e controle de empréstimos."
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Students
        students::list_students,
        students::create_student,
        // Books
        books::list_books,
        books::create_book,
        // Loans
        loans::list_loans,
        loans::create_loan,
        loans::return_loan,
        loans::return_loan_by_id,
    ),
    components(
        schemas(
            crate::models::student::Student,
            crate::models::student::CreateStudent,
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::loan::Loan,
            crate::models::Receipt,
            loans::CreateLoanRequest,
            loans::ReturnLoanRequest,
            health::HealthResponse,
            crate::error::ErrorKind,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "alunos", description = "Operações relacionadas a alunos"),
        (name = "livros", description = "Operações relacionadas a livros"),
        (name = "emprestimos", description = "Operações de empréstimo e devolução")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
