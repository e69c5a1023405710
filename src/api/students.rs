//! Student endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        student::{CreateStudent, Student},
        Receipt,
    },
};

use super::ApiJson;

/// List all registered students
#[utoipa::path(
    get,
    path = "/alunos",
    tag = "alunos",
    responses(
        (status = 200, description = "Registered students", body = Vec<Student>)
    )
)]
pub async fn list_students(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = state.services.students.list().await?;
    Ok(Json(students))
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/alunos",
    tag = "alunos",
    request_body = CreateStudent,
    responses(
        (status = 201, description = "Student registered", body = Receipt),
        (status = 400, description = "Missing or invalid field", body = crate::error::ErrorResponse),
        (status = 409, description = "Enrollment code, email or phone already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_student(
    State(state): State<crate::AppState>,
    ApiJson(student): ApiJson<CreateStudent>,
) -> AppResult<(StatusCode, Json<Receipt>)> {
    let receipt = state.services.students.register(student).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
