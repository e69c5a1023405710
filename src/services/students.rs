//! Student registration service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        student::{CreateStudent, Student},
        Receipt,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct StudentsService {
    repository: Repository,
}

impl StudentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new student
    pub async fn register(&self, student: CreateStudent) -> AppResult<Receipt> {
        student.validate()?;

        if let Some(conflict) = self.repository.students.find_conflict(&student).await? {
            return Err(AppError::Duplicate(conflict.message().to_string()));
        }

        let created = self.repository.students.create(&student).await?;
        tracing::info!(student_id = created.id, enrollment_code = %created.enrollment_code, "Student registered");

        Ok(Receipt::new(created.id, "Aluno cadastrado com sucesso"))
    }

    /// List all students
    pub async fn list(&self) -> AppResult<Vec<Student>> {
        self.repository.students.list().await
    }
}
