//! Students repository for database operations

use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::student::{CreateStudent, Student, StudentConflict},
};

#[derive(Clone)]
pub struct StudentsRepository {
    pool: SqlitePool,
}

impl StudentsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all students in registration order
    pub async fn list(&self) -> AppResult<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(students)
    }

    /// Find which unique field of an incoming registration is already taken
    pub async fn find_conflict(&self, student: &CreateStudent) -> AppResult<Option<StudentConflict>> {
        let existing = sqlx::query_as::<_, (String, String, String)>(
            r#"
            SELECT enrollment_code, email, phone
            FROM students
            WHERE enrollment_code = ?1 OR email = ?2 OR phone = ?3
            LIMIT 1
            "#,
        )
        .bind(&student.enrollment_code)
        .bind(&student.email)
        .bind(&student.phone)
        .fetch_optional(&self.pool)
        .await?;

        Ok(existing.map(|(enrollment_code, email, _)| {
            if enrollment_code == student.enrollment_code {
                StudentConflict::EnrollmentCode
            } else if email == student.email {
                StudentConflict::Email
            } else {
                StudentConflict::Phone
            }
        }))
    }

    /// Create a new student
    pub async fn create(&self, student: &CreateStudent) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, enrollment_code, email, phone)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&student.name)
        .bind(&student.enrollment_code)
        .bind(&student.email)
        .bind(&student.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(unique_violation_as_duplicate)
    }
}

/// Registrations racing past `find_conflict` still hit the UNIQUE constraints
fn unique_violation_as_duplicate(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let message = StudentConflict::from_column(db_err.message())
                .map(|conflict| conflict.message())
                .unwrap_or("Aluno já cadastrado");
            return AppError::Duplicate(message.to_string());
        }
    }
    AppError::Database(err)
}
