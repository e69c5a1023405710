//! Student model and registration request

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

pub type StudentId = i64;

/// Student record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    #[schema(value_type = i64)]
    pub id: StudentId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Enrollment code (unique)
    #[serde(rename = "matricula")]
    pub enrollment_code: String,
    /// Email address (unique)
    pub email: String,
    /// Phone number (unique)
    #[serde(rename = "telefone")]
    pub phone: String,
}

/// Register student request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStudent {
    #[serde(rename = "nome", alias = "name")]
    #[validate(custom(function = "crate::models::not_blank"))]
    pub name: String,
    #[serde(rename = "matricula", alias = "enrollment_code")]
    #[validate(custom(function = "crate::models::not_blank"))]
    pub enrollment_code: String,
    #[validate(email(message = "Formato de email inválido"))]
    pub email: String,
    #[serde(rename = "telefone", alias = "phone")]
    #[validate(custom(function = "crate::models::not_blank"))]
    pub phone: String,
}

/// Unique student field that an incoming registration collides with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentConflict {
    EnrollmentCode,
    Email,
    Phone,
}

impl StudentConflict {
    /// Matches the column named in a UNIQUE constraint failure
    pub fn from_column(message: &str) -> Option<Self> {
        if message.contains("enrollment_code") {
            Some(StudentConflict::EnrollmentCode)
        } else if message.contains("email") {
            Some(StudentConflict::Email)
        } else if message.contains("phone") {
            Some(StudentConflict::Phone)
        } else {
            None
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            StudentConflict::EnrollmentCode => "Matrícula já cadastrada",
            StudentConflict::Email => "Email já cadastrado",
            StudentConflict::Phone => "Telefone já cadastrado",
        }
    }
}
