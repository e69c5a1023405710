//! Data models for the school library

pub mod book;
pub mod loan;
pub mod student;

use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationError;

// Re-export commonly used types
pub use book::{Book, BookId, CreateBook};
pub use loan::{Loan, LoanId, NewLoan};
pub use student::{CreateStudent, Student, StudentId};

/// Confirmation returned by every write operation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Receipt {
    /// Identity of the created or updated record
    pub id: i64,
    /// Human-readable confirmation
    pub message: String,
}

impl Receipt {
    pub fn new(id: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

/// Rejects empty and whitespace-only strings
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("campo obrigatório não pode ser vazio".into());
        return Err(error);
    }
    Ok(())
}
