//! Loan model and lending policy

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{book::BookId, student::StudentId};

pub type LoanId = i64;

/// Number of calendar days a book may be kept
pub const LOAN_PERIOD_DAYS: i64 = 7;

/// Loan model from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    #[schema(value_type = i64)]
    pub id: LoanId,
    #[serde(rename = "aluno_id")]
    #[schema(value_type = i64)]
    pub student_id: StudentId,
    #[serde(rename = "livro_id")]
    #[schema(value_type = i64)]
    pub book_id: BookId,
    #[serde(rename = "data_emprestimo")]
    pub loaned_at: DateTime<Utc>,
    #[serde(rename = "data_limite_devolucao")]
    pub due_at: DateTime<Utc>,
    /// Set once, when the book comes back
    #[serde(rename = "data_devolucao")]
    pub returned_at: Option<DateTime<Utc>>,
    /// Null until returned
    #[serde(rename = "devolvido_em_atraso")]
    pub late: Option<bool>,
}

/// Loan row to insert
#[derive(Debug, Clone)]
pub struct NewLoan {
    pub student_id: StudentId,
    pub book_id: BookId,
    pub loaned_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
}

impl NewLoan {
    /// Builds a loan starting at `loaned_at`, due at the end of the last day of the period
    pub fn starting_at(student_id: StudentId, book_id: BookId, loaned_at: DateTime<Utc>) -> Self {
        Self {
            student_id,
            book_id,
            loaned_at,
            due_at: due_date(loaned_at),
        }
    }
}

/// Due date for a loan created at `loaned_at`: 23:59:59 of the day
/// `LOAN_PERIOD_DAYS` later, whatever the time of day of the loan.
pub fn due_date(loaned_at: DateTime<Utc>) -> DateTime<Utc> {
    let due_day = (loaned_at + Duration::days(LOAN_PERIOD_DAYS)).date_naive();
    let start_of_day = Utc.from_utc_datetime(&due_day.and_time(NaiveTime::MIN));
    start_of_day + Duration::days(1) - Duration::seconds(1)
}

/// A return is late when it happens strictly after the due date
pub fn is_late(due_at: DateTime<Utc>, returned_at: DateTime<Utc>) -> bool {
    returned_at > due_at
}
