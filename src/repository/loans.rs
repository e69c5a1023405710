//! Loans repository for database operations
//!
//! Loan creation and return each run in a single transaction that starts
//! with a write, so SQLite takes the write lock before anything is read and
//! concurrent lifecycle operations are serialized by the database.

use chrono::{DateTime, Utc};
use sqlx::{SqlitePool, Sqlite, Transaction};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookId},
        loan::{is_late, Loan, LoanId, NewLoan},
        student::Student,
    },
};

/// A freshly created loan with the records it references
#[derive(Debug, Clone)]
pub struct CreatedLoan {
    pub loan: Loan,
    pub student: Student,
    pub book: Book,
}

#[derive(Clone)]
pub struct LoansRepository {
    pool: SqlitePool,
}

impl LoansRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all loans in creation order
    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>("SELECT * FROM loans ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(loans)
    }

    /// Create a loan and mark its book unavailable, atomically
    pub async fn create(&self, new_loan: &NewLoan) -> AppResult<CreatedLoan> {
        let mut tx = self.pool.begin().await?;

        // Claim the book first; this is the write that serializes competing loans
        let claimed = sqlx::query("UPDATE books SET available = 0 WHERE id = ? AND available = 1")
            .bind(new_loan.book_id)
            .execute(&mut *tx)
            .await?;

        let book = fetch_book(&mut tx, new_loan.book_id).await?;
        if claimed.rows_affected() == 0 {
            return Err(AppError::Unavailable(format!(
                "Livro {} - {} não está disponível",
                book.id, book.title
            )));
        }

        let student = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = ?")
            .bind(new_loan.student_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Aluno {} não encontrado", new_loan.student_id))
            })?;

        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (student_id, book_id, loaned_at, due_at, returned_at, late)
            VALUES (?, ?, ?, ?, NULL, NULL)
            RETURNING *
            "#,
        )
        .bind(new_loan.student_id)
        .bind(new_loan.book_id)
        .bind(new_loan.loaned_at)
        .bind(new_loan.due_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Unavailable(format!("Livro {} já está emprestado", new_loan.book_id))
            }
            _ => AppError::Database(err),
        })?;

        tx.commit().await?;

        Ok(CreatedLoan {
            loan,
            student,
            // Reflect the committed state rather than the pre-claim read
            book: Book {
                available: false,
                ..book
            },
        })
    }

    /// Close an open loan, flag lateness and release its book, atomically
    pub async fn return_loan(&self, loan_id: LoanId, returned_at: DateTime<Utc>) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        // Only an open loan can be closed; a second return matches no row
        let closed = sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans SET returned_at = ?
            WHERE id = ? AND returned_at IS NULL
            RETURNING *
            "#,
        )
        .bind(returned_at)
        .bind(loan_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut loan) = closed else {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM loans WHERE id = ?)")
                .bind(loan_id)
                .fetch_one(&mut *tx)
                .await?;
            return Err(if exists {
                AppError::AlreadyReturned(format!("Empréstimo {} já foi devolvido", loan_id))
            } else {
                AppError::NotFound(format!("Empréstimo {} não encontrado", loan_id))
            });
        };

        let late = is_late(loan.due_at, returned_at);
        sqlx::query("UPDATE loans SET late = ? WHERE id = ?")
            .bind(late)
            .bind(loan_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE books SET available = 1 WHERE id = ?")
            .bind(loan.book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        loan.late = Some(late);
        Ok(loan)
    }
}

async fn fetch_book(tx: &mut Transaction<'_, Sqlite>, id: BookId) -> AppResult<Book> {
    sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Livro {} não encontrado", id)))
}
