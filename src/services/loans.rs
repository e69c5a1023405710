//! Loan lifecycle service

use std::sync::Arc;

use mockable::Clock;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::BookId,
        loan::{Loan, LoanId, NewLoan},
        student::StudentId,
        Receipt,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl LoansService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Lend a book to a student
    pub async fn create_loan(&self, student_id: StudentId, book_id: BookId) -> AppResult<Receipt> {
        let new_loan = NewLoan::starting_at(student_id, book_id, self.clock.utc());

        let created = match self.repository.loans.create(&new_loan).await {
            Ok(created) => created,
            Err(err @ AppError::Unavailable(_)) => {
                tracing::warn!(student_id, book_id, "Loan refused, book unavailable");
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        tracing::info!(
            loan_id = created.loan.id,
            student_id,
            book_id,
            due_at = %created.loan.due_at,
            "Book loaned"
        );

        Ok(Receipt::new(
            created.loan.id,
            format!(
                "Empréstimo realizado com sucesso para livro {} - {} e aluno {} - {}",
                created.book.id, created.book.title, created.student.enrollment_code, created.student.name
            ),
        ))
    }

    /// Return a loaned book
    pub async fn return_loan(&self, loan_id: LoanId) -> AppResult<Receipt> {
        let loan = self.repository.loans.return_loan(loan_id, self.clock.utc()).await?;
        let late = loan.late.unwrap_or(false);

        tracing::info!(loan_id, book_id = loan.book_id, late, "Book returned");

        let message = if late {
            "Livro devolvido com sucesso, porém em atraso."
        } else {
            "Livro devolvido com sucesso."
        };
        Ok(Receipt::new(loan.id, message))
    }

    /// List all loans
    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        self.repository.loans.list().await
    }
}
