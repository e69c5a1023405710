//! Repository layer for database operations

pub mod books;
pub mod loans;
pub mod students;

use std::{str::FromStr, time::Duration};

use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
};

use crate::{config::DatabaseConfig, error::AppResult};

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open a connection pool for the configured SQLite database
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(config.busy_timeout_secs));

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: SqlitePool,
    pub students: students::StudentsRepository,
    pub books: books::BooksRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            students: students::StudentsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            loans: loans::LoansRepository::new(pool.clone()),
            pool,
        }
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Private in-memory database with the schema applied.
    /// A single connection keeps every query on the same memory database.
    pub async fn memory_repository() -> Repository {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            busy_timeout_secs: 1,
        };
        let pool = connect(&config).await.unwrap();
        MIGRATOR.run(&pool).await.unwrap();
        Repository::new(pool)
    }

    /// Database file with several pooled connections, for tests that race
    /// writers against each other. The directory must outlive the pool.
    pub async fn file_repository(max_connections: u32) -> (tempfile::TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("biblioteca.db").display()),
            max_connections,
            busy_timeout_secs: 10,
        };
        let pool = connect(&config).await.unwrap();
        MIGRATOR.run(&pool).await.unwrap();
        (dir, Repository::new(pool))
    }

    pub async fn fetch_loan(repo: &Repository, id: crate::models::LoanId) -> crate::models::Loan {
        sqlx::query_as("SELECT * FROM loans WHERE id = ?")
            .bind(id)
            .fetch_one(&repo.pool)
            .await
            .unwrap()
    }

    pub async fn book_available(repo: &Repository, id: crate::models::BookId) -> bool {
        sqlx::query_scalar("SELECT available FROM books WHERE id = ?")
            .bind(id)
            .fetch_one(&repo.pool)
            .await
            .unwrap()
    }
}
