//! SQLite implementation of ReaderRepository.
//!
//! A reader row and its day rows are always written and removed together
//! inside one transaction.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::domain::foundation::{DomainError, ReaderId};
use crate::domain::reader::{DayNumber, NewReader, Reader};
use crate::ports::ReaderRepository;

/// SQLite implementation of ReaderRepository.
#[derive(Clone)]
pub struct SqliteReaderRepository {
    pool: SqlitePool,
}

impl SqliteReaderRepository {
    /// Creates a new SqliteReaderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReaderRepository for SqliteReaderRepository {
    async fn create(&self, reader: NewReader) -> Result<Reader, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let result = sqlx::query("INSERT INTO readers (name, created_at) VALUES (?1, ?2)")
            .bind(reader.name.as_str())
            .bind(reader.created_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to insert reader", e))?;
        let id = ReaderId::from_i64(result.last_insert_rowid());

        // Seed the whole schedule in one statement.
        let mut seed: QueryBuilder<Sqlite> =
            QueryBuilder::new("INSERT INTO progress (reader_id, day_number, completed) ");
        seed.push_values(DayNumber::all(), |mut row, day| {
            row.push_bind(id.as_i64())
                .push_bind(day.get())
                .push_bind(false);
        });
        seed.build()
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to seed reading days", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(Reader::from_new(id, reader))
    }

    async fn set_day_status(
        &self,
        reader_id: ReaderId,
        day_number: i64,
        completed: bool,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE progress SET completed = ?1 WHERE reader_id = ?2 AND day_number = ?3",
        )
        .bind(completed)
        .bind(reader_id.as_i64())
        .bind(day_number)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update reading day", e))?;

        if result.rows_affected() == 0 {
            tracing::debug!(%reader_id, day_number, "day status update matched no record");
        } else {
            tracing::debug!(%reader_id, day_number, completed, "day status updated");
        }

        Ok(())
    }

    async fn delete(&self, reader_id: ReaderId) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        sqlx::query("DELETE FROM progress WHERE reader_id = ?1")
            .bind(reader_id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete reading days", e))?;

        sqlx::query("DELETE FROM readers WHERE id = ?1")
            .bind(reader_id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete reader", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(())
    }
}
