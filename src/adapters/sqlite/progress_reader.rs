//! SQLite implementation of ProgressReader.
//!
//! Listing runs two queries inside one read transaction: all readers in id
//! (creation) order, then the day rows of exactly those readers in bulk. Each reader's dense
//! progress is rebuilt from its rows.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqliteConnection, SqlitePool};

use crate::domain::foundation::{DomainError, ReaderId};
use crate::domain::reader::{DayRecord, Reader, ReaderName, ReadingProgress};
use crate::ports::{ProgressReader, ReaderView};

/// Upper bound on reader ids bound into a single `IN (...)` list.
const ID_CHUNK_SIZE: usize = 500;

/// SQLite implementation of ProgressReader.
#[derive(Clone)]
pub struct SqliteProgressReader {
    pool: SqlitePool,
}

impl SqliteProgressReader {
    /// Creates a new SqliteProgressReader.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgressReader for SqliteProgressReader {
    async fn list_with_progress(&self) -> Result<Vec<ReaderView>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let rows = sqlx::query(
            "SELECT id, name FROM readers ORDER BY id ASC",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to fetch readers", e))?;

        let readers: Vec<Reader> = rows
            .into_iter()
            .map(row_to_reader)
            .collect::<Result<_, _>>()?;

        if readers.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<ReaderId> = readers.iter().map(Reader::id).collect();
        let records = fetch_day_records(&mut tx, &ids).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        let mut by_reader: HashMap<ReaderId, Vec<DayRecord>> = HashMap::new();
        for record in records {
            by_reader.entry(record.reader_id).or_default().push(record);
        }

        Ok(readers
            .iter()
            .map(|reader| {
                let own = by_reader.get(&reader.id()).map(Vec::as_slice).unwrap_or(&[]);
                ReaderView::new(reader, ReadingProgress::from_records(own))
            })
            .collect())
    }

    async fn day_records(&self, reader_id: ReaderId) -> Result<Vec<DayRecord>, DomainError> {
        let rows = sqlx::query(
            "SELECT reader_id, day_number, completed FROM progress WHERE reader_id = ?1 ORDER BY day_number",
        )
        .bind(reader_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch reading days", e))?;

        rows.into_iter().map(row_to_day_record).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

async fn fetch_day_records(
    conn: &mut SqliteConnection,
    ids: &[ReaderId],
) -> Result<Vec<DayRecord>, DomainError> {
    let mut records = Vec::new();

    for chunk in ids.chunks(ID_CHUNK_SIZE) {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT reader_id, day_number, completed FROM progress WHERE reader_id IN (",
        );
        let mut separated = query.separated(", ");
        for id in chunk {
            separated.push_bind(id.as_i64());
        }
        separated.push_unseparated(")");

        let rows = query
            .build()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| DomainError::database("Failed to fetch reading days", e))?;

        for row in rows {
            records.push(row_to_day_record(row)?);
        }
    }

    Ok(records)
}

fn row_to_reader(row: SqliteRow) -> Result<Reader, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;

    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database("Failed to get name", e))?;

    let name = ReaderName::new(name)
        .map_err(|e| DomainError::database(&format!("Invalid name for reader {}", id), e))?;

    Ok(Reader::reconstitute(ReaderId::from_i64(id), name))
}

fn row_to_day_record(row: SqliteRow) -> Result<DayRecord, DomainError> {
    let reader_id: i64 = row
        .try_get("reader_id")
        .map_err(|e| DomainError::database("Failed to get reader_id", e))?;

    let day_number: i64 = row
        .try_get("day_number")
        .map_err(|e| DomainError::database("Failed to get day_number", e))?;

    let completed: bool = row
        .try_get("completed")
        .map_err(|e| DomainError::database("Failed to get completed", e))?;

    Ok(DayRecord {
        reader_id: ReaderId::from_i64(reader_id),
        day_number,
        completed,
    })
}
