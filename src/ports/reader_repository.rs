//! Reader repository port (write side).
//!
//! Defines the contract for creating readers, updating their day flags and
//! removing them. Implementations handle the actual database operations.
//!
//! # Design
//!
//! - **Fixed schedule**: a reader always owns exactly one day record per
//!   schedule day, from creation until deletion
//! - **Atomic**: every multi-row mutation runs in a single transaction
//! - **Lenient**: updates and deletes that match nothing succeed

use crate::domain::foundation::{DomainError, ReaderId};
use crate::domain::reader::{NewReader, Reader};
use async_trait::async_trait;

/// Repository port for reader persistence.
#[async_trait]
pub trait ReaderRepository: Send + Sync {
    /// Insert a reader together with one unmarked record per schedule day.
    ///
    /// The reader row and all day rows are committed together or not at all.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, reader: NewReader) -> Result<Reader, DomainError>;

    /// Set the completion flag of one day.
    ///
    /// `day_number` is not range checked. When no record matches the
    /// (reader, day) pair nothing changes and the call still succeeds.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn set_day_status(
        &self,
        reader_id: ReaderId,
        day_number: i64,
        completed: bool,
    ) -> Result<(), DomainError>;

    /// Delete a reader and all of its day records.
    ///
    /// Deleting an unknown reader succeeds.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, reader_id: ReaderId) -> Result<(), DomainError>;
}
