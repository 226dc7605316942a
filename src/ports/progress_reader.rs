//! Progress reader port (read side).
//!
//! Read-optimized queries returning readers joined with their progress.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ReaderId};
use crate::domain::reader::{DayRecord, Reader, ReadingProgress};

/// Externally visible shape of a reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReaderView {
    pub id: ReaderId,
    pub name: String,
    pub progress: ReadingProgress,
}

impl ReaderView {
    pub fn new(reader: &Reader, progress: ReadingProgress) -> Self {
        Self {
            id: reader.id(),
            name: reader.name().to_string(),
            progress,
        }
    }

    /// View of a reader that has just been created.
    pub fn unmarked(reader: &Reader) -> Self {
        Self::new(reader, ReadingProgress::unmarked())
    }
}

/// Reader port for progress queries.
#[async_trait]
pub trait ProgressReader: Send + Sync {
    /// All readers with their dense progress, oldest first.
    ///
    /// Returns an empty list when there are no readers.
    async fn list_with_progress(&self) -> Result<Vec<ReaderView>, DomainError>;

    /// Raw day records stored for one reader, ordered by day number.
    async fn day_records(&self, reader_id: ReaderId) -> Result<Vec<DayRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reader::ReaderName;

    #[test]
    fn progress_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn ProgressReader) {}
    }

    #[test]
    fn unmarked_view_copies_identity() {
        let reader = Reader::reconstitute(
            ReaderId::from_i64(9),
            ReaderName::new("Yusuf").unwrap(),
        );
        let view = ReaderView::unmarked(&reader);

        assert_eq!(view.id, ReaderId::from_i64(9));
        assert_eq!(view.name, "Yusuf");
        assert_eq!(view.progress, ReadingProgress::unmarked());
    }

    #[test]
    fn view_serializes_id_name_and_progress() {
        let reader = Reader::reconstitute(
            ReaderId::from_i64(1),
            ReaderName::new("Maryam").unwrap(),
        );
        let json = serde_json::to_value(ReaderView::unmarked(&reader)).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Maryam");
        assert_eq!(json["progress"].as_array().unwrap().len(), 30);
    }
}
