//! CreateReaderHandler - Command handler for adding readers.

use std::sync::Arc;

use crate::domain::reader::{NewReader, ReaderError, ReaderName};
use crate::ports::{ReaderRepository, ReaderView};

/// Command to add a reader.
///
/// `name` is optional so that a missing name reaches the handler and is
/// rejected here, before storage is touched.
#[derive(Debug, Clone)]
pub struct CreateReaderCommand {
    pub name: Option<String>,
}

/// Handler for adding readers.
pub struct CreateReaderHandler {
    repository: Arc<dyn ReaderRepository>,
}

impl CreateReaderHandler {
    pub fn new(repository: Arc<dyn ReaderRepository>) -> Self {
        Self { repository }
    }

    /// Creates the reader and its unmarked schedule.
    ///
    /// The returned view is built from the known initial state rather than
    /// read back from storage.
    pub async fn handle(&self, cmd: CreateReaderCommand) -> Result<ReaderView, ReaderError> {
        let name = cmd
            .name
            .and_then(|name| ReaderName::new(name).ok())
            .ok_or_else(ReaderError::name_required)?;

        let reader = self.repository.create(NewReader::new(name)).await?;
        tracing::info!(reader_id = %reader.id(), name = %reader.name(), "reader created");

        Ok(ReaderView::unmarked(&reader))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::reader::test_support::MockReaderStore;
    use crate::domain::reader::{ReadingProgress, SCHEDULE_DAYS};
    use crate::ports::ProgressReader;

    #[tokio::test]
    async fn creates_reader_with_unmarked_progress() {
        let store = Arc::new(MockReaderStore::new());
        let handler = CreateReaderHandler::new(store.clone());

        let view = handler
            .handle(CreateReaderCommand {
                name: Some("Alice".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(view.name, "Alice");
        assert_eq!(view.progress, ReadingProgress::unmarked());
        assert_eq!(store.reader_count(), 1);
        assert_eq!(store.day_records(view.id).await.unwrap().len(), SCHEDULE_DAYS);
    }

    #[tokio::test]
    async fn missing_name_is_rejected_before_storage() {
        let store = Arc::new(MockReaderStore::new());
        let handler = CreateReaderHandler::new(store.clone());

        let err = handler
            .handle(CreateReaderCommand { name: None })
            .await
            .unwrap_err();

        assert_eq!(err, ReaderError::name_required());
        assert_eq!(store.reader_count(), 0);
    }

    #[tokio::test]
    async fn empty_name_is_rejected_before_storage() {
        let store = Arc::new(MockReaderStore::new());
        let handler = CreateReaderHandler::new(store.clone());

        let err = handler
            .handle(CreateReaderCommand {
                name: Some(String::new()),
            })
            .await
            .unwrap_err();

        assert!(err.is_client_error());
        assert_eq!(store.reader_count(), 0);
        assert_eq!(store.record_count(), 0);
    }

    #[tokio::test]
    async fn validation_wins_over_storage_failure() {
        let handler = CreateReaderHandler::new(Arc::new(MockReaderStore::failing()));

        let err = handler
            .handle(CreateReaderCommand { name: None })
            .await
            .unwrap_err();

        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let handler = CreateReaderHandler::new(Arc::new(MockReaderStore::failing()));

        let err = handler
            .handle(CreateReaderCommand {
                name: Some("Bob".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ReaderError::Storage(_)));
    }

    #[tokio::test]
    async fn ids_are_unique_across_creates() {
        let handler = CreateReaderHandler::new(Arc::new(MockReaderStore::new()));

        let first = handler
            .handle(CreateReaderCommand {
                name: Some("A".to_string()),
            })
            .await
            .unwrap();
        let second = handler
            .handle(CreateReaderCommand {
                name: Some("B".to_string()),
            })
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
    }
}
