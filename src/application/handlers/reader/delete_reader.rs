//! DeleteReaderHandler - Command handler for removing readers.

use std::sync::Arc;

use crate::domain::foundation::ReaderId;
use crate::domain::reader::ReaderError;
use crate::ports::ReaderRepository;

/// Command to remove a reader and their day records.
#[derive(Debug, Clone)]
pub struct DeleteReaderCommand {
    pub reader_id: ReaderId,
}

/// Handler for removing readers. Deleting an unknown reader succeeds.
pub struct DeleteReaderHandler {
    repository: Arc<dyn ReaderRepository>,
}

impl DeleteReaderHandler {
    pub fn new(repository: Arc<dyn ReaderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteReaderCommand) -> Result<(), ReaderError> {
        self.repository.delete(cmd.reader_id).await?;
        tracing::info!(reader_id = %cmd.reader_id, "reader deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::reader::test_support::MockReaderStore;
    use crate::domain::reader::{NewReader, ReaderName};
    use crate::ports::ProgressReader;

    #[tokio::test]
    async fn removes_reader_and_day_records() {
        let store = Arc::new(MockReaderStore::new());
        let keep = store
            .create(NewReader::new(ReaderName::new("Keep").unwrap()))
            .await
            .unwrap();
        let gone = store
            .create(NewReader::new(ReaderName::new("Gone").unwrap()))
            .await
            .unwrap();
        let handler = DeleteReaderHandler::new(store.clone());

        handler
            .handle(DeleteReaderCommand {
                reader_id: gone.id(),
            })
            .await
            .unwrap();

        let views = store.list_with_progress().await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, keep.id());
        assert!(store.day_records(gone.id()).await.unwrap().is_empty());
        assert_eq!(store.day_records(keep.id()).await.unwrap().len(), 30);
    }

    #[tokio::test]
    async fn deleting_unknown_reader_succeeds() {
        let handler = DeleteReaderHandler::new(Arc::new(MockReaderStore::new()));
        handler
            .handle(DeleteReaderCommand {
                reader_id: ReaderId::from_i64(404),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let handler = DeleteReaderHandler::new(Arc::new(MockReaderStore::failing()));
        let err = handler
            .handle(DeleteReaderCommand {
                reader_id: ReaderId::from_i64(1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ReaderError::Storage(_)));
    }
}
