//! ListReadersHandler - Query handler for listing readers with progress.

use std::sync::Arc;

use crate::domain::reader::ReaderError;
use crate::ports::{ProgressReader, ReaderView};

/// Query for every reader with their progress.
#[derive(Debug, Clone, Default)]
pub struct ListReadersQuery;

/// Handler for listing readers.
pub struct ListReadersHandler {
    reader: Arc<dyn ProgressReader>,
}

impl ListReadersHandler {
    pub fn new(reader: Arc<dyn ProgressReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, _query: ListReadersQuery) -> Result<Vec<ReaderView>, ReaderError> {
        let readers = self.reader.list_with_progress().await?;
        Ok(readers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::reader::test_support::MockReaderStore;
    use crate::domain::reader::{NewReader, ReaderName};
    use crate::ports::ReaderRepository;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListReadersHandler::new(Arc::new(MockReaderStore::new()));
        let readers = handler.handle(ListReadersQuery).await.unwrap();
        assert!(readers.is_empty());
    }

    #[tokio::test]
    async fn lists_readers_in_creation_order() {
        let store = Arc::new(MockReaderStore::new());
        for name in ["Alice", "Bilal", "Chadia"] {
            store
                .create(NewReader::new(ReaderName::new(name).unwrap()))
                .await
                .unwrap();
        }
        let handler = ListReadersHandler::new(store);

        let names: Vec<String> = handler
            .handle(ListReadersQuery)
            .await
            .unwrap()
            .into_iter()
            .map(|view| view.name)
            .collect();

        assert_eq!(names, vec!["Alice", "Bilal", "Chadia"]);
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let handler = ListReadersHandler::new(Arc::new(MockReaderStore::failing()));
        let err = handler.handle(ListReadersQuery).await.unwrap_err();
        assert!(matches!(err, ReaderError::Storage(_)));
    }
}
