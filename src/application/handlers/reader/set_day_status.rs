//! SetDayStatusHandler - Command handler for marking a day done or undone.

use std::sync::Arc;

use crate::domain::foundation::ReaderId;
use crate::domain::reader::ReaderError;
use crate::ports::ReaderRepository;

/// Command to set one day's completion flag.
///
/// Neither the reader nor the day number is validated; a command that
/// matches no stored day is a successful no-op.
#[derive(Debug, Clone)]
pub struct SetDayStatusCommand {
    pub reader_id: ReaderId,
    pub day_number: i64,
    pub completed: bool,
}

/// Handler for day status updates.
pub struct SetDayStatusHandler {
    repository: Arc<dyn ReaderRepository>,
}

impl SetDayStatusHandler {
    pub fn new(repository: Arc<dyn ReaderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SetDayStatusCommand) -> Result<(), ReaderError> {
        self.repository
            .set_day_status(cmd.reader_id, cmd.day_number, cmd.completed)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::reader::test_support::MockReaderStore;
    use crate::domain::reader::{DayNumber, NewReader, ReaderName, ReadingProgress};
    use crate::ports::ProgressReader;

    async fn store_with_reader(name: &str) -> (Arc<MockReaderStore>, ReaderId) {
        let store = Arc::new(MockReaderStore::new());
        let reader = store
            .create(NewReader::new(ReaderName::new(name).unwrap()))
            .await
            .unwrap();
        (store, reader.id())
    }

    #[tokio::test]
    async fn marks_only_the_requested_day() {
        let (store, id) = store_with_reader("Alice").await;
        let handler = SetDayStatusHandler::new(store.clone());

        handler
            .handle(SetDayStatusCommand {
                reader_id: id,
                day_number: 7,
                completed: true,
            })
            .await
            .unwrap();

        let views = store.list_with_progress().await.unwrap();
        let progress = views[0].progress;
        assert!(progress.is_completed(DayNumber::new(7).unwrap()));
        assert_eq!(progress.completed_days(), 1);
    }

    #[tokio::test]
    async fn unmarking_restores_false() {
        let (store, id) = store_with_reader("Alice").await;
        let handler = SetDayStatusHandler::new(store.clone());

        for completed in [true, false] {
            handler
                .handle(SetDayStatusCommand {
                    reader_id: id,
                    day_number: 3,
                    completed,
                })
                .await
                .unwrap();
        }

        let views = store.list_with_progress().await.unwrap();
        assert_eq!(views[0].progress, ReadingProgress::unmarked());
    }

    #[tokio::test]
    async fn unknown_reader_is_a_successful_no_op() {
        let (store, _) = store_with_reader("Alice").await;
        let handler = SetDayStatusHandler::new(store.clone());

        handler
            .handle(SetDayStatusCommand {
                reader_id: ReaderId::from_i64(999),
                day_number: 1,
                completed: true,
            })
            .await
            .unwrap();

        let views = store.list_with_progress().await.unwrap();
        assert_eq!(views[0].progress, ReadingProgress::unmarked());
    }

    #[tokio::test]
    async fn out_of_range_day_is_a_successful_no_op() {
        let (store, id) = store_with_reader("Alice").await;
        let handler = SetDayStatusHandler::new(store.clone());

        handler
            .handle(SetDayStatusCommand {
                reader_id: id,
                day_number: 31,
                completed: true,
            })
            .await
            .unwrap();

        let views = store.list_with_progress().await.unwrap();
        assert_eq!(views[0].progress.completed_days(), 0);
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let handler = SetDayStatusHandler::new(Arc::new(MockReaderStore::failing()));
        let err = handler
            .handle(SetDayStatusCommand {
                reader_id: ReaderId::from_i64(1),
                day_number: 1,
                completed: true,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ReaderError::Storage(_)));
    }
}
