//! Mutex-backed port implementations shared by the reader handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, ReaderId};
use crate::domain::reader::{DayNumber, DayRecord, NewReader, Reader, ReadingProgress};
use crate::ports::{ProgressReader, ReaderRepository, ReaderView};

#[derive(Default)]
pub struct MockReaderStore {
    readers: Mutex<Vec<Reader>>,
    records: Mutex<Vec<DayRecord>>,
    next_id: Mutex<i64>,
    fail: bool,
}

impl MockReaderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn reader_count(&self) -> usize {
        self.readers.lock().unwrap().len()
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated storage failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ReaderRepository for MockReaderStore {
    async fn create(&self, reader: NewReader) -> Result<Reader, DomainError> {
        self.check()?;
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            ReaderId::from_i64(*next_id)
        };
        let reader = Reader::from_new(id, reader);
        self.readers.lock().unwrap().push(reader.clone());
        self.records
            .lock()
            .unwrap()
            .extend(DayNumber::all().map(|day| DayRecord {
                reader_id: id,
                day_number: day.get(),
                completed: false,
            }));
        Ok(reader)
    }

    async fn set_day_status(
        &self,
        reader_id: ReaderId,
        day_number: i64,
        completed: bool,
    ) -> Result<(), DomainError> {
        self.check()?;
        for record in self.records.lock().unwrap().iter_mut() {
            if record.reader_id == reader_id && record.day_number == day_number {
                record.completed = completed;
            }
        }
        Ok(())
    }

    async fn delete(&self, reader_id: ReaderId) -> Result<(), DomainError> {
        self.check()?;
        self.records
            .lock()
            .unwrap()
            .retain(|r| r.reader_id != reader_id);
        self.readers.lock().unwrap().retain(|r| r.id() != reader_id);
        Ok(())
    }
}

#[async_trait]
impl ProgressReader for MockReaderStore {
    async fn list_with_progress(&self) -> Result<Vec<ReaderView>, DomainError> {
        self.check()?;
        let records = self.records.lock().unwrap();
        Ok(self
            .readers
            .lock()
            .unwrap()
            .iter()
            .map(|reader| {
                let own = records.iter().filter(|r| r.reader_id == reader.id());
                ReaderView::new(reader, ReadingProgress::from_records(own))
            })
            .collect())
    }

    async fn day_records(&self, reader_id: ReaderId) -> Result<Vec<DayRecord>, DomainError> {
        self.check()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.reader_id == reader_id)
            .copied()
            .collect())
    }
}
