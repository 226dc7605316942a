//! Reader command and query handlers.

mod create_reader;
mod delete_reader;
mod list_readers;
mod set_day_status;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_reader::{CreateReaderCommand, CreateReaderHandler};
pub use delete_reader::{DeleteReaderCommand, DeleteReaderHandler};
pub use list_readers::{ListReadersHandler, ListReadersQuery};
pub use set_day_status::{SetDayStatusCommand, SetDayStatusHandler};
