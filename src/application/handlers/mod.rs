//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod reader;

pub use reader::{
    CreateReaderCommand, CreateReaderHandler, DeleteReaderCommand, DeleteReaderHandler,
    ListReadersHandler, ListReadersQuery, SetDayStatusCommand, SetDayStatusHandler,
};
