//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Reader Ports
//!
//! - `ReaderRepository` - Creating, updating and deleting readers
//! - `ProgressReader` - Listing readers with their dense progress

mod progress_reader;
mod reader_repository;

pub use progress_reader::{ProgressReader, ReaderView};
pub use reader_repository::ReaderRepository;
