//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` - Persistence of readers and their reading days
//! - `http` - REST API over the application handlers

pub mod http;
pub mod sqlite;
