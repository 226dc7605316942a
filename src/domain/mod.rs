//! Domain layer - pure business types with no I/O.
//!
//! - `foundation` - identifiers, timestamps and shared error types
//! - `reader` - readers, the reading schedule and progress

pub mod foundation;
pub mod reader;
