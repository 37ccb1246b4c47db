//! Storage backends
//!
//! The lifecycle components only see the store traits; this module provides
//! the in-memory implementation used by the server binary and the test suite.

pub mod in_memory;

pub use in_memory::{InMemoryBookingStore, InMemoryLoadStore};
