//! Storage abstraction and implementations for KineTips.
//!
//! This crate provides a key-value storage interface with file and
//! in-memory backends, and the progress store layered on top of it.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod memory;
pub mod progress_store;

pub use trait_::{KeyValueStore, StorageError, Result};
pub use json_storage::FileStore;
pub use memory::InMemoryStore;
pub use progress_store::{ProgressMap, ProgressStore, DEFAULT_PROGRESS_KEY};
