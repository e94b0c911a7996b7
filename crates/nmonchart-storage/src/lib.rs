//! nmonchart Storage Library
//!
//! This crate provides the storage abstraction for accepted uploads and its local
//! filesystem implementation.
//!
//! # Layout
//!
//! The upload directory is flat: every stored file sits directly under the root and is
//! named by its uploaded base name. There is no manifest and no versioning; storing a
//! name that already exists replaces the previous file. Names must be a single path
//! segment (no `/`, `\`, `.` or `..`).

pub mod factory;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
