#![forbid(unsafe_code)]

//! Snapshot persistence for the task list.
//!
//! The whole task sequence lives in one persistent slot: a single JSON value
//! that is rewritten wholesale after every mutation and read back once at
//! startup. There is no retry, no versioning, no migration. [`SlotBackend`]
//! abstracts where the slot lives ([`MemorySlot`] for tests, [`FileSlot`] for
//! production); [`TaskStore`] is the facade the application talks to, with
//! the degrade-to-empty load semantics the UI relies on.

mod error;
mod slot;
mod store;

pub use error::{StoreError, StoreResult};
pub use slot::{FileSlot, MemorySlot, SlotBackend};
pub use store::TaskStore;
