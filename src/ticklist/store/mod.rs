//! # Storage Layer
//!
//! The [`DataStore`] trait is the Persistence Layer seen by the list store.
//! It moves the plain [`ItemLists`] document in and out of durable storage and
//! knows nothing about ids, sorting or filters.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file holding both lists
//!   (`{"todo": [...], "pass": [...]}`), overwritten whole on every save.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Failure Semantics
//!
//! `load_items` returns `Ok(None)` when there is no prior data at all. An
//! unreadable or unparsable file is an `Err`; the caller decides whether to
//! fall back to seed data (startup does).

use crate::error::Result;
use crate::model::ItemLists;

pub mod fs;
pub mod memory;

/// Abstract interface for item list storage.
pub trait DataStore {
    /// Load both lists, `None` if nothing was ever saved
    fn load_items(&self) -> Result<Option<ItemLists>>;

    /// Replace the stored lists with `lists`
    fn save_items(&mut self, lists: &ItemLists) -> Result<()>;
}
