//! Durable key-value storage for session state.
//!
//! The session gate never touches the filesystem directly; it is handed a
//! [`KeyValueStore`] at construction. [`FileStore`] is the on-disk
//! implementation used by the console, [`MemoryStore`] backs tests.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::CoreResult;

/// A string-to-string store with get/set/remove semantics.
///
/// Keys are case-sensitive. Removing a key that does not exist is not an error.
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> CoreResult<()>;

    /// Deletes `key`.
    fn remove(&mut self, key: &str) -> CoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> CoreResult<()> {
        (**self).remove(key)
    }
}
