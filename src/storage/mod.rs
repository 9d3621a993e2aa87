//! Durable key-value slot the workouts are persisted into.
//!
//! The core only needs the three operations a browser's local storage
//! offers; `FileStore` backs them with one file per key, `MemoryStore`
//! keeps everything in a map for tests.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;

pub trait KeyValueStore {
    /// Value stored under `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> AppResult<()>;
}
