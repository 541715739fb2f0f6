//! Durable key-value storage for integer records such as the best score.
//!
//! The game only ever touches one key, but stores are keyed so a single file
//! can hold several records.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use anyhow::Result;

/// A key-value store of non-negative integers.
///
/// Implementations must keep values across process restarts, except for
/// in-memory stores used in tests.
pub trait ScoreStore {
    /// Read the value for `key`, `None` when it was never written
    fn get(&self, key: &str) -> Result<Option<u32>>;

    /// Durably store `value` under `key`
    fn set(&mut self, key: &str, value: u32) -> Result<()>;
}
