use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::ScoreStore;

/// In-memory store. Clones share the same records, so a test can keep a
/// handle and inspect what the game wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Rc<RefCell<HashMap<String, u32>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one record
    pub fn with_value(key: &str, value: u32) -> Self {
        let store = Self::new();
        store.records.borrow_mut().insert(key.to_string(), value);
        store
    }

    /// Number of `set` calls seen so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<u32>> {
        Ok(self.records.borrow().get(key).copied())
    }

    fn set(&mut self, key: &str, value: u32) -> Result<()> {
        self.records.borrow_mut().insert(key.to_string(), value);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
