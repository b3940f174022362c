//! In-process slot storage
//!
//! A HashMap behind a RwLock. No persistence; contents live as long as the
//! store instance.

use beacon_core::{Result, SlotStore};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory slot storage
///
/// Clone-free sharing is done by wrapping in `Arc` at the call site, the
/// same way every `SlotStore` backend is shared.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlotStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots ever written
    pub fn slot_count(&self) -> usize {
        self.slots.read().len()
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.read().get(slot).cloned())
    }

    fn write(&self, slot: &str, contents: &str) -> Result<()> {
        self.slots
            .write()
            .insert(slot.to_string(), contents.to_string());
        Ok(())
    }
}
