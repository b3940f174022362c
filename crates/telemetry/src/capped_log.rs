//! CappedLog: append-only event sequence with FIFO retention
//!
//! ## Design Principles
//!
//! 1. **Fails open**: An absent or unparseable slot is treated as an empty
//!    sequence. Corrupt history is discarded on the next append, never
//!    repaired in place by a read.
//!
//! 2. **Never surfaces errors**: Storage failures drop the append and log a
//!    warning. The caller's flow is never interrupted by telemetry.
//!
//! 3. **Strict FIFO eviction**: After an append the sequence is trimmed from
//!    the front until its length equals the capacity, preserving the relative
//!    order of the retained entries. Overshoot beyond capacity+1 (e.g. a
//!    capacity lowered between runs) is trimmed by the same path.
//!
//! ## Slot Format
//!
//! The slot holds a JSON array of records:
//! `[{ "category": string, "payload": { ... } }, ...]`, length <= capacity.

use beacon_core::{EventRecord, Payload, Result, SlotStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Maximum retained records unless overridden
pub const DEFAULT_CAPACITY: usize = 100;

/// Capped, persisted event sequence
///
/// Holds only a store handle, a slot name, and a capacity; all state lives
/// in the slot. Multiple instances over the same slot observe each other's
/// writes (subject to the single-writer assumption).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use beacon_storage::MemorySlotStore;
/// use beacon_telemetry::CappedLog;
/// use beacon_core::Payload;
///
/// let store = Arc::new(MemorySlotStore::new());
/// let log = CappedLog::new(store, "portfolio_analytics");
///
/// log.append("page_view", Payload::new().with("page", "about"));
/// assert_eq!(log.read_all().len(), 1);
/// ```
#[derive(Clone)]
pub struct CappedLog {
    store: Arc<dyn SlotStore>,
    slot: String,
    capacity: usize,
}

impl CappedLog {
    /// Create a log over `slot` with the default capacity of 100
    pub fn new(store: Arc<dyn SlotStore>, slot: impl Into<String>) -> Self {
        Self::with_capacity(store, slot, DEFAULT_CAPACITY)
    }

    /// Create a log with an explicit capacity
    pub fn with_capacity(
        store: Arc<dyn SlotStore>,
        slot: impl Into<String>,
        capacity: usize,
    ) -> Self {
        Self {
            store,
            slot: slot.into(),
            capacity,
        }
    }

    /// The slot this log persists to
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Maximum retained records
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a record, trimming the oldest entries past capacity
    ///
    /// Infallible from the caller's perspective: a storage or serialization
    /// failure drops the append and emits a `tracing` warning. One slot read
    /// and one slot write per call.
    pub fn append(&self, category: impl Into<String>, payload: Payload) {
        let category = category.into();
        if let Err(e) = self.try_append(&category, payload) {
            warn!(slot = %self.slot, %category, error = %e, "append dropped");
        }
    }

    fn try_append(&self, category: &str, payload: Payload) -> Result<()> {
        let mut records = self.load();
        records.push(EventRecord::new(category, payload));

        if records.len() > self.capacity {
            let excess = records.len() - self.capacity;
            records.drain(..excess);
        }

        let encoded = serde_json::to_string(&records)?;
        self.store.write(&self.slot, &encoded)
    }

    /// Read the persisted sequence in insertion order
    ///
    /// Returns an empty vector if the slot is absent, unreadable, or holds
    /// unparseable data. Never mutates stored state.
    pub fn read_all(&self) -> Vec<EventRecord> {
        self.load()
    }

    /// Current number of retained records
    pub fn len(&self) -> usize {
        self.load().len()
    }

    /// Check whether the log holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load(&self) -> Vec<EventRecord> {
        match self.store.read(&self.slot) {
            Ok(Some(contents)) => match serde_json::from_str(&contents) {
                Ok(records) => records,
                Err(e) => {
                    debug!(slot = %self.slot, error = %e, "unparseable slot, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                debug!(slot = %self.slot, error = %e, "slot unreadable, starting empty");
                Vec::new()
            }
        }
    }
}
