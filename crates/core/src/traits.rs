//! Storage seam for the persisted event sequence
//!
//! This module defines the SlotStore trait that enables swapping storage
//! backends (in-process map, file per slot, browser-storage bridge) without
//! breaking the log layer above.

use crate::error::Result;

/// Named-slot key-value storage
///
/// A slot holds one opaque string value (in practice, the JSON-encoded event
/// sequence). `write` fully replaces the previous value; there are no
/// partial or delta writes. An absent slot is not an error.
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync). The log layer assumes a single
/// writer per slot; concurrent writers get last-writer-wins.
pub trait SlotStore: Send + Sync {
    /// Read the current contents of a slot
    ///
    /// Returns `None` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, slot: &str) -> Result<Option<String>>;

    /// Replace the contents of a slot
    ///
    /// Creates the slot if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the slot name or the write
    /// fails (e.g. quota exceeded, disk full).
    fn write(&self, slot: &str, contents: &str) -> Result<()>;
}
