//! Event record type
//!
//! One entry in the capped log: a category tag plus a free-form payload.
//! Insertion order is append order is chronological order, so the record
//! itself carries no sequence number or timestamp; producers that need a
//! timestamp include one in the payload.

use crate::scalar::Payload;
use serde::{Deserialize, Serialize};

/// One logged occurrence
///
/// Wire format within the storage slot:
/// `{ "category": string, "payload": { ...arbitrary... } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Short tag identifying the event kind (e.g. `page_view`, `session_end`)
    pub category: String,
    /// Free-form field mapping; shape varies by category
    pub payload: Payload,
}

impl EventRecord {
    /// Create a new record
    pub fn new(category: impl Into<String>, payload: Payload) -> Self {
        Self {
            category: category.into(),
            payload,
        }
    }
}
