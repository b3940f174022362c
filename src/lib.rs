//! Beacon - Capped local event log and session tracker for visitor analytics
//!
//! Beacon accepts typed event records from arbitrary callers, appends them to
//! a persisted ordered sequence under a single named storage slot, and
//! enforces a maximum retention count by discarding the oldest entries. On
//! top of the log, a session tracker produces the standard visitor events
//! (arrival, page view, project click, visibility change, form submit,
//! session end) and fans them out to the local log plus any registered
//! best-effort external sink.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use beacon::{CappedLog, MemorySlotStore, Payload, SessionTracker, SystemClock};
//!
//! // Persist events under one named slot
//! let store = Arc::new(MemorySlotStore::new());
//! let log = CappedLog::new(store, "portfolio_analytics");
//!
//! // Raw appends never fail the caller
//! log.append("page_view", Payload::new().with("page", "about"));
//!
//! // Or use the tracker for stamped, session-correlated events
//! let mut tracker = SessionTracker::new(log.clone(), Arc::new(SystemClock));
//! tracker.record_page_view("portfolio");
//!
//! assert_eq!(log.read_all().len(), 2);
//! ```
//!
//! # Architecture
//!
//! - [`beacon_core`] holds the data model ([`EventRecord`], [`Payload`],
//!   [`Scalar`]), session identity, and the [`SlotStore`] storage seam.
//! - [`beacon_storage`] provides the [`MemorySlotStore`] and
//!   [`FileSlotStore`] backends.
//! - [`beacon_telemetry`] provides the [`CappedLog`], the [`EventSink`]
//!   capability, and the [`SessionTracker`].
//!
//! The log is best-effort telemetry: storage failures are swallowed (with a
//! `tracing` warning), corrupt slots fail open to an empty sequence, and an
//! absent or failing external sink never affects the local append.

// Re-export the public API
pub use beacon_core::{
    Clock, Error, EventRecord, Payload, Result, Scalar, SessionId, SlotStore, SystemClock,
};
pub use beacon_storage::{FileSlotStore, MemorySlotStore};
pub use beacon_telemetry::{
    CallbackSink, CappedLog, EventSink, LogSink, ProjectButton, SessionTracker, VisitorInfo,
    DEFAULT_CAPACITY,
};
