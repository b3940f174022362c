//! Telemetry layer for Beacon
//!
//! Provides the capped event log and the session tracker on top of it:
//! - **CappedLog**: Append-only event sequence persisted under one storage
//!   slot, trimmed FIFO to a fixed capacity
//! - **EventSink**: Capability trait for event destinations
//! - **LogSink** / **CallbackSink**: The mandatory local sink and the
//!   optional best-effort external collaborator
//! - **SessionTracker**: Explicitly constructed producer of visitor events
//!
//! ## Design Principle: Never Break the Caller
//!
//! The log is best-effort telemetry. Appends either complete or are silently
//! dropped (with a `tracing` warning); reads fail open to an empty sequence.
//! No error from this layer ever reaches the calling flow.
//!
//! ## Single Writer Per Slot
//!
//! The stored sequence is read-then-written non-atomically. One writer per
//! slot is assumed; concurrent writers get last-writer-wins.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capped_log;
pub mod sink;
pub mod tracker;
pub mod visitor;

pub use capped_log::{CappedLog, DEFAULT_CAPACITY};
pub use sink::{CallbackSink, EventSink, LogSink};
pub use tracker::{ProjectButton, SessionTracker};
pub use visitor::VisitorInfo;
