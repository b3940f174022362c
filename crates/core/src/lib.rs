//! Core types and traits for Beacon
//!
//! This crate defines the foundational types used throughout the system:
//! - Scalar: Closed set of primitive payload value kinds
//! - Payload: String-keyed mapping of scalars (schema-less by design)
//! - EventRecord: One logged occurrence (category + payload)
//! - SessionId: Opaque token correlating events from one visit
//! - Clock: Injected time source (no ambient global clock)
//! - SlotStore: Storage seam for the persisted event sequence
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod scalar;
pub mod session;
pub mod traits;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use record::EventRecord;
pub use scalar::{Payload, Scalar};
pub use session::{Clock, SessionId, SystemClock};
pub use traits::SlotStore;
