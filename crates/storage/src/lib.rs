//! Storage backends for Beacon
//!
//! Implementations of the `SlotStore` trait from `beacon-core`:
//! - **MemorySlotStore**: In-process map behind a lock. For tests and
//!   short-lived embedders that do not need persistence.
//! - **FileSlotStore**: One JSON file per slot under a root directory,
//!   written with the write-then-rename pattern for crash safety.
//!
//! Both backends are swappable behind `Arc<dyn SlotStore>`; the log layer
//! never depends on a concrete backend.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file;
pub mod memory;

pub use file::FileSlotStore;
pub use memory::MemorySlotStore;
