//! Event sinks
//!
//! A sink is a destination that receives event records. The capped local
//! log is the mandatory durable sink; an external analytics collaborator is
//! an optional, best-effort one. Both sit behind the same capability trait
//! so the tracker fans out without knowing what is registered.
//!
//! Sink failure is isolated at the dispatch point: a sink returning an error
//! is logged at debug level and skipped, and the remaining sinks still
//! receive the event. There is no ordering guarantee across sinks.

use crate::capped_log::CappedLog;
use beacon_core::{Payload, Result};
use tracing::debug;

/// Destination for event records
pub trait EventSink: Send + Sync {
    /// Deliver one event
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails. Dispatchers discard the error;
    /// implementations should not retry.
    fn emit(&self, category: &str, payload: &Payload) -> Result<()>;

    /// Name used in dispatch diagnostics
    fn name(&self) -> &'static str {
        "sink"
    }
}

/// The mandatory local sink: appends to a capped log
pub struct LogSink {
    log: CappedLog,
}

impl LogSink {
    /// Wrap a capped log as a sink
    pub fn new(log: CappedLog) -> Self {
        Self { log }
    }
}

impl EventSink for LogSink {
    fn emit(&self, category: &str, payload: &Payload) -> Result<()> {
        // CappedLog::append already swallows storage failures
        self.log.append(category, payload.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "capped_log"
    }
}

/// Optional external collaborator invoked as `(event_name, properties)`
///
/// The analog of a tag-manager global: registered when the embedder has an
/// analytics callback, simply absent otherwise. Delivery is fire-and-forget.
pub struct CallbackSink {
    callback: Box<dyn Fn(&str, &Payload) + Send + Sync>,
}

impl CallbackSink {
    /// Wrap a callback as a sink
    pub fn new(callback: impl Fn(&str, &Payload) + Send + Sync + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl EventSink for CallbackSink {
    fn emit(&self, category: &str, payload: &Payload) -> Result<()> {
        (self.callback)(category, payload);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "callback"
    }
}

/// Fan an event out to every sink, discarding per-sink failures
pub(crate) fn dispatch(sinks: &[Box<dyn EventSink>], category: &str, payload: &Payload) {
    for sink in sinks {
        if let Err(e) = sink.emit(category, payload) {
            debug!(sink = sink.name(), %category, error = %e, "sink emit discarded");
        }
    }
}
