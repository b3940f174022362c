//! SessionTracker: producer of visitor events
//!
//! An explicitly constructed tracker instance. The session identifier and
//! the clock are inputs; there is no process-wide tracker state. Every
//! producer stamps the payload with `session_id` and an RFC 3339 `timestamp`
//! and fans it out to the registered sinks, local capped log first.

use crate::capped_log::CappedLog;
use crate::sink::{dispatch, EventSink, LogSink};
use crate::visitor::VisitorInfo;
use beacon_core::{Clock, Payload, SessionId};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Which project button was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectButton {
    /// A link to the running project
    LiveDemo,
    /// A link to the source repository
    ViewCode,
}

impl ProjectButton {
    /// The wire value reported in the `button_type` field
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectButton::LiveDemo => "live_demo",
            ProjectButton::ViewCode => "view_code",
        }
    }
}

/// Per-visit event producer
///
/// Owns the session token, the time bookkeeping (session start and current
/// page entry), and the sink list. The local capped log is always the first
/// sink; external sinks are optional extras.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use beacon_core::SystemClock;
/// use beacon_storage::MemorySlotStore;
/// use beacon_telemetry::{CappedLog, SessionTracker};
///
/// let store = Arc::new(MemorySlotStore::new());
/// let log = CappedLog::new(store, "portfolio_analytics");
/// let mut tracker = SessionTracker::new(log.clone(), Arc::new(SystemClock));
///
/// tracker.record_page_view("about");
/// assert_eq!(log.read_all()[0].category, "page_view");
/// ```
pub struct SessionTracker {
    session: SessionId,
    clock: Arc<dyn Clock>,
    started_at: DateTime<Utc>,
    page_entered_at: DateTime<Utc>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl SessionTracker {
    /// Create a tracker with a freshly generated session token
    pub fn new(log: CappedLog, clock: Arc<dyn Clock>) -> Self {
        let session = SessionId::generate(clock.as_ref());
        Self::with_session(log, clock, session)
    }

    /// Create a tracker for an existing session token
    pub fn with_session(log: CappedLog, clock: Arc<dyn Clock>, session: SessionId) -> Self {
        let now = clock.now();
        Self {
            session,
            clock,
            started_at: now,
            page_entered_at: now,
            sinks: vec![Box::new(LogSink::new(log))],
        }
    }

    /// Register an additional best-effort sink
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Builder-style variant of [`add_sink`](Self::add_sink)
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// The session token events are stamped with
    pub fn session_id(&self) -> &SessionId {
        &self.session
    }

    /// Record the visitor's arrival with a full environment snapshot
    pub fn record_arrival(&self, info: &VisitorInfo) {
        let mut payload = info.to_payload();
        self.stamp(&mut payload);
        dispatch(&self.sinks, "visitor_arrival", &payload);
    }

    /// Record a navigation to `page`, resetting the page timer
    ///
    /// Reports how long the previous page was open in `time_on_previous_page`
    /// (milliseconds).
    pub fn record_page_view(&mut self, page: &str) {
        let now = self.clock.now();
        let elapsed = (now - self.page_entered_at).num_milliseconds();

        let mut payload = Payload::new()
            .with("action", "page_view")
            .with("page", page)
            .with("time_on_previous_page", elapsed);
        self.stamp(&mut payload);
        dispatch(&self.sinks, "page_view", &payload);

        self.page_entered_at = now;
    }

    /// Record a click on a project card button
    pub fn record_project_click(&self, project: &str, button: ProjectButton, url: &str) {
        let mut payload = Payload::new()
            .with("action", "project_interaction")
            .with("project_name", project)
            .with("button_type", button.as_str())
            .with("url", url);
        self.stamp(&mut payload);
        dispatch(&self.sinks, "project_click", &payload);
    }

    /// Record the tab being hidden or shown
    pub fn record_visibility_change(&self, hidden: bool) {
        let action = if hidden { "tab_hidden" } else { "tab_visible" };
        let mut payload = Payload::new().with("action", action);
        self.stamp(&mut payload);
        dispatch(&self.sinks, "visibility_change", &payload);
    }

    /// Record a contact form submission
    pub fn record_form_submit(&self) {
        let mut payload = Payload::new().with("action", "contact_form_submit");
        self.stamp(&mut payload);
        dispatch(&self.sinks, "form_submit", &payload);
    }

    /// Record the end of the visit with the total time spent (milliseconds)
    pub fn record_session_end(&self) {
        let total = (self.clock.now() - self.started_at).num_milliseconds();
        let mut payload = Payload::new()
            .with("action", "session_end")
            .with("total_time_spent", total);
        self.stamp(&mut payload);
        dispatch(&self.sinks, "session_end", &payload);
    }

    fn stamp(&self, payload: &mut Payload) {
        payload.insert("session_id", self.session.as_str());
        payload.insert("timestamp", self.clock.now().to_rfc3339());
    }
}
