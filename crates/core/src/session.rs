//! Session identity and time source
//!
//! This module defines:
//! - SessionId: Opaque token correlating events from one browsing visit
//! - Clock: Injected time source trait
//! - SystemClock: Wall-clock implementation
//!
//! The clock is an explicit input everywhere a timestamp is produced. There
//! is no ambient global time state; tests inject a manual clock and get
//! deterministic timestamps.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the random suffix in a generated session token
const TOKEN_SUFFIX_LEN: usize = 9;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Time source for session tracking
///
/// Implementations must be safe to share across threads.
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Opaque token identifying a single browsing visit
///
/// Generated tokens have the form `session_<epoch_millis>_<9 base36 chars>`,
/// unique enough to correlate the events of one visitor interaction window.
/// Callers with their own identity scheme can wrap any non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh session token from the given clock
    pub fn generate(clock: &dyn Clock) -> Self {
        let millis = clock.now().timestamp_millis();
        let mut rng = rand::thread_rng();
        let suffix: String = (0..TOKEN_SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("session_{}_{}", millis, suffix))
    }

    /// Wrap a caller-provided token
    ///
    /// Returns None if the string is empty.
    pub fn from_string(s: impl Into<String>) -> Option<Self> {
        let s = s.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// The token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
