//! Visitor environment snapshot
//!
//! The field set captured on arrival: browser/user-agent details, screen and
//! viewport geometry, referrer, and connectivity flags. Collected by the
//! embedder (this crate has no environment access of its own) and converted
//! to a payload for the `visitor_arrival` event.

use beacon_core::Payload;

/// Browser-environment fields reported with a visitor arrival
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisitorInfo {
    /// User agent string
    pub user_agent: String,
    /// Preferred language (e.g. `en-US`)
    pub language: String,
    /// Platform identifier
    pub platform: String,
    /// Physical screen size, `WxH`
    pub screen_size: String,
    /// Viewport size, `WxH`
    pub viewport_size: String,
    /// Referring URL; `None` is reported as `"Direct"`
    pub referrer: Option<String>,
    /// Current page URL
    pub url: String,
    /// IANA timezone name
    pub timezone: String,
    /// Whether cookies are enabled
    pub cookies_enabled: bool,
    /// Whether the browser reports itself online
    pub online: bool,
}

impl VisitorInfo {
    /// Convert to a payload
    pub fn to_payload(&self) -> Payload {
        Payload::new()
            .with("user_agent", self.user_agent.as_str())
            .with("language", self.language.as_str())
            .with("platform", self.platform.as_str())
            .with("screen_size", self.screen_size.as_str())
            .with("viewport_size", self.viewport_size.as_str())
            .with("referrer", self.referrer.as_deref().unwrap_or("Direct"))
            .with("url", self.url.as_str())
            .with("timezone", self.timezone.as_str())
            .with("cookies_enabled", self.cookies_enabled)
            .with("online_status", self.online)
    }
}
