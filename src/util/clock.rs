//! Wall-clock timestamps for new and seeded incidents.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Timestamp used when no browser clock is available.
pub const FALLBACK_TIMESTAMP: &str = "1970-01-01T00:00:00.000Z";

/// Current time as an ISO-8601 string, e.g. `2024-05-01T10:00:00.000Z`.
pub fn now_iso() -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_TIMESTAMP.to_owned()
    }
}
