use chrono::{DateTime, Duration, Utc};

/// Render an expiry timestamp the way the settings endpoint expects it:
/// millisecond precision with a literal `Z` suffix, e.g.
/// `2024-05-01T12:30:00.000Z`.
pub fn format_expiry(expires_at: DateTime<Utc>) -> String {
    format!("{}Z", expires_at.format("%Y-%m-%dT%H:%M:%S%.3f"))
}

/// Expiry for a chunk sent now: the iteration interval doubles as the
/// expiry offset, so a chunk lapses right as the next one lands.
pub fn expiry_after(now: DateTime<Utc>, seconds: u64) -> DateTime<Utc> {
    now + Duration::seconds(seconds as i64)
}
