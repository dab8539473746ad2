use chrono::DateTime;
use chrono_tz::Tz;

/// Placeholder for times that cannot be rendered.
pub const UNAVAILABLE: &str = "N/A";

/// Render a unix timestamp as 12-hour wall-clock time in `timezone`, e.g.
/// `6:42 AM`.
///
/// An empty zone name means UTC. Unknown zone names and out-of-range
/// timestamps give [`UNAVAILABLE`] instead of an error.
pub fn format_local_time(timestamp: i64, timezone: &str) -> String {
    let Some(tz) = resolve_zone(timezone) else {
        tracing::debug!(timezone, "unknown timezone");
        return UNAVAILABLE.to_string();
    };

    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => utc.with_timezone(&tz).format("%-I:%M %p").to_string(),
        None => UNAVAILABLE.to_string(),
    }
}

fn resolve_zone(timezone: &str) -> Option<Tz> {
    if timezone.is_empty() {
        return Some(Tz::UTC);
    }
    timezone.parse().ok()
}
