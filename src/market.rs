use chrono::DateTime;
use chrono::Datelike;
use chrono::Utc;
use chrono::Weekday;
use chrono_tz::Tz;

/// Whether the markets are considered open: Monday through Friday, strictly
/// between the two boundaries. Boundaries are zero-padded HHMM strings
/// compared lexicographically, so the window must fall within a single day;
/// there is no wraparound past midnight.
pub fn is_open(weekday: Weekday, hhmm: &str, start: &str, end: &str) -> bool {
    let on_weekday = !matches!(weekday, Weekday::Sat | Weekday::Sun);
    on_weekday && hhmm > start && hhmm < end
}

/// Same decision for a concrete instant, with the weekday and time of day
/// taken in the configured zone.
pub fn is_open_at(instant: DateTime<Utc>, timezone: Tz, start: &str, end: &str) -> bool {
    let local = instant.with_timezone(&timezone);
    let hhmm = local.format("%H%M").to_string();
    is_open(local.weekday(), &hhmm, start, end)
}
