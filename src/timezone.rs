//! Resolving the configured display timezone to a UTC offset.

use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// The canonical timezone name used for display when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Europe/Chisinau";

/// Get the current UTC offset for `canonical_timezone`, e.g. "Europe/Chisinau".
///
/// Returns `None` if the name does not refer to a known timezone.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}
