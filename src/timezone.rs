//! Conversions between canonical timezone names and local dates.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's date in `canonical_timezone`, e.g. "Pacific/Auckland".
///
/// # Errors
/// Returns [Error::InvalidTimezone] if `canonical_timezone` is not a known timezone.
pub fn local_today(canonical_timezone: &str) -> Result<Date, Error> {
    let local_offset = get_local_offset(canonical_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", canonical_timezone);
        Error::InvalidTimezone(canonical_timezone.to_owned())
    })?;

    Ok(OffsetDateTime::now_utc().to_offset(local_offset).date())
}
