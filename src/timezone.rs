//! Resolving the current calendar date in a configured timezone.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// The UTC offset currently in effect for a canonical timezone name such as
/// "Pacific/Auckland", or `None` if the name is unknown.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's date in `canonical_timezone`, used as "now" for deadline buckets.
///
/// # Errors
///
/// Returns [Error::InvalidTimezone] if the timezone name is unknown.
pub fn today_in(canonical_timezone: &str) -> Result<Date, Error> {
    let offset = get_local_offset(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezone(canonical_timezone.to_owned()))?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}

#[cfg(test)]
mod tests {
    use super::{get_local_offset, today_in};
    use crate::Error;

    #[test]
    fn utc_has_a_zero_offset() {
        assert_eq!(get_local_offset("UTC").map(|offset| offset.is_utc()), Some(true));
    }

    #[test]
    fn unknown_timezones_are_rejected() {
        assert_eq!(get_local_offset("Mars/Olympus_Mons"), None);
        assert_eq!(
            today_in("Mars/Olympus_Mons"),
            Err(Error::InvalidTimezone("Mars/Olympus_Mons".to_owned()))
        );
    }

    #[test]
    fn today_in_a_known_timezone_is_close_to_today_in_utc() {
        let utc_today = time::OffsetDateTime::now_utc().date();
        let local_today = today_in("Pacific/Auckland").unwrap();

        assert!((local_today - utc_today).whole_days().abs() <= 1);
    }
}
