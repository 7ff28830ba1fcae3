use anyhow::{Result, bail};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::fmt::Write;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond: 0,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse a front-matter date.
    ///
    /// Fast path covers "YYYY-MM-DD", "YYYY-MM-DDTHH:MM:SS" (also with a space
    /// separator) and "YYYY-MM-DDTHH:MM:SSZ". Anything else is handed to the
    /// RFC 3339 parser, which handles offsets and fractional seconds.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        // Parse date part
        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        let (hour, minute, second) = match bytes.len() {
            10 => (0, 0, 0),
            19 | 20 if matches!(bytes[10], b'T' | b' ') && (bytes.len() == 19 || bytes[19] == b'Z') => {
                if bytes[13] != b':' || bytes[16] != b':' {
                    return None;
                }
                (
                    parse_u8(&bytes[11..13])?,
                    parse_u8(&bytes[14..16])?,
                    parse_u8(&bytes[17..19])?,
                )
            }
            _ => return Self::parse_rfc3339(s),
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    /// Parse RFC 3339 with offset, normalized to UTC.
    fn parse_rfc3339(s: &str) -> Option<Self> {
        let utc = DateTime::parse_from_rfc3339(s).ok()?.naive_utc();
        Self::from_naive(&utc)
    }

    fn from_naive(dt: &NaiveDateTime) -> Option<Self> {
        let year = u16::try_from(dt.year()).ok()?;
        let parsed = Self {
            year,
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            // Leap seconds are folded into the last regular second
            second: dt.second().min(59) as u8,
            millisecond: (dt.nanosecond() / 1_000_000).min(999) as u16,
        };
        parsed.validate().ok()?;
        Some(parsed)
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }
        if millisecond > 999 {
            bail!("millisecond is invalid: {millisecond}");
        }

        Ok(())
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Milliseconds since the Unix epoch. Negative before 1970.
    pub fn timestamp_millis(&self) -> i64 {
        let days = days_from_civil(self.year, self.month, self.day);
        let secs = i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second);
        days * MILLIS_PER_DAY + secs * 1000 + i64::from(self.millisecond)
    }

    /// Format with a strftime pattern (see [`is_valid_format`]).
    ///
    /// Rendered as a UTC datetime, so `%z` gives `+0000` and `%Z` gives `UTC`.
    /// Returns `None` for patterns chrono cannot render.
    pub fn format(&self, pattern: &str) -> Option<String> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )?;
        let dt = date
            .and_hms_milli_opt(
                u32::from(self.hour),
                u32::from(self.minute),
                u32::from(self.second),
                u32::from(self.millisecond),
            )?
            .and_utc();

        // `DelayedFormat` reports unknown items as `fmt::Error`; `to_string` would panic
        let mut out = String::new();
        write!(out, "{}", dt.format(pattern)).ok()?;
        Some(out)
    }
}

/// Check that a strftime pattern renders.
///
/// The pattern is trial-rendered against a fixed date, which catches unknown
/// specifiers as well as anything chrono refuses at format time.
pub fn is_valid_format(pattern: &str) -> bool {
    DateTimeUtc::from_ymd(2000, 1, 1).format(pattern).is_some()
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: u16, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Parsing
    // ========================================================================

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2020-02-16").unwrap();
        assert_eq!(dt, DateTimeUtc::from_ymd(2020, 2, 16));
    }

    #[test]
    fn test_parse_with_time_variants() {
        let expected = DateTimeUtc::new(2019, 11, 14, 8, 30, 5);
        assert_eq!(DateTimeUtc::parse("2019-11-14T08:30:05"), Some(expected));
        assert_eq!(DateTimeUtc::parse("2019-11-14 08:30:05"), Some(expected));
        assert_eq!(DateTimeUtc::parse("2019-11-14T08:30:05Z"), Some(expected));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            DateTimeUtc::parse("  2020-02-16\n"),
            Some(DateTimeUtc::from_ymd(2020, 2, 16))
        );
    }

    #[test]
    fn test_parse_offset_normalized_to_utc() {
        let dt = DateTimeUtc::parse("2020-02-16T10:00:00+08:00").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2020, 2, 16, 2, 0, 0));
    }

    #[test]
    fn test_parse_offset_crossing_day_boundary() {
        let dt = DateTimeUtc::parse("2020-03-01T01:00:00+02:00").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2020, 2, 29, 23, 0, 0));
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let dt = DateTimeUtc::parse("2020-02-16T00:00:00.250Z").unwrap();
        assert_eq!(dt.millisecond, 250);
        assert_eq!(dt.timestamp_millis(), 1_581_811_200_250);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(DateTimeUtc::parse(""), None);
        assert_eq!(DateTimeUtc::parse("yesterday"), None);
        assert_eq!(DateTimeUtc::parse("2020/02/16"), None);
        assert_eq!(DateTimeUtc::parse("2020-2-16"), None);
        assert_eq!(DateTimeUtc::parse("2020-02-16T10"), None);
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_dates() {
        assert_eq!(DateTimeUtc::parse("2020-13-01"), None);
        assert_eq!(DateTimeUtc::parse("2019-02-29"), None);
        assert_eq!(DateTimeUtc::parse("2020-04-31"), None);
        assert_eq!(DateTimeUtc::parse("2020-02-16T24:00:00"), None);
        assert!(DateTimeUtc::parse("2020-02-29").is_some());
    }

    // ========================================================================
    // Validation
    // ========================================================================

    #[test]
    fn test_datetime_utc_validate_leap_year() {
        assert!(DateTimeUtc::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2000, 2, 29, 12, 0, 0).validate().is_ok()); // divisible by 400
        assert!(DateTimeUtc::new(2023, 2, 29, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(1900, 2, 29, 12, 0, 0).validate().is_err()); // divisible by 100 but not 400
    }

    #[test]
    fn test_datetime_utc_validate_invalid_fields() {
        assert!(DateTimeUtc::new(2024, 0, 15, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 0, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 30, 60).validate().is_err());
    }

    // ========================================================================
    // Timestamps
    // ========================================================================

    #[test]
    fn test_timestamp_epoch() {
        assert_eq!(DateTimeUtc::from_ymd(1970, 1, 1).timestamp_millis(), 0);
        assert_eq!(DateTimeUtc::from_ymd(1970, 1, 2).timestamp_millis(), MILLIS_PER_DAY);
        assert_eq!(DateTimeUtc::from_ymd(1969, 12, 31).timestamp_millis(), -MILLIS_PER_DAY);
    }

    #[test]
    fn test_timestamp_known_dates() {
        assert_eq!(DateTimeUtc::from_ymd(2020, 2, 16).timestamp_millis(), 1_581_811_200_000);
        assert_eq!(DateTimeUtc::from_ymd(2019, 11, 14).timestamp_millis(), 1_573_689_600_000);
        assert_eq!(
            DateTimeUtc::new(2020, 2, 16, 2, 0, 0).timestamp_millis(),
            1_581_818_400_000
        );
    }

    #[test]
    fn test_timestamp_is_monotonic_across_month_ends() {
        let feb_end = DateTimeUtc::new(2020, 2, 29, 23, 59, 59).timestamp_millis();
        let mar_start = DateTimeUtc::from_ymd(2020, 3, 1).timestamp_millis();
        assert_eq!(mar_start - feb_end, 1000);
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    #[test]
    fn test_format_default_pattern() {
        let dt = DateTimeUtc::from_ymd(2020, 2, 16);
        assert_eq!(dt.format("%B %-d, %Y").as_deref(), Some("February 16, 2020"));
        assert_eq!(dt.format("%Y-%m-%d").as_deref(), Some("2020-02-16"));
    }

    #[test]
    fn test_format_invalid_pattern() {
        assert!(!is_valid_format("%Y %"));
        assert_eq!(DateTimeUtc::from_ymd(2020, 2, 16).format("%Y %"), None);
        assert!(is_valid_format("%b %e, %Y"));
    }

    #[test]
    fn test_format_offset_specifiers_render_as_utc() {
        let dt = DateTimeUtc::new(2020, 2, 16, 2, 0, 0);
        assert!(is_valid_format("%Y-%m-%d %z"));
        assert_eq!(dt.format("%Y-%m-%d %z").as_deref(), Some("2020-02-16 +0000"));
        assert_eq!(dt.format("%H:%M %Z").as_deref(), Some("02:00 UTC"));
        assert_eq!(dt.format("%:z").as_deref(), Some("+00:00"));
    }
}
