//! Loose date/time parsing and canonical formatting.
//!
//! Ambiguous slash and dot dates are read month-first (`03/04/2021` is
//! March 4); the day-first reading is only tried when the month-first one
//! is impossible (`13/03/2021`).
//!
//! Dash-separated dates are the one day-first exception: `DD-MM-YYYY` is
//! the canonical output, so `01-02-2021` must read as 1 February for a
//! cleaned table to come back unchanged when cleaned again.
//!
//! A four-digit year pattern only matches a four-digit year in the input.
//! Two-digit years go through the `%y` forms (`03/04/21` is 4 March 2021,
//! `70..=99` land in the 1900s).

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use offer_common::column_strings;
use offer_model::ColumnKind;
use offer_model::schema::{EVENT_DT, EVENT_TS};

use crate::data_utils::string_column;
use crate::error::Result;
use crate::frame::EventFrame;

/// Output format of timestamp columns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Output format of the canonical date column.
pub const DATE_FORMAT: &str = "%d-%m-%Y";
/// Output format of the canonical time column.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Date anchoring time-only values when a full timestamp is needed.
pub fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d/%m/%y %H:%M:%S",
    "%d/%m/%y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%b-%Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
];

// Month-first slash and dot forms come before their day-first twins.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d-%m-%Y",
    "%m/%d/%Y",
    "%m.%d.%Y",
    "%m/%d/%y",
    "%m.%d.%y",
    "%m-%d-%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d/%m/%y",
    "%d.%m.%y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d %B, %Y",
    "%d-%b-%Y",
    "%b-%d-%Y",
    "%Y-%b-%d",
    "%A, %B %d, %Y",
    "%a, %d %b %Y",
    "%B %d, %y",
    "%b %d, %y",
    "%d %b %y",
];

const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M:%S",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
    "%I:%M:%S%p",
    "%I:%M%p",
    "%H%M%S",
];

/// Parse a full date and time.
fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(value, fmt)
            .ok()
            .filter(|dt| year_matches(value, fmt, dt.year()))
    })
}

/// Parse a calendar date, month-first.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let cleaned = normalize_text(value)?;
    if let Some(date) = parse_compact_date(&cleaned) {
        return Some(date);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| {
            NaiveDate::parse_from_str(&cleaned, fmt)
                .ok()
                .filter(|date| year_matches(&cleaned, fmt, date.year()))
        })
        .or_else(|| parse_datetime(&cleaned).map(|dt| dt.date()))
}

/// Parse a time of day, accepting full timestamps (time part kept) and
/// bare dates (midnight).
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let cleaned = normalize_text(value)?;
    let upper = cleaned.to_ascii_uppercase();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&upper, fmt).ok())
        .or_else(|| parse_datetime(&cleaned).map(|dt| dt.time()))
        .or_else(|| parse_date(&cleaned).map(|_| NaiveTime::MIN))
}

/// Parse a timestamp for a datetime column.
///
/// Dates without a time become midnight; times without a date are anchored
/// to [`epoch_date`].
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let cleaned = normalize_text(value)?;
    parse_datetime(&cleaned)
        .or_else(|| parse_date(&cleaned).map(|date| date.and_time(NaiveTime::MIN)))
        .or_else(|| {
            let upper = cleaned.to_ascii_uppercase();
            TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(&upper, fmt).ok())
                .map(|time| epoch_date().and_time(time))
        })
}

/// `DD-MM-YYYY`, or `None` if the value is not a date.
///
/// # Examples
///
/// ```
/// use offer_transform::datetime::canonical_date;
///
/// assert_eq!(canonical_date("March 3, 2021").as_deref(), Some("03-03-2021"));
/// assert_eq!(canonical_date("03/04/2021").as_deref(), Some("04-03-2021"));
/// assert_eq!(canonical_date("not a date"), None);
/// ```
pub fn canonical_date(value: &str) -> Option<String> {
    parse_date(value).map(|date| date.format(DATE_FORMAT).to_string())
}

/// `HH:MM:SS`, or `None` if the value is not a time.
pub fn canonical_time(value: &str) -> Option<String> {
    parse_time(value).map(|time| time.format(TIME_FORMAT).to_string())
}

/// `YYYY-MM-DD HH:MM:SS`, or `None` if the value is not a timestamp.
pub fn canonical_timestamp(value: &str) -> Option<String> {
    parse_timestamp(value).map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

/// chrono's `%Y` accepts one to four digits; only a literal four-digit
/// year counts.
fn year_matches(value: &str, fmt: &str, year: i32) -> bool {
    !fmt.contains("%Y")
        || value
            .split(|ch: char| !ch.is_ascii_digit())
            .any(|run| run.len() == 4 && run.parse::<i32>() == Ok(year))
}

/// Trim, collapse internal whitespace and drop ordinal suffixes (`3rd`).
fn normalize_text(value: &str) -> Option<String> {
    let words: Vec<String> = value.split_whitespace().map(strip_ordinal).collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn strip_ordinal(word: &str) -> String {
    let (body, trailer) = match word.strip_suffix(',') {
        Some(body) => (body, ","),
        None => (word, ""),
    };
    let lower = body.to_ascii_lowercase();
    for suffix in ["st", "nd", "rd", "th"] {
        if let Some(digits) = lower.strip_suffix(suffix)
            && !digits.is_empty()
            && digits.chars().all(|ch| ch.is_ascii_digit())
        {
            return format!("{digits}{trailer}");
        }
    }
    word.to_string()
}

/// `YYYYMMDD` with exactly eight digits.
fn parse_compact_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let year = value.get(0..4)?.parse().ok()?;
    let month = value.get(4..6)?.parse().ok()?;
    let day = value.get(6..8)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Failing cells logged per column.
const SAMPLE_LIMIT: usize = 5;
const REDACTED_VALUE: &str = "[REDACTED]";

/// Output of the date/time canonicalization stage.
#[derive(Debug, Clone)]
pub struct Canonicalized {
    pub frame: EventFrame,
    /// Cells per column that could not be parsed and were set to null.
    pub failures: BTreeMap<String, usize>,
}

/// Reformat `event_dt` to `DD-MM-YYYY` and `event_ts` to `HH:MM:SS`.
///
/// Unparseable cells become null and stay null. Up to a few failing values
/// per column are logged at debug level, redacted unless `log_data` is set.
///
/// # Errors
///
/// Returns an error if a rebuilt column cannot be put back into the frame.
pub fn canonicalize_datetimes(mut frame: EventFrame, log_data: bool) -> Result<Canonicalized> {
    let mut failures = BTreeMap::new();
    let targets: [(&str, fn(&str) -> Option<String>); 2] =
        [(EVENT_DT, canonical_date), (EVENT_TS, canonical_time)];

    for (name, canonical) in targets {
        let Ok(source) = frame.data.column(name) else {
            debug!(column = name, "date/time column absent");
            continue;
        };
        let mut failed = 0usize;
        let values: Vec<Option<String>> = column_strings(source)
            .into_iter()
            .map(|cell| {
                let raw = cell?;
                let parsed = canonical(&raw);
                if parsed.is_none() {
                    failed += 1;
                    if failed <= SAMPLE_LIMIT {
                        let sample = if log_data { raw.as_str() } else { REDACTED_VALUE };
                        debug!(column = name, value = sample, "unparseable date/time");
                    }
                }
                parsed
            })
            .collect();
        frame.data.with_column(string_column(name, values))?;
        frame.kinds.insert(name.to_string(), ColumnKind::String);
        failures.insert(name.to_string(), failed);
    }

    Ok(Canonicalized { frame, failures })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_parse() {
        assert_eq!(canonical_date("March 3, 2021").as_deref(), Some("03-03-2021"));
        assert_eq!(canonical_date("Mar 3 2021").as_deref(), Some("03-03-2021"));
        assert_eq!(canonical_date("3 March 2021").as_deref(), Some("03-03-2021"));
        assert_eq!(canonical_date("March 3rd, 2021").as_deref(), Some("03-03-2021"));
        assert_eq!(canonical_date("03-Mar-2021").as_deref(), Some("03-03-2021"));
    }

    #[test]
    fn numeric_dates_prefer_month_first() {
        assert_eq!(canonical_date("03/04/2021").as_deref(), Some("04-03-2021"));
        assert_eq!(canonical_date("13/03/2021").as_deref(), Some("13-03-2021"));
        assert_eq!(canonical_date("2021-03-04").as_deref(), Some("04-03-2021"));
        assert_eq!(canonical_date("20210304").as_deref(), Some("04-03-2021"));
        assert_eq!(canonical_date("12-25-2021").as_deref(), Some("25-12-2021"));
    }

    #[test]
    fn two_digit_years_read_month_first() {
        assert_eq!(canonical_date("03/04/21").as_deref(), Some("04-03-2021"));
        assert_eq!(canonical_date("3/4/21").as_deref(), Some("04-03-2021"));
        assert_eq!(canonical_date("13/03/21").as_deref(), Some("13-03-2021"));
        assert_eq!(canonical_date("Mar 3, 21").as_deref(), Some("03-03-2021"));
        assert_eq!(canonical_date("12/31/99").as_deref(), Some("31-12-1999"));
        assert_eq!(
            canonical_timestamp("03/04/21 10:00").as_deref(),
            Some("2021-03-04 10:00:00")
        );
    }

    #[test]
    fn short_year_tokens_never_match_four_digit_patterns() {
        assert!(!year_matches("3/4/21", "%Y/%m/%d", 3));
        assert!(!year_matches("03/04/21", "%m/%d/%Y", 21));
        assert!(year_matches("03/04/2021", "%m/%d/%Y", 2021));
        assert!(year_matches("03/04/21", "%m/%d/%y", 2021));
    }

    #[test]
    fn dash_dates_read_day_first() {
        assert_eq!(canonical_date("01-02-2021").as_deref(), Some("01-02-2021"));
    }

    #[test]
    fn timestamps_keep_their_date() {
        assert_eq!(
            canonical_date("2021-03-04 10:15:00").as_deref(),
            Some("04-03-2021")
        );
        assert_eq!(
            canonical_date("2021-03-04T10:15:00Z").as_deref(),
            Some("04-03-2021")
        );
    }

    #[test]
    fn unparseable_dates_are_none() {
        assert_eq!(canonical_date("not a date"), None);
        assert_eq!(canonical_date("Unknown"), None);
        assert_eq!(canonical_date("   "), None);
        assert_eq!(canonical_date("02/30/2021"), None);
    }

    #[test]
    fn times_parse_to_twenty_four_hour() {
        assert_eq!(canonical_time("14:05:09").as_deref(), Some("14:05:09"));
        assert_eq!(canonical_time("14:05").as_deref(), Some("14:05:00"));
        assert_eq!(canonical_time("2:05 pm").as_deref(), Some("14:05:00"));
        assert_eq!(canonical_time("14:05:09.250").as_deref(), Some("14:05:09"));
        assert_eq!(
            canonical_time("2021-03-04 07:08:09").as_deref(),
            Some("07:08:09")
        );
        assert_eq!(canonical_time("2021-03-04").as_deref(), Some("00:00:00"));
        assert_eq!(canonical_time("noon-ish"), None);
    }

    #[test]
    fn timestamps_anchor_times_to_epoch() {
        assert_eq!(
            canonical_timestamp("14:05:09").as_deref(),
            Some("2000-01-01 14:05:09")
        );
        assert_eq!(
            canonical_timestamp("March 3, 2021").as_deref(),
            Some("2021-03-03 00:00:00")
        );
        assert_eq!(canonical_timestamp("yesterday"), None);
    }

    #[test]
    fn canonical_outputs_are_fixed_points() {
        for value in ["04-03-2021", "13-03-2021", "31-12-1999"] {
            assert_eq!(canonical_date(value).as_deref(), Some(value));
        }
        for value in ["00:00:00", "23:59:59"] {
            assert_eq!(canonical_time(value).as_deref(), Some(value));
        }
        let stamp = "2000-01-01 14:05:09";
        assert_eq!(canonical_timestamp(stamp).as_deref(), Some(stamp));
    }
}
