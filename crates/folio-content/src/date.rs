//! Date handling for listing order.
//!
//! Frontmatter dates are free-form strings. Anything that does not parse
//! sorts as the Unix epoch, the same as a missing date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

// `%B` also accepts the abbreviated month name when parsing.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%B %d, %Y", "%d %B %Y"];

/// Parse a frontmatter date.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS[.fff]]`, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DD`, `June 1, 2024` / `Jun 1, 2024`, `1 June 2024`, `YYYY-MM`
/// and `YYYY`. Values without an offset are UTC.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    parse_partial(value)
}

/// `YYYY-MM` and `YYYY`.
fn parse_partial(value: &str) -> Option<DateTime<Utc>> {
    let mut parts = value.splitn(2, '-');
    let year_part = parts.next()?;
    if year_part.len() != 4 || !year_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year_part.parse().ok()?;
    let month: u32 = match parts.next() {
        Some(m) if !m.is_empty() && m.len() <= 2 && m.bytes().all(|b| b.is_ascii_digit()) => {
            m.parse().ok()?
        }
        Some(_) => return None,
        None => 1,
    };

    NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}

/// Milliseconds since the Unix epoch; 0 for missing or invalid dates.
pub fn sort_key(value: Option<&str>) -> i64 {
    value
        .and_then(parse_date)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}
