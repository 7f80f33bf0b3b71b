use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::ExtractError;

/// `M/D/YYYY` → `YYYY-MM-DD`. Month and day are zero-padded; the year is
/// kept as written.
pub fn parse_date(raw: &str) -> Result<String, ExtractError> {
    let malformed = || ExtractError::MalformedDate(raw.to_string());

    let parts: Vec<&str> = raw.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(malformed());
    };

    let month: u32 = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;
    if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    Ok(format!("{}-{:02}-{:02}", year, month, day))
}

/// Whether `weekday` is the calendar weekday of an ISO date.
/// `None` when the date is not a real calendar day (e.g. 2/30).
pub fn weekday_matches(iso: &str, weekday: Weekday) -> Option<bool> {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .map(|d| d.weekday() == weekday)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_month_and_day() {
        assert_eq!(parse_date("3/4/2026").unwrap(), "2026-03-04");
        assert_eq!(parse_date("12/25/1999").unwrap(), "1999-12-25");
        assert_eq!(parse_date("1/1/2000").unwrap(), "2000-01-01");
    }

    #[test]
    fn already_padded() {
        assert_eq!(parse_date("03/04/2026").unwrap(), "2026-03-04");
    }

    #[test]
    fn wrong_field_count() {
        assert!(matches!(parse_date("2026/3/4/1"), Err(ExtractError::MalformedDate(s)) if s == "2026/3/4/1"));
        assert!(matches!(parse_date("3/4"), Err(ExtractError::MalformedDate(_))));
        assert!(matches!(parse_date(""), Err(ExtractError::MalformedDate(_))));
    }

    #[test]
    fn non_numeric_fields() {
        assert!(parse_date("March/4/2026").is_err());
        assert!(parse_date("3//2026").is_err());
        assert!(parse_date("3/4/20x6").is_err());
        assert!(parse_date("3/4/").is_err());
    }

    #[test]
    fn out_of_range_values_pass_through() {
        // Only the shape is checked; calendar validity is a separate diagnostic.
        assert_eq!(parse_date("13/40/2026").unwrap(), "2026-13-40");
    }

    #[test]
    fn weekday_check() {
        // 2026-03-02 is a Monday.
        assert_eq!(weekday_matches("2026-03-02", Weekday::Mon), Some(true));
        assert_eq!(weekday_matches("2026-03-02", Weekday::Tue), Some(false));
        assert_eq!(weekday_matches("2026-02-30", Weekday::Mon), None);
    }
}
