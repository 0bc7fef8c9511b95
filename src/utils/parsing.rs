use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced while parsing structured free-text input from the user.
///
/// Every variant renders as a short human-readable message that is sent back
/// to the chat verbatim, prefixed with `Error:`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected {expected} numbers separated by spaces, got {got}")]
    TokenCount { expected: usize, got: usize },
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("{day}.{month}.{year} is not a valid calendar date")]
    InvalidDate { day: i64, month: i64, year: i64 },
    #[error("{0} is not a valid month (expected 1-12)")]
    InvalidMonth(i64),
    #[error("hours must be non-negative, got {0}")]
    NegativeHours(i64),
    #[error("expected two dates separated by a comma")]
    MissingRangeSeparator,
}

/// Parses `day month year hours` into a calendar date and a non-negative
/// hours count.
pub fn parse_add_entry(text: &str) -> Result<(NaiveDate, i64), ValidationError> {
    let numbers = parse_numbers(text, 4)?;
    let date = build_date(numbers[0], numbers[1], numbers[2])?;
    let hours = numbers[3];
    if hours < 0 {
        return Err(ValidationError::NegativeHours(hours));
    }
    Ok((date, hours))
}

/// Parses `day month year` into a calendar date.
pub fn parse_day_query(text: &str) -> Result<NaiveDate, ValidationError> {
    let numbers = parse_numbers(text, 3)?;
    build_date(numbers[0], numbers[1], numbers[2])
}

/// Parses `month year` into a `(year, month)` pair.
pub fn parse_month_query(text: &str) -> Result<(i32, u32), ValidationError> {
    let numbers = parse_numbers(text, 2)?;
    let (month, year) = (numbers[0], numbers[1]);
    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidMonth(month));
    }
    // Same year window as build_date, so month queries can never name a
    // year no entry could carry.
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ValidationError::InvalidDate {
            day: 1,
            month,
            year,
        });
    }
    Ok((year as i32, month as u32))
}

/// Parses two comma-separated `day month year` groups into a `(start, end)`
/// date pair. Ordering is not checked here; an inverted range simply sums to
/// zero downstream.
pub fn parse_range_query(text: &str) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    let mut groups = text.splitn(3, ',');
    let (Some(start), Some(end), None) = (groups.next(), groups.next(), groups.next()) else {
        return Err(ValidationError::MissingRangeSeparator);
    };
    Ok((parse_day_query(start)?, parse_day_query(end)?))
}

fn parse_numbers(text: &str, expected: usize) -> Result<Vec<i64>, ValidationError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(ValidationError::TokenCount {
            expected,
            got: tokens.len(),
        });
    }
    tokens
        .into_iter()
        .map(|t| {
            t.parse::<i64>()
                .map_err(|_| ValidationError::NotANumber(t.to_string()))
        })
        .collect()
}

// Calendar years the bot accepts. Chrono itself goes further in both
// directions, but ISO strings for years outside this window do not sort
// lexicographically, which would break the SQLite backend's BETWEEN and
// strftime queries.
const MIN_YEAR: i64 = 1;
const MAX_YEAR: i64 = 9999;

fn build_date(day: i64, month: i64, year: i64) -> Result<NaiveDate, ValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ValidationError::InvalidDate { day, month, year });
    }
    let (Ok(y), Ok(m), Ok(d)) = (
        i32::try_from(year),
        u32::try_from(month),
        u32::try_from(day),
    ) else {
        return Err(ValidationError::InvalidDate { day, month, year });
    };
    NaiveDate::from_ymd_opt(y, m, d).ok_or(ValidationError::InvalidDate { day, month, year })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_entry_valid() {
        let (date, hours) = parse_add_entry("1 1 2024 4").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(hours, 4);
    }

    #[test]
    fn test_parse_add_entry_extra_whitespace() {
        let (date, hours) = parse_add_entry("  15   2  2024   8 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        assert_eq!(hours, 8);
    }

    #[test]
    fn test_parse_add_entry_wrong_token_count() {
        assert_eq!(
            parse_add_entry("1 1 2024"),
            Err(ValidationError::TokenCount {
                expected: 4,
                got: 3
            })
        );
        assert_eq!(
            parse_add_entry("1 1 2024 4 9"),
            Err(ValidationError::TokenCount {
                expected: 4,
                got: 5
            })
        );
    }

    #[test]
    fn test_parse_add_entry_not_a_number() {
        assert_eq!(
            parse_add_entry("one 1 2024 4"),
            Err(ValidationError::NotANumber("one".to_string()))
        );
    }

    #[test]
    fn test_parse_add_entry_invalid_month() {
        // 13th month does not exist
        assert!(matches!(
            parse_add_entry("31 13 2024 5"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_parse_add_entry_impossible_day() {
        assert!(matches!(
            parse_add_entry("30 2 2024 5"),
            Err(ValidationError::InvalidDate { .. })
        ));
        // 2023 is not a leap year
        assert!(matches!(
            parse_add_entry("29 2 2023 5"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_parse_add_entry_rejects_years_outside_calendar_window() {
        // Negative and zero years have ISO encodings that do not sort
        // lexicographically, so they must never reach a store.
        assert!(matches!(
            parse_add_entry("2 1 -5 5"),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_add_entry("1 1 0 5"),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_add_entry("1 1 10000 5"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_parse_add_entry_accepts_year_window_bounds() {
        assert!(parse_add_entry("1 1 1 5").is_ok());
        assert!(parse_add_entry("31 12 9999 5").is_ok());
    }

    #[test]
    fn test_parse_day_query_rejects_years_outside_calendar_window() {
        assert!(matches!(
            parse_day_query("2 1 -5"),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_day_query("1 1 10000"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_parse_month_query_rejects_years_outside_calendar_window() {
        assert!(matches!(
            parse_month_query("1 -5"),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_month_query("1 0"),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_month_query("1 10000"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_parse_range_query_rejects_years_outside_calendar_window() {
        assert!(matches!(
            parse_range_query("1 1 -10, 31 12 -1"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_parse_add_entry_leap_day() {
        let (date, _) = parse_add_entry("29 2 2024 6").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_add_entry_negative_hours() {
        assert_eq!(
            parse_add_entry("1 1 2024 -3"),
            Err(ValidationError::NegativeHours(-3))
        );
    }

    #[test]
    fn test_parse_add_entry_zero_hours() {
        let (_, hours) = parse_add_entry("1 1 2024 0").unwrap();
        assert_eq!(hours, 0);
    }

    #[test]
    fn test_parse_day_query_valid() {
        let date = parse_day_query("24 12 2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 12, 24).unwrap());
    }

    #[test]
    fn test_parse_day_query_invalid() {
        assert!(parse_day_query("32 1 2024").is_err());
        assert!(parse_day_query("1 1").is_err());
        assert!(parse_day_query("").is_err());
    }

    #[test]
    fn test_parse_month_query_valid() {
        assert_eq!(parse_month_query("2 2024").unwrap(), (2024, 2));
        assert_eq!(parse_month_query("12 1999").unwrap(), (1999, 12));
    }

    #[test]
    fn test_parse_month_query_out_of_range() {
        assert_eq!(
            parse_month_query("13 2024"),
            Err(ValidationError::InvalidMonth(13))
        );
        assert_eq!(
            parse_month_query("0 2024"),
            Err(ValidationError::InvalidMonth(0))
        );
    }

    #[test]
    fn test_parse_range_query_valid() {
        let (start, end) = parse_range_query("1 1 2024, 28 2 2024").unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
    }

    #[test]
    fn test_parse_range_query_missing_comma() {
        assert_eq!(
            parse_range_query("1 1 2024 28 2 2024"),
            Err(ValidationError::MissingRangeSeparator)
        );
    }

    #[test]
    fn test_parse_range_query_too_many_groups() {
        assert_eq!(
            parse_range_query("1 1 2024, 2 1 2024, 3 1 2024"),
            Err(ValidationError::MissingRangeSeparator)
        );
    }

    #[test]
    fn test_parse_range_query_inverted_allowed() {
        // Ordering is intentionally not validated here
        let (start, end) = parse_range_query("28 2 2024, 1 1 2024").unwrap();
        assert!(start > end);
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        let err = parse_add_entry("31 13 2024 5").unwrap_err();
        assert_eq!(err.to_string(), "31.13.2024 is not a valid calendar date");
    }
}
