/// Utilities for date and time formatting
use chrono::{NaiveDate, Utc};

/// Format ISO datetime string to YYYY-MM-DD HH:MM:SS
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    match datetime_str.split_once('T') {
        Some((date_part, time_part)) if date_part.len() == 10 => {
            let time = time_part
                .split(['.', 'Z', '+'])
                .next()
                .unwrap_or(time_part);
            format!("{} {}", date_part, time)
        }
        _ => datetime_str.to_string(),
    }
}

/// Date part of an ISO value; anything else is returned unchanged.
/// Example: "2024-03-15T14:02:26Z" -> "2024-03-15"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%Y-%m-%d").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// "Jan 2025" style header for a `YYYY-MM` month key.
pub fn format_month_key(month_key: &str) -> String {
    NaiveDate::parse_from_str(&format!("{month_key}-01"), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| month_key.to_string())
}

/// "06 Jan" style header for a weekly bucket date.
pub fn format_bucket_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%d %b").to_string())
        .unwrap_or_else(|_| date.to_string())
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "2024-03-15 14:02:26");
        assert_eq!(format_datetime("2024-12-31T23:59:59+07:00"), "2024-12-31 23:59:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
    }

    #[test]
    fn test_matrix_headers() {
        assert_eq!(format_month_key("2025-01"), "Jan 2025");
        assert_eq!(format_bucket_date("2025-01-06"), "06 Jan");
        assert_eq!(format_month_key("bad"), "bad");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
