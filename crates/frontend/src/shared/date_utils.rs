//! Utilities for date formatting
//!
//! Provides consistent date formatting across the application

use chrono::NaiveDate;

use contracts::domain::a001_sale::parse_sale_date;

/// Format a sale date for tables
/// Example: "2024-03-15" or "2024-03-15T14:02:26.123Z" -> "15 Mar 2024"
pub fn format_date(date_str: &str) -> String {
    match parse_sale_date(date_str) {
        Some(date) => format_naive(date),
        None => date_str.to_string(),
    }
}

pub fn format_naive(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Current date in the browser's clock (UTC)
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }
}
