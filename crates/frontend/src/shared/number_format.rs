//! Number formatting for metric cards and tables

/// Placeholder for values that cannot be computed (e.g. average of nothing)
pub const NOT_AVAILABLE: &str = "—";

/// Thousands separated with spaces: 1234567 -> "1 234 567"
pub fn format_int(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Up to `decimals` places without trailing zeros: 2.50 -> "2.5", 3.0 -> "3"
pub fn format_decimal(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format_decimal(v, decimals))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Share of `part` in `total` as a bar width, 0..=100
pub fn bar_percent(part: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (part as f64 / max as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(0), "0");
        assert_eq!(format_int(999), "999");
        assert_eq!(format_int(1000), "1 000");
        assert_eq!(format_int(1234567), "1 234 567");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(2.5, 2), "2.5");
        assert_eq!(format_decimal(3.0, 2), "3");
        assert_eq!(format_decimal(3.456, 2), "3.46");
        assert_eq!(format_decimal(f64::NAN, 2), NOT_AVAILABLE);
        assert_eq!(format_decimal(f64::INFINITY, 1), NOT_AVAILABLE);
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None, 2), NOT_AVAILABLE);
        assert_eq!(format_optional(Some(1.25), 2), "1.25");
    }

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(5, 0), 0.0);
        assert_eq!(bar_percent(5, 10), 50.0);
        assert_eq!(bar_percent(10, 10), 100.0);
    }
}
