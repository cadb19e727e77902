//! Field-level checks shared by the sale and auth forms

/// Minimal shape check: one '@' with a dotted domain after it
pub fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// True when `value` consists of exactly `len` ASCII digits
pub fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

/// Check minimum length in characters (not bytes)
pub fn min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@@b.co"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("plain"));
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("9876543210", 10));
        assert!(!is_digits("987654321", 10));
        assert!(!is_digits("98765x3210", 10));
    }

    #[test]
    fn test_min_chars() {
        assert!(min_chars("Ян", 2));
        assert!(!min_chars(" a ", 2));
    }
}
