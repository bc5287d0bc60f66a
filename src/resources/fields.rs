//! Form value conversion shared by the resources.

use crate::error::FieldErrors;

/// Parse a required number, recording a message under `key` on failure.
pub fn required<N: std::str::FromStr>(
    errors: &mut FieldErrors,
    key: &str,
    label: &str,
    value: &str,
) -> Option<N> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(key, format!("{label} is required."));
        return None;
    }
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.push(key, format!("{label} must be a whole number."));
            None
        }
    }
}

/// Parse an optional number; blank means absent.
pub fn optional<N: std::str::FromStr>(
    errors: &mut FieldErrors,
    key: &str,
    label: &str,
    value: &str,
) -> Option<N> {
    if value.trim().is_empty() {
        None
    } else {
        required(errors, key, label, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let mut errors = FieldErrors::new();
        assert_eq!(required::<i32>(&mut errors, "foundedYear", "Founded Year", " 1789 "), Some(1789));
        assert!(errors.is_empty());

        assert_eq!(required::<i32>(&mut errors, "foundedYear", "Founded Year", ""), None);
        assert_eq!(required::<i32>(&mut errors, "years", "Years in Office", "four"), None);
        let messages: Vec<_> = errors.messages().collect();
        assert_eq!(messages, vec!["Founded Year is required.", "Years in Office must be a whole number."]);
    }

    #[test]
    fn test_optional() {
        let mut errors = FieldErrors::new();
        assert_eq!(optional::<i32>(&mut errors, "endYear", "End Year", "  "), None);
        assert!(errors.is_empty());
        assert_eq!(optional::<i32>(&mut errors, "endYear", "End Year", "1824"), Some(1824));
        assert_eq!(optional::<i32>(&mut errors, "endYear", "End Year", "18x"), None);
        assert_eq!(errors.0.len(), 1);
    }
}
