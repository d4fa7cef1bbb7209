use thiserror::Error;

/// Client-side form validation failure.
///
/// The only invariant the console enforces before a request leaves the
/// browser. Display text is shown as-is in the error toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError::Invalid {
            field,
            message: message.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required(field) => field,
            ValidationError::Invalid { field, .. } => field,
        }
    }
}

/// Non-blank text field.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// Numeric field that must be present and strictly positive.
pub fn require_positive(field: &'static str, value: Option<f64>) -> Result<f64, ValidationError> {
    match value {
        None => Err(ValidationError::Required(field)),
        Some(v) if !v.is_finite() || v <= 0.0 => {
            Err(ValidationError::invalid(field, "must be greater than zero"))
        }
        Some(v) => Ok(v),
    }
}

/// Numeric field that must be present and not negative.
pub fn require_non_negative(
    field: &'static str,
    value: Option<f64>,
) -> Result<f64, ValidationError> {
    match value {
        None => Err(ValidationError::Required(field)),
        Some(v) if !v.is_finite() || v < 0.0 => {
            Err(ValidationError::invalid(field, "must not be negative"))
        }
        Some(v) => Ok(v),
    }
}

/// Indian mobile number: ten digits, optional `+91`/`0` prefix and spaces.
pub fn require_mobile(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require_text(field, value)?;
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    let national = if digits.len() == 12 && digits.starts_with("91") {
        &digits[2..]
    } else if digits.len() == 11 && digits.starts_with('0') {
        &digits[1..]
    } else {
        digits.as_str()
    };
    if national.len() != 10 || value.chars().any(|c| c.is_alphabetic()) {
        return Err(ValidationError::invalid(field, "must be a 10 digit mobile number"));
    }
    Ok(())
}

/// Optional text input: blank becomes `None`.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Integer part with digit grouping removed.
///
/// Commas are only accepted as group separators: western (`12,500`) or
/// Indian (`1,25,000`). The last group has three digits, inner groups two
/// or three.
fn ungroup(integer: &str) -> Option<String> {
    if !integer.contains(',') {
        return Some(integer.to_string());
    }
    let groups: Vec<&str> = integer.split(',').collect();
    let (head, tail) = groups.split_first()?;
    let digits = head.trim_start_matches('-');
    let head_ok = (1..=3).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit());
    let last = tail.len() - 1;
    let tail_ok = tail.iter().enumerate().all(|(i, group)| {
        let len_ok = if i == last { group.len() == 3 } else { (2..=3).contains(&group.len()) };
        len_ok && group.bytes().all(|b| b.is_ascii_digit())
    });
    (head_ok && tail_ok).then(|| groups.concat())
}

/// Parse a numeric form input; blank or garbage becomes `None`.
///
/// `.` is the decimal point; commas group digits as money is displayed.
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (integer, fraction) = match trimmed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (trimmed, None),
    };
    let mut plain = ungroup(integer)?;
    if let Some(fraction) = fraction {
        plain.push('.');
        plain.push_str(fraction);
    }
    plain.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an integer form input; blank or garbage becomes `None`.
pub fn parse_count(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("Name", "  "), Err(ValidationError::Required("Name")));
        assert!(require_text("Name", "Sunrise Solar").is_ok());
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("Price", None), Err(ValidationError::Required("Price")));
        assert!(require_positive("Price", Some(0.0)).is_err());
        assert_eq!(require_positive("Price", Some(12.5)), Ok(12.5));
        assert!(require_non_negative("Price", Some(0.0)).is_ok());
        assert!(require_non_negative("Price", Some(-1.0)).is_err());
    }

    #[test]
    fn test_parse_inputs() {
        assert_eq!(parse_number(" 3.5 "), Some(3.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_count("7"), Some(7));
        assert_eq!(parse_count("-1"), None);
    }

    #[test]
    fn test_parse_number_grouping() {
        assert_eq!(parse_number("12,500"), Some(12500.0));
        assert_eq!(parse_number("1,25,000"), Some(125000.0));
        assert_eq!(parse_number("1,234.50"), Some(1234.5));
        assert_eq!(parse_number("-2,500"), Some(-2500.0));
        assert_eq!(parse_number("3,5"), None);
        assert_eq!(parse_number("12,50"), None);
        assert_eq!(parse_number(",500"), None);
        assert_eq!(parse_number("1.5,00"), None);
    }

    #[test]
    fn test_require_mobile() {
        assert!(require_mobile("Mobile", "98765 43210").is_ok());
        assert!(require_mobile("Mobile", "+91 98765 43210").is_ok());
        assert!(require_mobile("Mobile", "09876543210").is_ok());
        assert_eq!(require_mobile("Mobile", ""), Err(ValidationError::Required("Mobile")));
        assert!(require_mobile("Mobile", "12345").is_err());
        assert!(require_mobile("Mobile", "98765x3210").is_err());
        assert_eq!(non_blank("  "), None);
        assert_eq!(non_blank(" a "), Some("a".to_string()));
    }

    #[test]
    fn test_display() {
        let e = ValidationError::invalid("Rating", "must be between 1 and 5");
        assert_eq!(e.to_string(), "Rating: must be between 1 and 5");
        assert_eq!(e.field(), "Rating");
        assert_eq!(ValidationError::Required("State").to_string(), "State is required");
    }
}
