//! Number formatting for tables (Indian digit grouping)

/// Groups the integer part the Indian way: last three digits, then pairs.
///
/// `1234567` becomes `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Formats with Indian grouping and the given number of decimals
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, group_indian(integer_part), d),
        None => format!("{}{}", sign, group_indian(integer_part)),
    }
}

/// Rupee amount with 2 decimals, e.g. `₹1,25,000.00`
pub fn format_money(value: f64) -> String {
    let number = format_number_with_decimals(value, 2);
    match number.strip_prefix('-') {
        Some(abs) => format!("-₹{}", abs),
        None => format!("₹{}", number),
    }
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// `kW` value without trailing zeros: `5`, `7.5`
pub fn format_kw(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} kW", text)
}

/// Optional percent with one decimal, `-` when missing
pub fn format_percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}%", v))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "₹1,234.50");
        assert_eq!(format_money(125000.0), "₹1,25,000.00");
        assert_eq!(format_money(12345678.9), "₹1,23,45,678.90");
        assert_eq!(format_money(0.0), "₹0.00");
        assert_eq!(format_money(-2500.0), "-₹2,500.00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number_int(1234567.0), "12,34,567");
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_kw_and_percent() {
        assert_eq!(format_kw(5.0), "5 kW");
        assert_eq!(format_kw(7.5), "7.5 kW");
        assert_eq!(format_percent(Some(12.345)), "12.3%");
        assert_eq!(format_percent(None), "-");
    }
}
