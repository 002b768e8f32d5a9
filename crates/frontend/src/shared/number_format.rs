//! Number formatting for table cells

/// Formats with a `,` thousands separator and a fixed number of decimals.
///
/// ```
/// # use planner_frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Whole numbers without decimals, fractions with two.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format_number_with_decimals(value, 0)
    } else {
        format_number_with_decimals(value, 2)
    }
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value.round(), 0)
}

/// `1,234,500 VND`
pub fn format_currency(value: f64, currency: &str) -> String {
    format!("{} {}", format_number_int(value), currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1,234,567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(1500.0), "1,500");
        assert_eq!(format_quantity(12.5), "12.50");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234500.4, "VND"), "1,234,500 VND");
    }
}
