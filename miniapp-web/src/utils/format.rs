//! Number formatting for the product views.

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = if parts.len() > 1 { parts[1] } else { "" };

    // Add commas to integer part
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        integer_with_commas
    } else {
        format!("{}.{}", integer_with_commas, decimal_part)
    }
}

/// Format a product price with two decimals and the currency label.
pub fn format_price(price: f64) -> String {
    format!("{} {}", format_number(price, 2), crate::utils::constants::CURRENCY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(0.0, 0), "0");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.5), "10.50 MNT");
        assert_eq!(format_price(1250.0), "1,250.00 MNT");
    }
}
