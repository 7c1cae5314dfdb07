/// Formats an amount as `"<currency> 1,234,567.89"`.
///
/// Two decimals, comma thousands separators. Negative amounts keep their sign
/// after the currency code.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{currency} {sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(1_234_567.891, "AED"), "AED 1,234,567.89");
        assert_eq!(format_currency(1_000.0, "AED"), "AED 1,000.00");
        assert_eq!(format_currency(999.999, "AED"), "AED 1,000.00");
        assert_eq!(format_currency(100_000.5, "USD"), "USD 100,000.50");
    }

    #[test]
    fn small_and_negative_amounts() {
        assert_eq!(format_currency(0.0, "AED"), "AED 0.00");
        assert_eq!(format_currency(12.3, "AED"), "AED 12.30");
        assert_eq!(format_currency(-4_500.25, "AED"), "AED -4,500.25");
        assert_eq!(format_currency(-0.001, "AED"), "AED 0.00");
    }
}
