//! Number formatting for display.

/// Currency suffix appended by [`format_price`].
const CURRENCY_SUFFIX: &str = "원";

/// Formats `n` with a comma every three digits.
///
/// # Examples
///
/// ```
/// use get_my_books::ui::format_number;
///
/// assert_eq!(format_number(0), "0");
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(-9800), "-9,800");
/// ```
#[must_use]
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Formats a price as `12,000원`.
#[must_use]
pub fn format_price(price: i64) -> String {
    format!("{}{CURRENCY_SUFFIX}", format_number(price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_thousands() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(100000), "100,000");
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn price_has_currency_suffix() {
        assert_eq!(format_price(18000), "18,000원");
    }
}
