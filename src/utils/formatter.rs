/// Formats a price as Brazilian real, e.g. `R$ 1.234,50`.
///
/// Thousands are grouped with `.`, cents follow a `,`; whole prices get `,00`.
pub fn format_currency(price: f64) -> String {
    let negative = price < 0.0;
    let cents_total = (price.abs() * 100.0).round() as u64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!(
        "{}R$ {},{:02}",
        if negative { "-" } else { "" },
        grouped,
        cents
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(59.9), "R$ 59,90");
        assert_eq!(format_currency(1234.5), "R$ 1.234,50");
        assert_eq!(format_currency(1234567.89), "R$ 1.234.567,89");
        assert_eq!(format_currency(100.0), "R$ 100,00");
        assert_eq!(format_currency(-12.3), "-R$ 12,30");
    }
}
