/// Renders `value` with `decimals` fractional digits and comma-grouped thousands.
pub fn with_separators(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && formatted.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    out.push_str(&group_digits(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

pub fn count_with_separators(count: usize) -> String {
    group_digits(&count.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_part_only() {
        assert_eq!(with_separators(1_234_567.26, 1), "1,234,567.3");
        assert_eq!(with_separators(1530.5, 1), "1,530.5");
        assert_eq!(with_separators(999.0, 1), "999.0");
        assert_eq!(with_separators(5000.0, 0), "5,000");
    }

    #[test]
    fn keeps_sign_for_nonzero_negatives() {
        assert_eq!(with_separators(-12_345.0, 0), "-12,345");
        assert_eq!(with_separators(-0.01, 1), "0.0");
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(count_with_separators(0), "0");
        assert_eq!(count_with_separators(1000), "1,000");
        assert_eq!(count_with_separators(12), "12");
    }
}
