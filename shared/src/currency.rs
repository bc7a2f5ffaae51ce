//! Fixed vi-VN currency formatting for VND amounts.
//!
//! VND has no fraction digits; the display style is dot-grouped thousands
//! with a non-breaking space before the đồng sign: `500.000 ₫`.

/// Thousands separator used by a display language for plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// vi-VN: `1.234.567`
    Dot,
    /// en-US / zh-CN: `1,234,567`
    Comma,
}

/// Format an amount in the fixed vi-VN VND currency style.
pub fn format_vnd(amount: u64) -> String {
    format!("{}\u{a0}₫", group_thousands(amount, Grouping::Dot))
}

/// Insert thousands separators into a non-negative integer.
pub fn group_thousands(value: u64, grouping: Grouping) -> String {
    let digits = value.to_string();
    let separator = match grouping {
        Grouping::Dot => '.',
        Grouping::Comma => ',',
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(0), "0\u{a0}₫");
        assert_eq!(format_vnd(1000), "1.000\u{a0}₫");
        assert_eq!(format_vnd(500_000), "500.000\u{a0}₫");
        assert_eq!(format_vnd(13_000), "13.000\u{a0}₫");
        assert_eq!(format_vnd(4_995_000_000), "4.995.000.000\u{a0}₫");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, Grouping::Comma), "0");
        assert_eq!(group_thousands(999, Grouping::Comma), "999");
        assert_eq!(group_thousands(9999, Grouping::Comma), "9,999");
        assert_eq!(group_thousands(9999, Grouping::Dot), "9.999");
        assert_eq!(group_thousands(1_234_567, Grouping::Dot), "1.234.567");
    }
}
