/// Marker the transcript export uses for a true flag.
pub const YES: &str = "是";

/// Parses a numeric cell, ignoring surrounding whitespace. Full-width digits
/// (０-９) read as ASCII digits and a single `_` between two digits is
/// dropped. Returns `None` for empty, non-numeric, or non-finite values.
pub fn parse_decimal(value: &str) -> Option<f64> {
    normalize_digits(value.trim())?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn normalize_digits(value: &str) -> Option<String> {
    let chars: Vec<char> = value.chars().map(to_ascii_digit).collect();
    let mut out = String::with_capacity(chars.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let before = i.checked_sub(1).map(|j| chars[j]);
            let after = chars.get(i + 1).copied();
            let between_digits = before.is_some_and(|b| b.is_ascii_digit())
                && after.is_some_and(|a| a.is_ascii_digit());
            if !between_digits {
                return None;
            }
            continue;
        }
        out.push(c);
    }
    Some(out)
}

fn to_ascii_digit(c: char) -> char {
    match c {
        '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
        _ => c,
    }
}

/// Returns true only for the exact yes marker.
pub fn is_yes(value: &str) -> bool {
    value == YES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("3"), Some(3.0));
        assert_eq!(parse_decimal(" 2.5\t"), Some(2.5));
        assert_eq!(parse_decimal("1e1"), Some(10.0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("两"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn test_parse_decimal_full_width_digits() {
        assert_eq!(parse_decimal("３"), Some(3.0));
        assert_eq!(parse_decimal("８５.５"), Some(85.5));
        assert_eq!(parse_decimal("\u{3000}９０\u{3000}"), Some(90.0));
    }

    #[test]
    fn test_parse_decimal_underscores() {
        assert_eq!(parse_decimal("1_0"), Some(10.0));
        assert_eq!(parse_decimal("1_000.5"), Some(1000.5));
        assert_eq!(parse_decimal("_1"), None);
        assert_eq!(parse_decimal("1_"), None);
        assert_eq!(parse_decimal("1__0"), None);
        assert_eq!(parse_decimal("1._5"), None);
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("是"));
        assert!(!is_yes("否"));
        assert!(!is_yes(""));
        assert!(!is_yes(" 是"));
    }
}
