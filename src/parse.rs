//! Coercion of free-text marks into numbers.
//!
//! Anything that does not start with a number counts as zero. A typo in a
//! field therefore contributes nothing rather than raising an error; callers
//! that want to flag it can compare against [`is_numeric`].

/// Parses the longest numeric prefix of `raw`.
///
/// Leading whitespace is skipped and trailing text is ignored, so `" 12.5 "`
/// and `"12.5abc"` both give `12.5`. Empty, unparseable and non-finite input
/// gives `0.0`, and so does negative zero.
///
/// Unlike `parseFloat`, `"Infinity"` and overflowing input such as `"1e999"`
/// count as zero rather than infinity, so totals stay finite.
pub fn parse_mark(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let end = numeric_prefix_len(trimmed.as_bytes());
    if end == 0 {
        return 0.0;
    }

    match trimmed[..end].parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}

/// True when the whole (trimmed) input is a number.
pub fn is_numeric(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && numeric_prefix_len(trimmed.as_bytes()) == trimmed.len()
}

/// Length of `[+-]?(digits[.digits?]|.digits)([eE][+-]?digits)?` at the start of `b`.
fn numeric_prefix_len(b: &[u8]) -> usize {
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while b.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut digits = i - int_start;

    if b.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while b.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while b.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_mark("10"), 10.0);
        assert_eq!(parse_mark("7.5"), 7.5);
        assert_eq!(parse_mark(".5"), 0.5);
        assert_eq!(parse_mark("5."), 5.0);
        assert_eq!(parse_mark("-3"), -3.0);
        assert_eq!(parse_mark("1e1"), 10.0);
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(parse_mark(""), 0.0);
        assert_eq!(parse_mark("   "), 0.0);
        assert_eq!(parse_mark("abc"), 0.0);
        assert_eq!(parse_mark("."), 0.0);
        assert_eq!(parse_mark("-"), 0.0);
        assert_eq!(parse_mark("NaN"), 0.0);
        assert_eq!(parse_mark("1e999"), 0.0);
    }

    #[test]
    fn trailing_text_is_ignored() {
        assert_eq!(parse_mark("12abc"), 12.0);
        assert_eq!(parse_mark(" 8 marks"), 8.0);
        assert_eq!(parse_mark("3e"), 3.0);
        assert_eq!(parse_mark("3.5.1"), 3.5);
    }

    #[test]
    fn negative_zero_collapses() {
        let v = parse_mark("-0");
        assert_eq!(v, 0.0);
        assert!(v.is_sign_positive());
    }

    #[test]
    fn numeric_check() {
        assert!(is_numeric(" 12 "));
        assert!(!is_numeric("12abc"));
        assert!(!is_numeric(""));
    }
}
