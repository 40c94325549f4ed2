//! Order resolution from the upstream title field.

use tracing::trace;

/// Derive a sibling sort key from a category title.
///
/// The title is read as a base-10 integer prefix: leading whitespace (and BOM) is
/// skipped, one optional sign is accepted, then the longest run of ASCII
/// digits is taken and anything after it is ignored. The radix is always 10,
/// so `"0x123"` yields `0`.
///
/// Falls back to `id` when the title is empty or has no leading digits.
/// Values that do not fit in `i64` saturate.
///
/// ```
/// use navtree::domain::resolve_order;
///
/// assert_eq!(resolve_order("2137superCategory", 100), 2137);
/// assert_eq!(resolve_order("0x123", 100), 0);
/// assert_eq!(resolve_order("UberCategory", 100), 100);
/// assert_eq!(resolve_order("", 100), 100);
/// ```
pub fn resolve_order(title: &str, id: i64) -> i64 {
    if title.is_empty() {
        return id;
    }
    match parse_leading_int(title) {
        Some(order) => order,
        None => {
            trace!("resolve_order: no leading integer in {:?}, using id {}", title, id);
            id
        }
    }
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for digit in digits {
        seen = true;
        let digit = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    seen.then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 100, 1)]
    #[case("", 100, 100)]
    #[case("0x123", 100, 0)]
    #[case("2137superCategory", 100, 2137)]
    #[case("UberCategory", 100, 100)]
    #[case("05", 100, 5)]
    #[case("1#", 100, 1)]
    #[case("  42 items", 100, 42)]
    #[case("\u{FEFF}12", 1, 12)]
    #[case("\u{FEFF} \t-3x", 1, -3)]
    #[case("-7", 100, -7)]
    #[case("+8", 100, 8)]
    #[case("-", 100, 100)]
    #[case("   ", 100, 100)]
    #[case("#3", 100, 100)]
    fn test_resolve_order(#[case] title: &str, #[case] id: i64, #[case] expected: i64) {
        assert_eq!(resolve_order(title, id), expected);
    }

    #[rstest]
    #[case(i64::MIN)]
    #[case(-1)]
    #[case(0)]
    #[case(987_654)]
    fn test_empty_title_returns_id(#[case] id: i64) {
        assert_eq!(resolve_order("", id), id);
    }

    #[test]
    fn test_hex_prefix_is_decimal_zero_for_any_id() {
        for id in [0, 1, 291, -5] {
            assert_eq!(resolve_order("0x123", id), 0);
        }
    }

    #[test]
    fn test_overflowing_digits_saturate() {
        assert_eq!(resolve_order("99999999999999999999999", 1), i64::MAX);
        assert_eq!(resolve_order("-99999999999999999999999", 1), i64::MIN);
    }
}
