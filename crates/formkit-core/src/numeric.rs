//! # Numeric Strings
//!
//! One reading of "this string is a number", shared by [`enum_keys`]
//! label filtering and the validation facade's string coercion. It follows
//! JavaScript's `Number(string)`:
//!
//! - Surrounding whitespace is ignored; a blank string is zero.
//! - `Infinity` with an optional sign is infinite.
//! - Unsigned `0x`, `0o` and `0b` literals are read in their radix.
//! - Otherwise the string must be a decimal literal with an optional
//!   exponent. Rust-only spellings (`inf`, `NaN`, `infinity`) are rejected.
//!
//! [`enum_keys`]: crate::helpers::enum_keys

/// Parse `s` as JavaScript's `Number(s)` would. `None` where that yields
/// `NaN`.
pub fn parse_js_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some((radix, digits)) = radix_literal(trimmed) {
        return parse_radix(digits, radix);
    }

    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let decimal = !unsigned.is_empty()
        && unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn radix_literal(s: &str) -> Option<(u32, &str)> {
    let digits = s.get(2..)?;
    match s.get(..2)? {
        "0x" | "0X" => Some((16, digits)),
        "0o" | "0O" => Some((8, digits)),
        "0b" | "0B" => Some((2, digits)),
        _ => None,
    }
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_spellings() {
        let cases = [
            ("2", 2.0),
            (" 4 ", 4.0),
            ("-1.5", -1.5),
            ("+7", 7.0),
            (".5", 0.5),
            ("5.", 5.0),
            ("1e3", 1000.0),
            ("2E-2", 0.02),
            ("", 0.0),
            ("  ", 0.0),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_js_number(input), Some(expected), "{input:?}");
        }
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(parse_js_number("0x1F"), Some(31.0));
        assert_eq!(parse_js_number("0XfF"), Some(255.0));
        assert_eq!(parse_js_number("0o17"), Some(15.0));
        assert_eq!(parse_js_number("0b101"), Some(5.0));
        assert_eq!(parse_js_number("0x"), None);
        assert_eq!(parse_js_number("0xG1"), None);
        assert_eq!(parse_js_number("0x+1F"), None);
        assert_eq!(parse_js_number("-0x1F"), None);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_js_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_js_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_js_number("--Infinity"), None);
        assert_eq!(parse_js_number("Infinity2"), None);
    }

    #[test]
    fn test_not_numbers() {
        for input in ["NaN", "inf", "infinity", "e", "1a", "--1", "1_000", "Draft", "+"] {
            assert_eq!(parse_js_number(input), None, "{input:?}");
        }
    }
}
