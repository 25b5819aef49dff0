//! Lenient number parsing for form fields.
//!
//! Price and duration fields accept the longest numeric prefix of the input,
//! so `"45 min"` is a valid duration and `"R$ 10"` is not a valid price.

/// Parse the leading decimal number of `input`.
///
/// Leading whitespace and an optional sign are accepted; parsing stops at
/// the first character that cannot continue the number. Returns `None` when
/// no digit is found or the value is not finite.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let mut literal = &s[..end];
    if literal.ends_with('.') {
        literal = &literal[..literal.len() - 1];
    }

    literal.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the leading integer of `input`.
///
/// Accepts leading whitespace, an optional sign and a `0x` prefix for
/// hexadecimal. `"12.9"` parses as 12. Returns `None` when no digit is found
/// or the value does not fit in an `i64`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let len = digits
        .chars()
        .take_while(|c| c.is_digit(radix))
        .count();
    if len == 0 {
        return None;
    }

    // Signed before narrowing so `i64::MIN` still fits
    let magnitude = i128::from_str_radix(&digits[..len], radix).ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
