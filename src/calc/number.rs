//! Number text conventions used by digit entry.
//!
//! Digit entry works on the *rendered* value: the current number is turned
//! into text, a character is appended and the result is parsed back. Both
//! directions follow the ECMAScript `Number::toString` / `parseFloat`
//! rules so that leading zeros collapse, a second decimal point is
//! rejected and `NaN` / `Infinity` behave the way users of web
//! calculators expect.

/// Render a number the way `Number.prototype.toString()` does.
///
/// Plain notation is used while the decimal exponent `n` (position of the
/// decimal point relative to the first significant digit) lies in
/// `-6 < n <= 21`; outside of that range the value is printed in
/// exponential notation (`1e+21`, `1.5e-7`). Both zeros render as `0`.
pub fn to_js_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{sign}{scientific}");
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let e_sign = if e >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{e_sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{e_sign}{}", e.abs())
        }
    };

    format!("{sign}{body}")
}

/// Longest prefix of `text` (after leading whitespace) that `parseFloat`
/// would accept, or `None` when no prefix is a valid decimal literal.
///
/// The returned slice keeps its sign and a trailing `.` if one was
/// accepted (`"12.."` yields `"12."`).
pub fn longest_decimal_prefix(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if trimmed[sign_len..].starts_with("Infinity") {
        return Some(&trimmed[..sign_len + "Infinity".len()]);
    }

    let len = literal_len(&bytes[sign_len..]);
    if len == 0 {
        return None;
    }
    Some(&trimmed[..sign_len + len])
}

/// Parse text the way the global `parseFloat` does: the longest valid
/// decimal prefix wins and anything after it is ignored. Returns `NaN`
/// when there is no valid prefix.
pub fn parse_float(text: &str) -> f64 {
    let Some(literal) = longest_decimal_prefix(text) else {
        return f64::NAN;
    };

    match literal.trim_start_matches(['+', '-']) {
        "Infinity" if literal.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => literal.parse().unwrap_or(f64::NAN),
    }
}

/// `SameValue` equality: `NaN` equals `NaN`, `+0` and `-0` differ.
pub fn same_value(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

fn literal_len(bytes: &[u8]) -> usize {
    let int_digits = count_digits(bytes, 0);
    let mut pos = int_digits;

    if bytes.get(pos) == Some(&b'.') {
        let frac_digits = count_digits(bytes, pos + 1);
        if int_digits == 0 && frac_digits == 0 {
            return 0;
        }
        pos += 1 + frac_digits;
    } else if int_digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(bytes, exp_pos);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map(|tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}
