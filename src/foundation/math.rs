/// Fixed-point decimal formatting for transform output.
///
/// Negative zero prints as zero; infinities print as `Infinity`/`-Infinity`.
pub(crate) fn format_fixed(value: f64, precision: usize) -> String {
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        };
    }
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.precision$}")
}

/// Leading float prefix of `s`, ignoring leading whitespace and trailing garbage.
///
/// `"12.5px"` reads as `12.5`; `"abc"` reads as `None`.
pub(crate) fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned.starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let b = s.as_bytes();
    let mut i = usize::from(s.len() != unsigned.len());

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().ok()
}

/// Leading integer prefix of `s`, ignoring leading whitespace and trailing garbage.
///
/// `"10%"` reads as `10`, `"12.9"` as `12`.
pub(crate) fn parse_int_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut i = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let digits_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    s[..i].parse::<f64>().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
