//! Number formatting for headline tiles.

use std::fmt::Display;

/// Insert a `,` before every group of three digits in the integer part.
///
/// The fractional part is left as is and a leading sign stays in front.
pub fn add_decimal_separator<T: Display>(x: T) -> String {
    let text = x.to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let digits_start = integer
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(integer.len());
    let (sign, digits) = integer.split_at(digits_start);

    let mut grouped = String::with_capacity(text.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Format an optional scalar, rendering an unset value as `unavailable`.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => add_decimal_separator(v),
        Some(v) => v.to_string(),
        None => "unavailable".to_string(),
    }
}

/// Format an optional scalar without grouping.
pub fn format_raw(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "unavailable".to_string(),
    }
}
