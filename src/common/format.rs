/// Thousands-separated decimal formatting: `1234567.0` -> `"1,234,567"`.
///
/// The value is rounded to the nearest integer before grouping.
/// Non-finite input formats as `"0"` instead of panicking.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
