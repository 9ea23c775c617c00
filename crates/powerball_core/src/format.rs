//! Number rendering for the narrative script and CLI output.
//!
//! The script's counts are thousands-grouped ("1,234,567") and its year
//! totals carry exactly two decimal places, matching the original app's
//! `toLocaleString` output.

/// Groups a count in threes: `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// Thousands-grouped with exactly two decimal places: `12345.678` ->
/// `"12,345.68"`. Only meaningful for non-negative values.
pub fn group_thousands_f2(x: f64) -> String {
    let rendered = format!("{:.2}", x);
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));
    let int_value: u64 = int_part.parse().unwrap_or(0);
    format!("{}.{}", group_thousands(int_value), frac_part)
}
