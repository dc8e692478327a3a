//! Display formatting for metric counts.
//!
//! Presentation-only: these shapes are what the cards render, not part of
//! the data contract.

/// Formats a count for card display.
///
/// Values ≥ 1,000,000 render as millions with two decimals and an `M`
/// suffix; values ≥ 1,000 as thousands with a `K` suffix; smaller values
/// as a thousands-grouped integer.
///
/// # Examples
///
/// ```
/// use reglens_view::format_count;
///
/// assert_eq!(format_count(2_500_000), "2.50M");
/// assert_eq!(format_count(1_500), "1.50K");
/// assert_eq!(format_count(987), "987");
/// ```
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.2}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.2}K", value as f64 / 1_000.0)
    } else {
        group_thousands(value)
    }
}

/// Renders an integer with comma thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
