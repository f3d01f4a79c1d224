//! Display formatting shared by the table and detail projections.

/// Render a score as a percentage with exactly two decimals, e.g. `73.40%`.
///
/// Exact halfway values round away from zero, so `12.125` renders as `12.13%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    // Negative zero would otherwise print as "-0.00%".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.2}%", round_ties_away(value))
}

/// A double sits exactly halfway between two hundredths only when it is an
/// odd multiple of 1/8; `{:.2}` would round those to even.
fn round_ties_away(value: f64) -> f64 {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}

/// Capitalize the first character of every space-separated word.
///
/// The rest of each word is left untouched and runs of spaces are kept as-is.
#[must_use]
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive identity comparison used for row highlighting.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
