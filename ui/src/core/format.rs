//! Formatting helpers for presenting warehouse figures.

/// `1234` -> `1,234`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount: `123.0` -> `$123`, `-50.0` -> `-$50`
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", format_count(rounded.abs() as u64))
}

/// Compact dollar amount: `45_600.0` -> `$45.6K`, `-2_500_000.0` -> `-$2.5M`
pub fn format_currency_compact(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 1_000_000.0 {
        format!("{sign}${:.1}M", abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{sign}${:.1}K", abs / 1_000.0)
    } else {
        format_currency(value)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Signed period-over-period change: `12.3` -> `+12.3%`, `-1.1` -> `-1.1%`
pub fn format_change(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}
