//! Formatting utilities used for CLI and export outputs.

use crate::models::Wage;

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // es: 08:00
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: 08h 00m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Wage text, or a dash when no rate was given.
pub fn wage_or_dash(wage: Option<Wage>) -> String {
    wage.map(|w| w.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Free-text labels are shown as `-` when empty.
pub fn label_or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}
