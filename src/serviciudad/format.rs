//! Colombian-locale formatting of amounts and dates.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Pesos with `.` as thousands separator and `,` for up to two decimals:
/// `125000.0` is `$ 125.000`, `1234.5` is `$ 1.234,5`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("$ {value}");
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    let mut formatted = group_thousands(cents / 100);
    let fraction = cents % 100;
    if fraction > 0 {
        let digits = format!("{fraction:02}");
        formatted.push(',');
        formatted.push_str(digits.trim_end_matches('0'));
    }

    format!("{sign}$ {formatted}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped
}

/// Accepts RFC 3339 timestamps, offset-less `LocalDateTime` values and plain dates.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.naive_local());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(time) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(time);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `17 de octubre de 2025, 14:30`; unparseable input is returned as received.
#[must_use]
pub fn format_date_long(value: &str) -> String {
    parse_timestamp(value).map_or_else(
        || value.to_string(),
        |time| {
            format!(
                "{} de {} de {}, {:02}:{:02}",
                time.day(),
                MONTHS[time.month0() as usize],
                time.year(),
                time.hour(),
                time.minute()
            )
        },
    )
}

/// `17/10/2025`; unparseable input is returned as received.
#[must_use]
pub fn format_date_short(value: &str) -> String {
    parse_timestamp(value).map_or_else(
        || value.to_string(),
        |time| time.format("%d/%m/%Y").to_string(),
    )
}
