//! Display helpers shared by every screen.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use rand::Rng;
use serde::de::DeserializeOwned;

/// Ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if day > 3 && day < 21 {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Formats a date as `June 9th, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

/// Parses a backend timestamp (RFC 3339, naive ISO 8601, or a bare date)
/// and formats it with [`format_date`].
pub fn format_date_str(input: &str) -> Option<String> {
    parse_date(input).map(format_date)
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Human-readable byte count: `0 Bytes`, `512 Bytes`, `1.5 KB`, `10 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let k = 1024f64;
    let i = ((bytes as f64).ln() / k.ln()).floor() as usize;
    let i = i.min(UNITS.len() - 1);
    let value = bytes as f64 / k.powi(i as i32);
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[i])
}

/// Cuts `text` to `max_len` characters, appending `...` when shortened.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let head: String = text.chars().take(max_len).collect();
    format!("{}...", head)
}

/// Joins a base URL and an endpoint path with exactly one slash.
pub fn format_endpoint_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    if endpoint.starts_with('/') {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}/{}", base, endpoint)
    }
}

/// Parses JSON, returning `fallback` on any error.
pub fn safe_json_parse<T: DeserializeOwned>(json: &str, fallback: T) -> T {
    serde_json::from_str(json).unwrap_or(fallback)
}

/// Random identifier for client-side bookkeeping: random base-36 digits
/// followed by the current timestamp in base 36.
pub fn generate_id() -> String {
    let random: u64 = rand::thread_rng().gen();
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    format!("{}{}", to_base36(random), to_base36(millis))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Badge color for an HTTP method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodColor {
    Green,
    Blue,
    Orange,
    Yellow,
    Red,
    Purple,
    Gray,
}

impl MethodColor {
    /// ANSI SGR code for terminal rendering.
    pub fn ansi_code(self) -> &'static str {
        match self {
            MethodColor::Green => "32",
            MethodColor::Blue => "34",
            MethodColor::Orange => "38;5;208",
            MethodColor::Yellow => "33",
            MethodColor::Red => "31",
            MethodColor::Purple => "35",
            MethodColor::Gray => "90",
        }
    }
}

/// Color for a method, case-insensitive. Unknown methods get GET's color.
pub fn method_color(method: &str) -> MethodColor {
    match method.to_uppercase().as_str() {
        "POST" => MethodColor::Blue,
        "PUT" => MethodColor::Orange,
        "PATCH" => MethodColor::Yellow,
        "DELETE" => MethodColor::Red,
        "HEAD" => MethodColor::Purple,
        "OPTIONS" => MethodColor::Gray,
        _ => MethodColor::Green,
    }
}

/// Uppercased method label with its color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodBadge {
    pub label: String,
    pub color: MethodColor,
}

impl MethodBadge {
    pub fn new(method: &str) -> Self {
        Self {
            label: method.to_uppercase(),
            color: method_color(method),
        }
    }

    /// The label wrapped in ANSI color codes.
    pub fn colored(&self) -> String {
        format!("\x1b[{}m{}\x1b[0m", self.color.ansi_code(), self.label)
    }
}

impl fmt::Display for MethodBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
