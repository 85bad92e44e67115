use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;
use url::Url;

/// Storage and form format for show start times.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ACCEPTED_DATETIME_FORMATS: &[&str] = &[DATETIME_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

fn phone_pattern() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| {
        Regex::new(r"^(\(\d{3}\)|\d{3})[-. ]?\d{3}[-. ]?\d{4}$").expect("phone pattern compiles")
    })
}

pub fn is_phone(value: &str) -> bool {
    phone_pattern().is_match(value)
}

/// Absolute http(s) URL with a host.
pub fn is_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    ACCEPTED_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Trimmed value, or `None` when the field was left blank.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
