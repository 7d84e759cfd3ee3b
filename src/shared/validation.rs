use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for tracking IDs handed out by the submission form
    /// "SL" + 6 timestamp digits + 6 uppercase alphanumerics
    /// - Valid: "SL123456ABC123", "SL000042ZZZZZZ"
    /// - Invalid: "sl123456abc123", "SL12345ABC123", "SL123456abc123", "XX123456ABC123"
    pub static ref TRACKING_ID_REGEX: Regex = Regex::new(r"^SL\d{6}[A-Z0-9]{6}$").unwrap();
}

/// Trim surrounding whitespace and upper-case a user-supplied tracking ID
pub fn normalize_tracking_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// True when the string is non-empty after trimming
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
