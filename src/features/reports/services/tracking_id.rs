use chrono::Utc;
use uuid::Uuid;

use crate::shared::constants::{
    TRACKING_ID_PREFIX, TRACKING_ID_RANDOM_CHARS, TRACKING_ID_TIMESTAMP_DIGITS,
};
use crate::shared::validation::TRACKING_ID_REGEX;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a fresh tracking ID: `SL` + last 6 digits of the epoch-millis clock
/// + 6 random uppercase base-36 characters.
///
/// Uniqueness is not checked here; the catalog rejects duplicates on insert.
pub fn generate_tracking_id() -> String {
    compose_tracking_id(Utc::now().timestamp_millis(), Uuid::new_v4().as_u128())
}

/// Build a tracking ID from a timestamp and a random source
fn compose_tracking_id(timestamp_millis: i64, entropy: u128) -> String {
    let modulus = 10_i64.pow(TRACKING_ID_TIMESTAMP_DIGITS as u32);
    let timestamp = timestamp_millis.rem_euclid(modulus);

    let mut random = String::with_capacity(TRACKING_ID_RANDOM_CHARS);
    let mut remaining = entropy;
    for _ in 0..TRACKING_ID_RANDOM_CHARS {
        random.push(BASE36_DIGITS[(remaining % 36) as usize] as char);
        remaining /= 36;
    }

    format!(
        "{}{:0width$}{}",
        TRACKING_ID_PREFIX,
        timestamp,
        random,
        width = TRACKING_ID_TIMESTAMP_DIGITS
    )
}

/// Check a normalized ID against the tracking ID format
pub fn is_valid_tracking_id(id: &str) -> bool {
    TRACKING_ID_REGEX.is_match(id)
}
