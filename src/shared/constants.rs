/// Prefix carried by every tracking ID
pub const TRACKING_ID_PREFIX: &str = "SL";

/// Number of timestamp digits in a tracking ID
pub const TRACKING_ID_TIMESTAMP_DIGITS: usize = 6;

/// Number of random base-36 characters in a tracking ID
pub const TRACKING_ID_RANDOM_CHARS: usize = 6;

/// How many fresh tracking IDs a submission tries before giving up on collisions
pub const MAX_TRACKING_ID_ATTEMPTS: usize = 5;

/// Separator used when joining attachment file names for display
pub const ATTACHMENT_SEPARATOR: &str = ", ";

// =============================================================================
// ERROR MESSAGES
// =============================================================================

/// Static message returned for any credential mismatch
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Recovery actions offered alongside a tracking miss
pub const TRACKING_MISS_HINTS: [&str; 2] = ["retry", "submit_new_report"];
