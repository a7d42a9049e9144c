//! Phone and email pattern validation
//!
//! Word and digit classes are ASCII-only: `\d` and `\w` in the `regex`
//! crate are Unicode-aware by default, which would accept e.g. Arabic-Indic
//! digits in a phone number.

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional 2-3 digit area code, 3-4 digit exchange, 4 digit subscriber,
/// each optionally separated by one space or hyphen.
pub const PHONE_PATTERN: &str = r"^([0-9]{2,3})?[- ]?([0-9]{3,4})[- ]?([0-9]{4})$";

/// `local@domain.tld` with single `.`/`-` separators and 2-3 char suffixes.
pub const EMAIL_PATTERN: &str = r"^[0-9A-Za-z_]+([.-]?[0-9A-Za-z_]+)*@[0-9A-Za-z_]+([.-]?[0-9A-Za-z_]+)*(\.[0-9A-Za-z_]{2,3})+$";

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex")
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex")
});

/// Validate phone number format
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
