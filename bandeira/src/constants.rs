// bandeira/src/constants.rs
//! Input-size and presentation threshold constants used across the crate

/// Maximum number of digits an input field accepts
pub const MAX_INPUT_LEN: usize = 19;

/// Digit count at which an unmatched number is reported as unrecognized
/// rather than still in progress
pub const BRAND_DECISION_MIN_LEN: usize = 13;

/// Progress denominator once the decision length is reached without a brand
pub const FALLBACK_EXPECTED_LEN: usize = 16;

/// Progress denominator while the input may still grow into any brand
pub const UNKNOWN_EXPECTED_LEN: usize = 19;

/// Minimum digit count for a meaningful Luhn verdict
pub const LUHN_MIN_LEN: usize = 2;
