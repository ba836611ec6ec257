// bandeira/src/validate.rs

//! The single entry point a presentation layer calls per input change.

use crate::classify::detect_brand;
use crate::luhn::luhn_valid;
use crate::types::{Brand, DigitString};

/// Combined outcome of one validation pass. A value type, built fresh per
/// call; `length` is the digit count after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport {
    /// Cleaned digits extracted from the raw input.
    pub digits: DigitString,
    /// Detected brand, or `None` when no rule matched.
    pub brand: Option<Brand>,
    /// Whether the cleaned digits pass the Luhn checksum.
    pub luhn_valid: bool,
    /// Digit count of `digits`.
    pub length: usize,
}

/// Normalize `raw`, classify the result, and run the Luhn checksum.
///
/// Total over any input string: empty input, digit-free input, and oversized
/// input all produce an ordinary report rather than an error.
pub fn validate_card(raw: &str) -> ValidationReport {
    let digits = DigitString::normalize(raw);
    let brand = detect_brand(&digits);
    let luhn = luhn_valid(&digits);
    let length = digits.len();

    // The digits themselves never reach the log.
    log::trace!(
        "validated input: length={} brand={:?} luhn_valid={}",
        length,
        brand,
        luhn
    );

    ValidationReport {
        digits,
        brand,
        luhn_valid: luhn,
        length,
    }
}
