// fixtures.rs — shared card-number vectors for integration tests
#![allow(dead_code)]

use bandeira::test_support::sample_number;
use bandeira::types::{Brand, DigitString};

/// Known-valid 16-digit Visa number.
pub const VALID_VISA_16: &str = "4539148803436467";

/// Known-valid 13-digit Visa number.
pub const VALID_VISA_13: &str = "4222222222222";

/// Visa prefix at a length no rule admits.
pub const VISA_PREFIX_12: &str = "411111111111";

/// Known-valid American Express number.
pub const VALID_AMEX: &str = "378282246310005";

/// A 16-digit number that fails the checksum by one digit.
pub const INVALID_CHECKSUM_16: &str = "4111111111111112";

pub fn digits(s: &str) -> DigitString {
    DigitString::normalize(s)
}

/// (brand, known-good number) for every brand, in rule-table order.
pub fn brand_samples() -> Vec<(Brand, &'static str)> {
    Brand::ALL
        .iter()
        .map(|&brand| (brand, sample_number(brand)))
        .collect()
}
