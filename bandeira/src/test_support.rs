//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize known-good card vectors and a check-digit
//! builder so tests across the crate and tests/ directory can reuse the
//! same numbers.
#![allow(dead_code)]

use crate::types::Brand;

/// Known-good test number for each brand: classifies to the brand under the
/// rule table and passes the Luhn checksum.
#[doc(hidden)]
pub fn sample_number(brand: Brand) -> &'static str {
    match brand {
        Brand::AmericanExpress => "378282246310005",
        Brand::DinersClub => "30569309025904",
        Brand::EnRoute => "201400000000009",
        Brand::Voyager => "869940697287073",
        Brand::Jcb => "3530111333300000",
        Brand::HiperCard => "6062825624254001",
        Brand::Discover => "6011111111111117",
        Brand::Aura => "5078601870000123",
        Brand::MasterCard => "5555555555554444",
        Brand::Visa => "4111111111111111",
    }
}

/// Compute the Luhn check digit that completes `partial`.
///
/// `partial` must contain only decimal digits. The digit appended at the end
/// sits at the undoubled rightmost position, so every digit of `partial`
/// shifts one place and the doubling parity flips relative to checking
/// `partial` alone.
#[doc(hidden)]
pub fn luhn_check_digit(partial: &str) -> u8 {
    let sum: u32 = partial
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Append the Luhn check digit to `partial`, producing a checksum-valid number.
#[doc(hidden)]
pub fn complete_number(partial: &str) -> String {
    format!("{}{}", partial, luhn_check_digit(partial))
}
