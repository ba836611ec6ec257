// bandeira/src/luhn.rs

//! Luhn checksum validation.

use crate::constants::LUHN_MIN_LEN;
use crate::types::DigitString;

/// Check `digits` against the Luhn formula.
///
/// Walking from the rightmost digit, every second digit is doubled (minus 9
/// when the double exceeds 9) and the values are summed; the number passes
/// when the sum is a multiple of 10. A single digit carries no check digit,
/// so anything shorter than two digits fails outright.
pub fn luhn_valid(digits: &DigitString) -> bool {
    if digits.len() < LUHN_MIN_LEN {
        return false;
    }

    let sum: u32 = digits
        .as_str()
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}
