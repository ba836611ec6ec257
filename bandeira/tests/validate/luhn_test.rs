#[path = "../common/mod.rs"]
mod common;

use common::fixtures;

use bandeira::luhn::luhn_valid;
use bandeira::test_support::complete_number;

#[test]
fn baseline_vectors() {
    assert!(!luhn_valid(&fixtures::digits("")));
    assert!(!luhn_valid(&fixtures::digits("0")));
    assert!(luhn_valid(&fixtures::digits(fixtures::VALID_VISA_16)));
    assert!(luhn_valid(&fixtures::digits(fixtures::VALID_VISA_13)));
    assert!(!luhn_valid(&fixtures::digits(fixtures::INVALID_CHECKSUM_16)));
}

#[test]
fn two_digit_minimum_is_a_real_boundary() {
    // "00" is the shortest possible checksummed number: 0 + 0 is a
    // multiple of ten, so it passes; a lone "0" never does.
    assert!(luhn_valid(&fixtures::digits("00")));
    assert!(!luhn_valid(&fixtures::digits("0")));
    assert!(luhn_valid(&fixtures::digits("18")));
    assert!(!luhn_valid(&fixtures::digits("19")));
}

#[test]
fn completed_partials_always_pass() {
    for partial in ["4", "50786018700001", "999999999999999999"] {
        let number = complete_number(partial);
        assert!(
            luhn_valid(&fixtures::digits(&number)),
            "{} should pass after completion",
            number
        );
    }
}

#[test]
fn doubling_transform_handles_digits_above_four() {
    // 9 doubles to 18 -> 9 after the subtract-nine fold; make sure numbers
    // heavy in high digits are summed with the fold applied.
    assert!(luhn_valid(&fixtures::digits("91"))); // 9*2=18 -> 9; 9+1=10
    assert!(!luhn_valid(&fixtures::digits("99")));
}
