#[path = "../common/mod.rs"]
mod common;

use common::fixtures;

use bandeira::classify::detect_brand;
use bandeira::luhn::luhn_valid;
use bandeira::types::Brand;

#[test]
fn every_brand_sample_classifies_to_its_brand() {
    for (brand, number) in fixtures::brand_samples() {
        let digits = fixtures::digits(number);
        assert_eq!(
            detect_brand(&digits),
            Some(brand),
            "{} should classify as {:?}",
            number,
            brand
        );
    }
}

#[test]
fn every_brand_sample_passes_luhn() {
    for (brand, number) in fixtures::brand_samples() {
        let digits = fixtures::digits(number);
        assert!(
            luhn_valid(&digits),
            "{} ({:?}) should pass the checksum",
            number,
            brand
        );
    }
}

#[test]
fn visa_both_lengths_and_rejected_length() {
    assert_eq!(
        detect_brand(&fixtures::digits(fixtures::VALID_VISA_16)),
        Some(Brand::Visa)
    );
    assert_eq!(
        detect_brand(&fixtures::digits(fixtures::VALID_VISA_13)),
        Some(Brand::Visa)
    );
    assert_eq!(detect_brand(&fixtures::digits(fixtures::VISA_PREFIX_12)), None);
}

#[test]
fn diners_club_all_prefix_forms() {
    // prefix range 300-305 plus the literal 36/38 prefixes, all 14 digits
    assert_eq!(
        detect_brand(&fixtures::digits("30000000000004")),
        Some(Brand::DinersClub)
    );
    assert_eq!(
        detect_brand(&fixtures::digits("30500000000003")),
        Some(Brand::DinersClub)
    );
    assert_eq!(
        detect_brand(&fixtures::digits("36000000000008")),
        Some(Brand::DinersClub)
    );
    assert_eq!(
        detect_brand(&fixtures::digits("38000000000006")),
        Some(Brand::DinersClub)
    );
}

#[test]
fn discover_all_prefix_forms() {
    // 6011 literal, 622126-622925 range, 644-649 range, 65 literal
    assert_eq!(
        detect_brand(&fixtures::digits("6011000000000004")),
        Some(Brand::Discover)
    );
    assert_eq!(
        detect_brand(&fixtures::digits("6221260000000002")),
        Some(Brand::Discover)
    );
    assert_eq!(
        detect_brand(&fixtures::digits("6229250000000001")),
        Some(Brand::Discover)
    );
    assert_eq!(
        detect_brand(&fixtures::digits("6440000000000000")),
        Some(Brand::Discover)
    );
    assert_eq!(
        detect_brand(&fixtures::digits("6490000000000004")),
        Some(Brand::Discover)
    );
    assert_eq!(
        detect_brand(&fixtures::digits("6500000000000002")),
        Some(Brand::Discover)
    );
    // just outside the 622126-622925 range
    assert_eq!(detect_brand(&fixtures::digits("6221250000000003")), None);
    assert_eq!(detect_brand(&fixtures::digits("6229260000000009")), None);
}

#[test]
fn mastercard_both_prefix_ranges() {
    assert_eq!(
        detect_brand(&fixtures::digits("5100000000000008")),
        Some(Brand::MasterCard)
    );
    assert_eq!(
        detect_brand(&fixtures::digits("5500000000000004")),
        Some(Brand::MasterCard)
    );
    // 2-series range
    assert_eq!(
        detect_brand(&fixtures::digits("2221000000000009")),
        Some(Brand::MasterCard)
    );
    assert_eq!(
        detect_brand(&fixtures::digits("2720990000000007")),
        Some(Brand::MasterCard)
    );
    // outside both ranges
    assert_eq!(detect_brand(&fixtures::digits("5600000000000003")), None);
    assert_eq!(detect_brand(&fixtures::digits("2220000000000000")), None);
}

#[test]
fn hipercard_both_prefixes() {
    assert_eq!(
        detect_brand(&fixtures::digits("6062000000000000")),
        Some(Brand::HiperCard)
    );
    assert_eq!(
        detect_brand(&fixtures::digits("3841000000000009")),
        Some(Brand::HiperCard)
    );
}

#[test]
fn enroute_and_voyager_require_15_digits() {
    assert_eq!(
        detect_brand(&fixtures::digits("214900000000013")),
        Some(Brand::EnRoute)
    );
    assert_eq!(detect_brand(&fixtures::digits("2149000000000132")), None); // 16
    assert_eq!(
        detect_brand(&fixtures::digits("869900000000003")),
        Some(Brand::Voyager)
    );
    assert_eq!(detect_brand(&fixtures::digits("86990000000000")), None); // 14
}
