// bandeira/src/classify.rs

//! First-match-wins brand classification over the rule table.

use crate::rules::{BRAND_RULES, BrandRule};
use crate::types::{Brand, DigitString};

/// Evaluate `rules` in declared order and return the first match.
///
/// The table is data and this is its only interpreter; tests can pass a
/// synthetic rule slice to pin the resolution policy down on its own.
pub fn detect_brand_with(rules: &[BrandRule], digits: &DigitString) -> Option<Brand> {
    if digits.is_empty() {
        return None;
    }
    rules
        .iter()
        .find(|rule| rule.matches(digits.as_str()))
        .map(|rule| rule.brand)
}

/// Identify the card brand for `digits` against the built-in rule table.
///
/// Returns `None` for empty input and for numbers no rule recognizes.
pub fn detect_brand(digits: &DigitString) -> Option<Brand> {
    detect_brand_with(&BRAND_RULES, digits)
}
