// bandeira/src/rules/table.rs

//! The fixed brand-detection rule table.
//!
//! Order is part of the contract: the classifier returns the first rule that
//! matches, and several prefix sets would otherwise be reachable by more
//! than one rule. Narrow prefixes come first; Visa's single-digit `4` is
//! maximally generic and comes last.

use super::matcher::{LengthRule, Matcher};
use crate::types::Brand;

/// One brand-detection rule: the brand, the prefix matchers (any may hit),
/// and the digit-count constraint. A number that fails the length check
/// never matches the rule, whatever its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandRule {
    /// Brand this rule detects.
    pub brand: Brand,
    /// Prefix tests; the rule matches when any of them does.
    pub matchers: &'static [Matcher],
    /// Digit-count constraint.
    pub length: LengthRule,
}

impl BrandRule {
    /// True if `digits` satisfies both the length constraint and at least
    /// one prefix matcher.
    pub fn matches(&self, digits: &str) -> bool {
        self.length.permits(digits.len()) && self.matchers.iter().any(|m| m.matches(digits))
    }
}

/// Ordered detection rules, evaluated first-match-wins.
pub static BRAND_RULES: [BrandRule; 10] = [
    // American Express: 34 or 37, 15 digits
    BrandRule {
        brand: Brand::AmericanExpress,
        matchers: &[Matcher::Prefix(&["34", "37"])],
        length: LengthRule::Exact(15),
    },
    // Diners Club: 300-305, 36 or 38, 14 digits
    BrandRule {
        brand: Brand::DinersClub,
        matchers: &[
            Matcher::PrefixRange {
                len: 3,
                low: 300,
                high: 305,
            },
            Matcher::Prefix(&["36", "38"]),
        ],
        length: LengthRule::Exact(14),
    },
    // EnRoute: 2014 or 2149, 15 digits
    BrandRule {
        brand: Brand::EnRoute,
        matchers: &[Matcher::Prefix(&["2014", "2149"])],
        length: LengthRule::Exact(15),
    },
    // Voyager: 8699, 15 digits
    BrandRule {
        brand: Brand::Voyager,
        matchers: &[Matcher::Prefix(&["8699"])],
        length: LengthRule::Exact(15),
    },
    // JCB: 3528-3589, 16 digits
    BrandRule {
        brand: Brand::Jcb,
        matchers: &[Matcher::PrefixRange {
            len: 4,
            low: 3528,
            high: 3589,
        }],
        length: LengthRule::Exact(16),
    },
    // HiperCard: 6062 or 3841, 16 digits
    BrandRule {
        brand: Brand::HiperCard,
        matchers: &[Matcher::Prefix(&["6062", "3841"])],
        length: LengthRule::Exact(16),
    },
    // Discover: 6011, 622126-622925, 644-649, 65 - 16 digits
    BrandRule {
        brand: Brand::Discover,
        matchers: &[
            Matcher::Prefix(&["6011"]),
            Matcher::PrefixRange {
                len: 6,
                low: 622126,
                high: 622925,
            },
            Matcher::PrefixRange {
                len: 3,
                low: 644,
                high: 649,
            },
            Matcher::Prefix(&["65"]),
        ],
        length: LengthRule::Exact(16),
    },
    // Aura: 50, 16 digits
    BrandRule {
        brand: Brand::Aura,
        matchers: &[Matcher::Prefix(&["50"])],
        length: LengthRule::Exact(16),
    },
    // MasterCard: 51-55 or 2221-2720, 16 digits
    BrandRule {
        brand: Brand::MasterCard,
        matchers: &[
            Matcher::PrefixRange {
                len: 2,
                low: 51,
                high: 55,
            },
            Matcher::PrefixRange {
                len: 4,
                low: 2221,
                high: 2720,
            },
        ],
        length: LengthRule::Exact(16),
    },
    // Visa: 4, 13 or 16 digits
    BrandRule {
        brand: Brand::Visa,
        matchers: &[Matcher::Prefix(&["4"])],
        length: LengthRule::OneOf(&[13, 16]),
    },
];
