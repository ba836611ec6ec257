// bandeira/src/prelude.rs

pub use crate::classify::{detect_brand, detect_brand_with};
pub use crate::display::{
    BadgeColors, BrandBadge, LuhnStatus, NEUTRAL_BADGE, badge_colors, brand_badge,
    expected_length, input_progress, luhn_status, progress_denominator,
};
pub use crate::luhn::luhn_valid;
pub use crate::rules::{BRAND_RULES, BrandRule, LengthRule, Matcher};
pub use crate::validate::{ValidationReport, validate_card};
pub use crate::{Brand, DigitString, Error, Result};

// Re-export the thresholds a presentation layer is expected to honor
pub use crate::constants::{BRAND_DECISION_MIN_LEN, MAX_INPUT_LEN};
