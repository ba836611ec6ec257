// bandeira/src/display.rs

//! Presentation-support data for rendering a validation report.
//!
//! A live input form needs more than the raw report: how far along the
//! number is against the brand's typical length, whether the brand badge
//! should read as "still typing" or "unrecognized", and which colors to
//! paint it. All of it derives from the report and the thresholds in
//! `constants`.

use crate::constants::{BRAND_DECISION_MIN_LEN, FALLBACK_EXPECTED_LEN, UNKNOWN_EXPECTED_LEN};
use crate::types::Brand;
use crate::validate::ValidationReport;

/// Typical digit count for a brand, used to scale a progress indicator.
pub fn expected_length(brand: Brand) -> usize {
    match brand {
        Brand::DinersClub => 14,
        Brand::AmericanExpress | Brand::EnRoute | Brand::Voyager => 15,
        Brand::Jcb
        | Brand::HiperCard
        | Brand::Discover
        | Brand::Aura
        | Brand::MasterCard
        | Brand::Visa => 16,
    }
}

/// Digit count the progress indicator scales against.
///
/// The brand's expected length when one is detected; 16 once enough digits
/// are present to have decided, 19 while the input may still grow into
/// anything.
pub fn progress_denominator(brand: Option<Brand>, length: usize) -> usize {
    match brand {
        Some(brand) => expected_length(brand),
        None if length >= BRAND_DECISION_MIN_LEN => FALLBACK_EXPECTED_LEN,
        None => UNKNOWN_EXPECTED_LEN,
    }
}

/// Fraction of the expected length typed so far, clamped to 1.0.
pub fn input_progress(report: &ValidationReport) -> f32 {
    let denominator = progress_denominator(report.brand, report.length) as f32;
    (report.length as f32 / denominator).min(1.0)
}

/// Background/foreground color pair for a brand badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColors {
    /// Badge background, `#RRGGBB`.
    pub background: &'static str,
    /// Badge text color, `#RRGGBB`.
    pub foreground: &'static str,
}

/// Neutral badge palette used when no brand is known.
pub const NEUTRAL_BADGE: BadgeColors = BadgeColors {
    background: "#E0E0E0",
    foreground: "#555555",
};

/// Badge palette for a detected brand, or the neutral palette.
pub fn badge_colors(brand: Option<Brand>) -> BadgeColors {
    let (background, foreground) = match brand {
        Some(Brand::Visa) => ("#1A1F71", "#FFFFFF"),
        Some(Brand::MasterCard) => ("#EB001B", "#FFFFFF"),
        Some(Brand::AmericanExpress) => ("#007BC1", "#FFFFFF"),
        Some(Brand::DinersClub) => ("#004A97", "#FFFFFF"),
        Some(Brand::Discover) => ("#FF6600", "#FFFFFF"),
        Some(Brand::EnRoute) => ("#2E8B57", "#FFFFFF"),
        Some(Brand::Jcb) => ("#003087", "#FFFFFF"),
        Some(Brand::Voyager) => ("#6A0DAD", "#FFFFFF"),
        Some(Brand::HiperCard) => ("#C8102E", "#FFFFFF"),
        Some(Brand::Aura) => ("#FFD700", "#000000"),
        None => return NEUTRAL_BADGE,
    };
    BadgeColors {
        background,
        foreground,
    }
}

/// What the brand indicator should show for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BrandBadge {
    /// No input yet.
    Empty,
    /// Too few digits to call the number unrecognized.
    Typing,
    /// Enough digits, but no rule matched.
    Unrecognized,
    /// A rule matched.
    Known(Brand),
}

/// Derive the brand-badge state from a report.
pub fn brand_badge(report: &ValidationReport) -> BrandBadge {
    match report.brand {
        Some(brand) => BrandBadge::Known(brand),
        None if report.length == 0 => BrandBadge::Empty,
        None if report.length < BRAND_DECISION_MIN_LEN => BrandBadge::Typing,
        None => BrandBadge::Unrecognized,
    }
}

/// What the checksum indicator should show for a report.
///
/// The core always computes a definite boolean; this maps it to the states
/// a form presents, holding back a verdict until enough digits exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LuhnStatus {
    /// No input yet.
    Waiting,
    /// Below the decision threshold; keep a neutral state.
    Typing,
    /// Threshold reached but the brand is unrecognized.
    UnrecognizedBrand,
    /// Checksum passed.
    Valid,
    /// Checksum failed.
    Invalid,
}

/// Derive the checksum-indicator state from a report.
pub fn luhn_status(report: &ValidationReport) -> LuhnStatus {
    if report.length == 0 {
        LuhnStatus::Waiting
    } else if report.length < BRAND_DECISION_MIN_LEN {
        LuhnStatus::Typing
    } else if report.brand.is_none() {
        LuhnStatus::UnrecognizedBrand
    } else if report.luhn_valid {
        LuhnStatus::Valid
    } else {
        LuhnStatus::Invalid
    }
}
