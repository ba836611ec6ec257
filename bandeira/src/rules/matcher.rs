// bandeira/src/rules/matcher.rs

//! Predicate primitives for brand-detection rules.
//!
//! A matcher is plain data describing one prefix test; the generic evaluator
//! in `classify` interprets it against the table in `table`.

/// True if `digits` begins with any of `prefixes`.
///
/// Prefixes are compared as literal digit strings, so leading zeros are
/// significant.
pub fn starts_with_any(digits: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| digits.starts_with(p))
}

/// True if the first `len` digits of `digits`, read as an unsigned integer,
/// fall within `[low, high]` inclusive. Fewer than `len` digits never match.
pub fn prefix_in_range(digits: &str, len: usize, low: u32, high: u32) -> bool {
    let prefix = match digits.get(..len) {
        Some(p) => p,
        None => return false,
    };
    match prefix.parse::<u32>() {
        Ok(value) => low <= value && value <= high,
        Err(_) => false,
    }
}

/// One prefix test over a cleaned digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Any of these literal digit prefixes.
    Prefix(&'static [&'static str]),
    /// First `len` digits parsed as an integer within `[low, high]`.
    PrefixRange {
        /// Number of leading digits to read.
        len: usize,
        /// Inclusive lower bound.
        low: u32,
        /// Inclusive upper bound.
        high: u32,
    },
}

impl Matcher {
    /// Evaluate this matcher against `digits`.
    pub fn matches(&self, digits: &str) -> bool {
        match self {
            Matcher::Prefix(prefixes) => starts_with_any(digits, prefixes),
            Matcher::PrefixRange { len, low, high } => {
                prefix_in_range(digits, *len, *low, *high)
            }
        }
    }
}

/// Digit-count constraint attached to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// Exactly this many digits.
    Exact(usize),
    /// Any of these digit counts.
    OneOf(&'static [usize]),
}

impl LengthRule {
    /// True if a number of `len` digits satisfies this constraint.
    pub fn permits(&self, len: usize) -> bool {
        match self {
            LengthRule::Exact(expected) => len == *expected,
            LengthRule::OneOf(choices) => choices.contains(&len),
        }
    }
}
