// bandeira/src/rules/mod.rs

pub mod matcher;
pub mod table;

pub use matcher::{LengthRule, Matcher, prefix_in_range, starts_with_any};
pub use table::{BRAND_RULES, BrandRule};
