// bandeira/src/types.rs

use derive_more::Display;

use crate::Error;
use crate::constants::MAX_INPUT_LEN;
use std::convert::TryFrom;

/// Cleaned card number - Newtype Pattern (ASCII decimal digits only, may be empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct DigitString(String);

impl DigitString {
    /// Keep only the decimal digits of `raw`, preserving their order.
    ///
    /// Total over any input string; the result may be empty. Applying it to
    /// an already-clean string returns the same string.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.chars().filter(|c| c.is_ascii_digit()).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<&str> for DigitString {
    type Error = Error;

    /// Strict constructor mirroring an input field's keystroke filter:
    /// every character must be a decimal digit and the whole input must fit
    /// within `MAX_INPUT_LEN` digits.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        for (index, ch) in value.chars().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(Error::InvalidCharacter { ch, index });
            }
        }
        if value.len() > MAX_INPUT_LEN {
            return Err(Error::TooLong {
                max: MAX_INPUT_LEN,
                actual: value.len(),
            });
        }
        Ok(Self(value.to_string()))
    }
}

/// Payment-card network a number belongs to.
///
/// Variant order matches the detection rule table; display names match the
/// labels a form would render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Brand {
    #[display(fmt = "American Express")]
    AmericanExpress,
    #[display(fmt = "Diners Club")]
    DinersClub,
    #[display(fmt = "EnRoute")]
    EnRoute,
    #[display(fmt = "Voyager")]
    Voyager,
    #[display(fmt = "JCB")]
    Jcb,
    #[display(fmt = "HiperCard")]
    HiperCard,
    #[display(fmt = "Discover")]
    Discover,
    #[display(fmt = "Aura")]
    Aura,
    #[display(fmt = "MasterCard")]
    MasterCard,
    #[display(fmt = "Visa")]
    Visa,
}

impl Brand {
    /// Every brand, in rule-table order.
    pub const ALL: [Brand; 10] = [
        Brand::AmericanExpress,
        Brand::DinersClub,
        Brand::EnRoute,
        Brand::Voyager,
        Brand::Jcb,
        Brand::HiperCard,
        Brand::Discover,
        Brand::Aura,
        Brand::MasterCard,
        Brand::Visa,
    ];
}
