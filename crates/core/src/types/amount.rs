use std::fmt;

use alloy::primitives::{
    U256,
    utils::{ParseUnits, Unit},
};
use serde::{Serialize, Serializer};

use crate::error::AmountError;

/// A whole number of base units shown with a fixed number of decimals.
///
/// The raw integer is kept as-is, so any on-chain value can be held and
/// displayed without rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenAmount {
    raw: U256,
    decimals: u8,
}

impl TokenAmount {
    pub const fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    pub const fn zero(decimals: u8) -> Self {
        Self::new(U256::ZERO, decimals)
    }

    pub const fn raw(&self) -> U256 {
        self.raw
    }

    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Parse a display amount such as `"2.5"` into base units.
    pub fn parse(display: &str, decimals: u8) -> Result<Self, AmountError> {
        let display = display.trim();
        if display.starts_with('-') {
            return Err(AmountError::Negative);
        }

        let (whole, fraction) = display.split_once('.').unwrap_or((display, ""));
        let is_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
            return Err(AmountError::Malformed(display.to_owned()));
        }

        // parse_units drops excess fractional digits instead of failing.
        let excess = fraction.get(usize::from(decimals)..).unwrap_or_default();
        if excess.bytes().any(|byte| byte != b'0') {
            return Err(AmountError::NotRepresentable { decimals });
        }

        let unit = Unit::new(decimals).ok_or(AmountError::Overflow { decimals })?;
        match ParseUnits::parse_units(display, unit) {
            Ok(ParseUnits::U256(raw)) => Ok(Self::new(raw, decimals)),
            _ => Err(AmountError::Overflow { decimals }),
        }
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match Unit::new(self.decimals) {
            Some(unit) => ParseUnits::U256(self.raw).format_units(unit),
            // Past 10^77 every U256 is below one whole unit.
            None => format!(
                "0.{:0>width$}",
                self.raw.to_string(),
                width = usize::from(self.decimals)
            ),
        };
        f.write_str(text.trim_end_matches('0').trim_end_matches('.'))
    }
}

impl Serialize for TokenAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
