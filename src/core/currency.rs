use serde::{Deserialize, Serialize};
use std::fmt;

use rust_decimal::Decimal;

/// Supported currencies with their decimal precision rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar (2 decimal places)
    USD,
    /// Euro (2 decimal places)
    EUR,
    /// Pound Sterling (2 decimal places)
    GBP,
    /// Japanese Yen (no decimal places)
    JPY,
}

impl Currency {
    /// Returns the standard decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::USD | Currency::EUR | Currency::GBP => 2,
            Currency::JPY => 0,
        }
    }

    /// Scale used for distance-rate amounts: one extra decimal digit beyond
    /// the standard currency scale, so sub-cent per-distance rates survive.
    pub fn display_scale(&self) -> u32 {
        self.scale() + 1
    }

    /// Rounds an amount to the display scale
    pub fn round_display(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.display_scale())
    }
}

impl Default for Currency {
    /// Fallback currency when a rate carries none
    fn default() -> Self {
        Currency::USD
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::USD => write!(f, "USD"),
            Currency::EUR => write!(f, "EUR"),
            Currency::GBP => write!(f, "GBP"),
            Currency::JPY => write!(f, "JPY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
