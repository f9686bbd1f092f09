//! Validated kline interval codes.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeframeError {
    #[error("Invalid amount for {:?}: {}", unit, message)]
    InvalidAmount {
        unit: TimeframeUnit,
        message: String,
    },

    #[error("Invalid input: {}", message)]
    InvalidInput { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeframeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl TimeframeUnit {
    fn suffix(self) -> char {
        match self {
            TimeframeUnit::Minute => 'm',
            TimeframeUnit::Hour => 'h',
            TimeframeUnit::Day => 'd',
            TimeframeUnit::Week => 'w',
            TimeframeUnit::Month => 'M',
        }
    }
}

/// An interval code governing the granularity of a kline series, e.g. "4h".
///
/// Only the codes the provider's kline endpoint accepts can be constructed;
/// everything else is rejected with [`TimeframeError`] at the edge instead
/// of surfacing later as a per-symbol API error. The code passes through the
/// pipeline by value and never changes mid-run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timeframe {
    amount: u32,
    unit: TimeframeUnit,
}

impl Timeframe {
    pub fn new(amount: u32, unit: TimeframeUnit) -> Result<Self, TimeframeError> {
        Self::validate(amount, unit)?;
        Ok(Self { amount, unit })
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn unit(&self) -> TimeframeUnit {
        self.unit
    }

    /// Wall-clock span covered by one kline of this timeframe.
    ///
    /// Months are approximated as 30 days; the scheduler only uses this as
    /// a default cadence, not for bucket arithmetic.
    pub fn duration(&self) -> Duration {
        let secs = match self.unit {
            TimeframeUnit::Minute => 60,
            TimeframeUnit::Hour => 3_600,
            TimeframeUnit::Day => 86_400,
            TimeframeUnit::Week => 7 * 86_400,
            TimeframeUnit::Month => 30 * 86_400,
        };
        Duration::from_secs(u64::from(self.amount) * secs)
    }

    fn validate(amount: u32, unit: TimeframeUnit) -> Result<(), TimeframeError> {
        let allowed: &[u32] = match unit {
            TimeframeUnit::Minute => &[1, 3, 5, 15, 30],
            TimeframeUnit::Hour => &[1, 2, 4, 6, 8, 12],
            TimeframeUnit::Day => &[1, 3],
            TimeframeUnit::Week => &[1],
            TimeframeUnit::Month => &[1],
        };
        if allowed.contains(&amount) {
            Ok(())
        } else {
            Err(TimeframeError::InvalidAmount {
                unit,
                message: format!(
                    "amount {} is not supported, allowed amounts are {:?}",
                    amount, allowed
                ),
            })
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((split, suffix)) = s.char_indices().last() else {
            return Err(TimeframeError::InvalidInput {
                message: format!("'{}' is not an interval code", s),
            });
        };
        let amount: u32 = s[..split]
            .parse()
            .map_err(|_| TimeframeError::InvalidInput {
                message: format!("'{}' does not start with a numeric amount", s),
            })?;
        let unit = match suffix {
            'm' => TimeframeUnit::Minute,
            'h' => TimeframeUnit::Hour,
            'd' => TimeframeUnit::Day,
            'w' => TimeframeUnit::Week,
            'M' => TimeframeUnit::Month,
            _ => {
                return Err(TimeframeError::InvalidInput {
                    message: format!("unknown interval unit '{}'", suffix),
                });
            }
        };
        Self::new(amount, unit)
    }
}

impl TryFrom<String> for Timeframe {
    type Error = TimeframeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timeframe> for String {
    fn from(value: Timeframe) -> Self {
        value.to_string()
    }
}
