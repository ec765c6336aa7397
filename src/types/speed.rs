// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Discrete fan speed levels.
//!
//! # State Methods
//!
//! Use [`FanSpeed`] with these [`FanState`](crate::FanState) methods:
//! - [`set_speed()`](crate::FanState::set_speed) - Set the speed level
//! - [`set_speed_str()`](crate::FanState::set_speed_str) - Parse and set from text
//! - [`get_speed()`](crate::FanState::get_speed) - Query the current level

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Speed level of a fan.
///
/// The default is [`FanSpeed::High`], even though a freshly created fan is
/// off: a fan without variable speed runs at full speed when switched on.
///
/// # Examples
///
/// ```
/// use fan_core::types::FanSpeed;
///
/// assert_eq!(FanSpeed::default(), FanSpeed::High);
/// assert_eq!(FanSpeed::Low.as_str(), "LOW");
/// assert_eq!("MEDIUM".parse::<FanSpeed>().unwrap(), FanSpeed::Medium);
/// assert!("medium".parse::<FanSpeed>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum FanSpeed {
    /// The fan is off. Combined with an ON state the fan should not spin.
    Off,
    /// Low speed.
    Low,
    /// Medium speed.
    Medium,
    /// High/full speed.
    #[default]
    High,
}

impl FanSpeed {
    /// All levels, slowest first.
    pub const ALL: [Self; 4] = [Self::Off, Self::Low, Self::Medium, Self::High];

    /// Largest numeric value.
    pub const MAX: u8 = 3;

    /// Returns the textual representation accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Returns the numeric level (0 = off, 3 = high).
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Returns whether this level makes the fan spin at all.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanSpeed {
    type Err = ValueError;

    /// Parses one of `OFF`, `LOW`, `MEDIUM`, `HIGH`. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OFF" => Ok(Self::Off),
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(ValueError::InvalidSpeed(s.to_string())),
        }
    }
}

impl TryFrom<u8> for FanSpeed {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(ValueError::OutOfRange {
                min: 0,
                max: Self::MAX,
                actual: value,
            })
    }
}

impl From<FanSpeed> for u8 {
    fn from(speed: FanSpeed) -> Self {
        speed.as_num()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_high() {
        assert_eq!(FanSpeed::default(), FanSpeed::High);
    }

    #[test]
    fn parse_vocabulary() {
        assert_eq!("OFF".parse::<FanSpeed>().unwrap(), FanSpeed::Off);
        assert_eq!("LOW".parse::<FanSpeed>().unwrap(), FanSpeed::Low);
        assert_eq!("MEDIUM".parse::<FanSpeed>().unwrap(), FanSpeed::Medium);
        assert_eq!("HIGH".parse::<FanSpeed>().unwrap(), FanSpeed::High);
    }

    #[test]
    fn parse_is_case_sensitive() {
        for input in ["low", "Low", " LOW", "LOW ", "", "bogus", "2"] {
            let result = input.parse::<FanSpeed>();
            assert_eq!(result, Err(ValueError::InvalidSpeed(input.to_string())));
        }
    }

    #[test]
    fn display_matches_vocabulary() {
        for speed in FanSpeed::ALL {
            assert_eq!(speed.to_string().parse::<FanSpeed>().unwrap(), speed);
        }
    }

    #[test]
    fn numeric_levels() {
        assert_eq!(FanSpeed::Off.as_num(), 0);
        assert_eq!(FanSpeed::High.as_num(), 3);
        assert_eq!(FanSpeed::try_from(2).unwrap(), FanSpeed::Medium);
        assert_eq!(u8::from(FanSpeed::Low), 1);
    }

    #[test]
    fn numeric_out_of_range() {
        assert_eq!(
            FanSpeed::try_from(4),
            Err(ValueError::OutOfRange {
                min: 0,
                max: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn ordering_follows_level() {
        assert!(FanSpeed::Off < FanSpeed::Low);
        assert!(FanSpeed::Medium < FanSpeed::High);
        assert!(!FanSpeed::Off.is_running());
        assert!(FanSpeed::Low.is_running());
    }

    #[test]
    fn serde_uses_literals() {
        let json = serde_json::to_string(&FanSpeed::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
        let parsed: FanSpeed = serde_json::from_str("\"OFF\"").unwrap();
        assert_eq!(parsed, FanSpeed::Off);
    }
}
