// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point-in-time copy of a fan state.

use serde::{Deserialize, Serialize};

use crate::capabilities::FanTraits;
use crate::preferences::FanRecord;
use crate::types::FanSpeed;

/// Copy of every field of a [`FanState`](super::FanState), taken at once.
///
/// Frontends that report the whole state in one message should read a
/// snapshot rather than calling each getter, since a setter may run in
/// between.
///
/// # Examples
///
/// ```
/// use fan_core::FanState;
/// use fan_core::types::FanSpeed;
///
/// let fan = FanState::new("fan");
/// fan.set_state(true);
///
/// let snapshot = fan.snapshot();
/// assert!(snapshot.state);
/// assert_eq!(snapshot.speed, FanSpeed::High);
/// assert!(snapshot.is_running());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanSnapshot {
    /// ON/OFF state.
    pub state: bool,
    /// Speed level.
    pub speed: FanSpeed,
    /// Oscillation flag.
    pub oscillating: bool,
    /// Declared traits.
    pub traits: FanTraits,
}

impl FanSnapshot {
    pub(super) fn new(record: FanRecord, traits: FanTraits) -> Self {
        Self {
            state: record.state,
            speed: record.speed,
            oscillating: record.oscillating,
            traits,
        }
    }

    /// Returns the persisted subset of this snapshot.
    #[must_use]
    pub fn record(&self) -> FanRecord {
        FanRecord {
            state: self.state,
            speed: self.speed,
            oscillating: self.oscillating,
        }
    }

    /// Returns whether the fan is on with a speed other than OFF.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state && self.speed.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_drops_traits() {
        let record = FanRecord {
            state: true,
            speed: FanSpeed::Low,
            oscillating: true,
        };
        let snapshot = FanSnapshot::new(record, FanTraits::full());
        assert_eq!(snapshot.record(), record);
    }

    #[test]
    fn on_with_speed_off_is_not_running() {
        let snapshot = FanSnapshot::new(
            FanRecord {
                state: true,
                speed: FanSpeed::Off,
                oscillating: false,
            },
            FanTraits::variable_speed(),
        );
        assert!(!snapshot.is_running());
    }

    #[test]
    fn off_is_not_running() {
        let snapshot = FanSnapshot::new(FanRecord::default(), FanTraits::basic());
        assert!(!snapshot.is_running());
    }
}
