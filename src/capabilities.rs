// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan traits (declared capabilities).
//!
//! Traits describe which optional features a fan supports. They are
//! configuration, not live state: a [`FanState`](crate::FanState) stores a
//! copy and never validates its setters against it. Frontends use the traits
//! to decide what to expose, backends to decide what to drive.

/// Capabilities of a fan.
///
/// # Examples
///
/// ```
/// use fan_core::FanTraits;
///
/// // Default traits: plain on/off fan
/// let basic = FanTraits::default();
/// assert!(!basic.supports_oscillation());
/// assert!(!basic.supports_speed());
///
/// // Fan with both optional features
/// let full = FanTraits::new(true, true);
/// assert_eq!(full, FanTraits::full());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FanTraits {
    /// Supports oscillation.
    #[serde(default)]
    pub oscillation: bool,

    /// Supports speed levels beyond off/full.
    #[serde(default)]
    pub speed: bool,
}

impl FanTraits {
    /// Creates traits with explicit feature flags.
    #[must_use]
    pub const fn new(oscillation: bool, speed: bool) -> Self {
        Self { oscillation, speed }
    }

    /// Traits for a plain on/off fan.
    #[must_use]
    pub const fn basic() -> Self {
        Self::new(false, false)
    }

    /// Traits for an on/off fan that can oscillate.
    #[must_use]
    pub const fn oscillating() -> Self {
        Self::new(true, false)
    }

    /// Traits for a fan with speed levels but no oscillation.
    #[must_use]
    pub const fn variable_speed() -> Self {
        Self::new(false, true)
    }

    /// Traits for a fan supporting every optional feature.
    #[must_use]
    pub const fn full() -> Self {
        Self::new(true, true)
    }

    /// Returns whether the fan supports oscillation.
    #[must_use]
    pub const fn supports_oscillation(&self) -> bool {
        self.oscillation
    }

    /// Sets whether the fan supports oscillation.
    pub fn set_oscillation(&mut self, supported: bool) {
        self.oscillation = supported;
    }

    /// Returns whether the fan supports speed levels.
    #[must_use]
    pub const fn supports_speed(&self) -> bool {
        self.speed
    }

    /// Sets whether the fan supports speed levels.
    pub fn set_speed(&mut self, supported: bool) {
        self.speed = supported;
    }
}

/// Builder for creating custom traits.
#[derive(Debug, Default)]
pub struct FanTraitsBuilder {
    inner: FanTraits,
}

impl FanTraitsBuilder {
    /// Creates a new builder with no optional features.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables oscillation support.
    #[must_use]
    pub fn with_oscillation(mut self) -> Self {
        self.inner.oscillation = true;
        self
    }

    /// Enables speed level support.
    #[must_use]
    pub fn with_speed(mut self) -> Self {
        self.inner.speed = true;
        self
    }

    /// Builds the traits.
    #[must_use]
    pub fn build(self) -> FanTraits {
        self.inner
    }
}
