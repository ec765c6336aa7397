// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan state builder.

use std::sync::Arc;

use crate::capabilities::FanTraits;
use crate::preferences::PreferenceStore;

use super::FanState;

/// Builder for configuring a [`FanState`] at device setup time.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use fan_core::{FanState, FanTraits};
/// use fan_core::preferences::MemoryPreferences;
///
/// let store = Arc::new(MemoryPreferences::new());
///
/// let fan = FanState::builder("Bedroom Fan")
///     .with_traits(FanTraits::full())
///     .with_preferences(store)
///     .restore_on_build()
///     .build();
///
/// assert!(fan.get_traits().supports_speed());
/// assert!(fan.has_preferences());
/// ```
pub struct FanStateBuilder {
    name: String,
    traits: FanTraits,
    preferences: Option<Arc<dyn PreferenceStore>>,
    restore: bool,
}

impl FanStateBuilder {
    /// Creates a builder for a fan with the given name.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            traits: FanTraits::default(),
            preferences: None,
            restore: false,
        }
    }

    /// Sets the declared traits.
    #[must_use]
    pub fn with_traits(mut self, traits: FanTraits) -> Self {
        self.traits = traits;
        self
    }

    /// Attaches a preference store, keyed by the fan's name.
    #[must_use]
    pub fn with_preferences(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.preferences = Some(store);
        self
    }

    /// Restores the persisted state when building.
    ///
    /// Has no effect without [`with_preferences`](Self::with_preferences).
    #[must_use]
    pub fn restore_on_build(mut self) -> Self {
        self.restore = true;
        self
    }

    /// Returns the currently set traits.
    #[must_use]
    pub fn traits(&self) -> &FanTraits {
        &self.traits
    }

    /// Builds the fan state.
    ///
    /// No callback can be registered yet, so a restore here never notifies.
    #[must_use]
    pub fn build(self) -> FanState {
        let fan = FanState::from_parts(self.name, self.traits, self.preferences);
        if self.restore {
            fan.load_from_preferences();
        }
        fan
    }
}

impl std::fmt::Debug for FanStateBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanStateBuilder")
            .field("name", &self.name)
            .field("traits", &self.traits)
            .field("has_preferences", &self.preferences.is_some())
            .field("restore", &self.restore)
            .finish()
    }
}
