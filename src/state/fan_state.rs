// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The shared fan state entity.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::automation::{ToggleAction, TurnOffAction, TurnOnAction};
use crate::capabilities::FanTraits;
use crate::error::{PreferenceError, Result};
use crate::preferences::{FanRecord, PreferenceStore};
use crate::subscription::CallbackRegistry;
use crate::types::FanSpeed;

use super::{FanSnapshot, FanStateBuilder};

/// Runtime state of one fan, shared by its backend and frontends.
///
/// A fan state holds the ON/OFF state, speed, oscillation flag and declared
/// [`FanTraits`]. The backend registers a callback to drive the motor when
/// the state changes; frontends register callbacks to report it and call
/// the setters when a remote command arrives.
///
/// All methods take `&self`, so the state can be shared by reference with
/// any number of [`TurnOnAction`]s, [`TurnOffAction`]s and [`ToggleAction`]s.
///
/// # Notifications
///
/// [`set_state`](Self::set_state), [`set_oscillating`](Self::set_oscillating)
/// and [`set_speed`](Self::set_speed) notify every registered callback on
/// every call, whether or not the value changed. Setting several fields
/// produces one notification round per setter.
///
/// # Traits Are Not Enforced
///
/// Setting oscillation on a fan whose traits do not declare it succeeds.
/// Checking [`get_traits`](Self::get_traits) is up to the caller.
///
/// # Examples
///
/// ```
/// use fan_core::{FanState, FanTraits};
/// use fan_core::types::FanSpeed;
///
/// let fan = FanState::new("Living Room Fan");
/// fan.set_traits(FanTraits::full());
///
/// assert!(!fan.get_state());
/// assert_eq!(fan.get_speed(), FanSpeed::High);
///
/// fan.set_state(true);
/// assert!(fan.set_speed_str("LOW"));
/// assert!(!fan.set_speed_str("warp"));
/// assert_eq!(fan.get_speed(), FanSpeed::Low);
/// ```
pub struct FanState {
    name: String,
    current: RwLock<FanRecord>,
    traits: RwLock<FanTraits>,
    state_callback: CallbackRegistry,
    preferences: Option<Arc<dyn PreferenceStore>>,
}

impl FanState {
    /// Creates a fan state with default values: off, speed HIGH, not
    /// oscillating, no declared traits.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_parts(name.into(), FanTraits::default(), None)
    }

    /// Starts building a fan state with traits and persistence.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> FanStateBuilder {
        FanStateBuilder::new(name)
    }

    pub(super) fn from_parts(
        name: String,
        traits: FanTraits,
        preferences: Option<Arc<dyn PreferenceStore>>,
    ) -> Self {
        Self {
            name,
            current: RwLock::new(FanRecord::default()),
            traits: RwLock::new(traits),
            state_callback: CallbackRegistry::new(),
            preferences,
        }
    }

    /// Returns the name identifying this fan.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a callback invoked after every state change.
    ///
    /// Callbacks cannot be removed and run in registration order.
    pub fn add_on_state_change_callback<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.state_callback.add(callback);
    }

    // ========== ON/OFF ==========

    /// Returns whether the fan is on.
    #[must_use]
    pub fn get_state(&self) -> bool {
        self.current.read().state
    }

    /// Sets the ON/OFF state and notifies callbacks.
    pub fn set_state(&self, state: bool) {
        self.current.write().state = state;
        tracing::trace!(fan = %self.name, state, "Fan state set");
        self.state_callback.call();
    }

    // ========== Oscillation ==========

    /// Returns whether the fan is oscillating.
    #[must_use]
    pub fn is_oscillating(&self) -> bool {
        self.current.read().oscillating
    }

    /// Sets the oscillation flag and notifies callbacks.
    pub fn set_oscillating(&self, oscillating: bool) {
        self.current.write().oscillating = oscillating;
        tracing::trace!(fan = %self.name, oscillating, "Fan oscillation set");
        self.state_callback.call();
    }

    // ========== Speed ==========

    /// Returns the current speed level.
    #[must_use]
    pub fn get_speed(&self) -> FanSpeed {
        self.current.read().speed
    }

    /// Sets the speed level and notifies callbacks.
    pub fn set_speed(&self, speed: FanSpeed) {
        self.current.write().speed = speed;
        tracing::trace!(fan = %self.name, speed = %speed, "Fan speed set");
        self.state_callback.call();
    }

    /// Parses `speed` and sets it.
    ///
    /// Accepts `OFF`, `LOW`, `MEDIUM` and `HIGH` (case-sensitive). Returns
    /// `false` for anything else, in which case the state is untouched and
    /// no callback runs.
    pub fn set_speed_str(&self, speed: &str) -> bool {
        match speed.parse::<FanSpeed>() {
            Ok(speed) => {
                self.set_speed(speed);
                true
            }
            Err(e) => {
                tracing::debug!(fan = %self.name, error = %e, "Ignoring unparseable speed");
                false
            }
        }
    }

    // ========== Traits ==========

    /// Returns the declared traits.
    #[must_use]
    pub fn get_traits(&self) -> FanTraits {
        *self.traits.read()
    }

    /// Replaces the declared traits. Does not notify.
    pub fn set_traits(&self, traits: FanTraits) {
        *self.traits.write() = traits;
    }

    /// Returns a copy of every field.
    #[must_use]
    pub fn snapshot(&self) -> FanSnapshot {
        FanSnapshot::new(*self.current.read(), self.get_traits())
    }

    // ========== Persistence ==========

    /// Returns whether a preference store is attached.
    #[must_use]
    pub fn has_preferences(&self) -> bool {
        self.preferences.is_some()
    }

    /// Restores state, speed and oscillation from the attached store.
    ///
    /// Does not notify callbacks. When no store is attached, no record
    /// exists, or the store fails, the current values are kept; failures
    /// are logged.
    pub fn load_from_preferences(&self) {
        let Some(store) = &self.preferences else {
            tracing::trace!(fan = %self.name, "No preference store attached, skipping restore");
            return;
        };

        match store.load(&self.name) {
            Ok(Some(record)) => {
                *self.current.write() = record;
                tracing::debug!(
                    fan = %self.name,
                    state = record.state,
                    speed = %record.speed,
                    oscillating = record.oscillating,
                    "Restored fan state"
                );
            }
            Ok(None) => {
                tracing::debug!(fan = %self.name, "No stored fan state, keeping defaults");
            }
            Err(e) => {
                tracing::warn!(fan = %self.name, error = %e, "Failed to restore fan state");
            }
        }
    }

    /// Writes state, speed and oscillation to the attached store.
    ///
    /// Storage failures are logged and otherwise ignored. Use
    /// [`try_save_to_preferences`](Self::try_save_to_preferences) to handle
    /// them.
    pub fn save_to_preferences(&self) {
        if self.preferences.is_none() {
            tracing::trace!(fan = %self.name, "No preference store attached, skipping save");
            return;
        }
        if let Err(e) = self.try_save_to_preferences() {
            tracing::warn!(fan = %self.name, error = %e, "Failed to save fan state");
        }
    }

    /// Writes state, speed and oscillation to the attached store.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::Unavailable`] if no store is attached, or
    /// the store's error if writing fails.
    pub fn try_save_to_preferences(&self) -> Result<()> {
        let store = self.preferences.as_ref().ok_or_else(|| {
            PreferenceError::Unavailable("no preference store attached".to_string())
        })?;

        let record = *self.current.read();
        store.save(&self.name, &record)?;
        tracing::debug!(fan = %self.name, "Saved fan state");
        Ok(())
    }

    // ========== Actions ==========

    /// Creates an action that turns this fan on.
    #[must_use]
    pub fn turn_on_action<T>(&self) -> TurnOnAction<'_, T> {
        TurnOnAction::new(self)
    }

    /// Creates an action that turns this fan off.
    #[must_use]
    pub fn turn_off_action<T>(&self) -> TurnOffAction<'_, T> {
        TurnOffAction::new(self)
    }

    /// Creates an action that toggles this fan.
    #[must_use]
    pub fn toggle_action<T>(&self) -> ToggleAction<'_, T> {
        ToggleAction::new(self)
    }
}

impl std::fmt::Debug for FanState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanState")
            .field("name", &self.name)
            .field("current", &*self.current.read())
            .field("traits", &*self.traits.read())
            .field("callbacks", &self.state_callback)
            .field("has_preferences", &self.has_preferences())
            .finish_non_exhaustive()
    }
}
