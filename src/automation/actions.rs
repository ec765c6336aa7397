// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Turn-on, turn-off and toggle actions.
//!
//! Each action borrows the [`FanState`] it controls, so the borrow checker
//! guarantees the state outlives every action bound to it.

use std::fmt;
use std::marker::PhantomData;

use crate::state::FanState;
use crate::types::FanSpeed;

use super::{Action, TemplatableValue, sealed};

/// Action that turns a fan on, optionally setting oscillation and speed.
///
/// Playing the action sets the state to ON, then applies the oscillation
/// parameter if configured, then the speed parameter if configured. Each of
/// those is a separate setter call and notifies on its own. Unconfigured
/// parameters leave the corresponding field untouched.
///
/// Parameters should be configured before the action is first played.
///
/// # Examples
///
/// ```
/// use fan_core::FanState;
/// use fan_core::automation::Action;
/// use fan_core::types::FanSpeed;
///
/// let fan = FanState::new("fan");
///
/// // Speed depends on the automation input (a temperature here)
/// let action = fan
///     .turn_on_action::<f32>()
///     .with_speed_from(|celsius| if *celsius > 28.0 { FanSpeed::High } else { FanSpeed::Low });
///
/// action.play(24.5);
/// assert!(fan.get_state());
/// assert_eq!(fan.get_speed(), FanSpeed::Low);
/// assert!(!fan.is_oscillating()); // untouched
/// ```
pub struct TurnOnAction<'a, T> {
    state: &'a FanState,
    oscillating: TemplatableValue<'a, bool, T>,
    speed: TemplatableValue<'a, FanSpeed, T>,
}

impl<'a, T> TurnOnAction<'a, T> {
    /// Creates an action bound to `state` with no parameters configured.
    #[must_use]
    pub fn new(state: &'a FanState) -> Self {
        Self {
            state,
            oscillating: TemplatableValue::Unset,
            speed: TemplatableValue::Unset,
        }
    }

    /// Returns the fan this action controls.
    #[must_use]
    pub fn state(&self) -> &'a FanState {
        self.state
    }

    /// Sets a fixed oscillation value to apply when playing.
    pub fn set_oscillating(&mut self, oscillating: bool) {
        self.oscillating = TemplatableValue::Constant(oscillating);
    }

    /// Sets a function computing the oscillation value from the input.
    pub fn set_oscillating_from<F>(&mut self, f: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'a,
    {
        self.oscillating = TemplatableValue::computed(f);
    }

    /// Sets a fixed speed to apply when playing.
    pub fn set_speed(&mut self, speed: FanSpeed) {
        self.speed = TemplatableValue::Constant(speed);
    }

    /// Sets a function computing the speed from the input.
    pub fn set_speed_from<F>(&mut self, f: F)
    where
        F: Fn(&T) -> FanSpeed + Send + Sync + 'a,
    {
        self.speed = TemplatableValue::computed(f);
    }

    /// Builder form of [`set_oscillating`](Self::set_oscillating).
    #[must_use]
    pub fn with_oscillating(mut self, oscillating: bool) -> Self {
        self.set_oscillating(oscillating);
        self
    }

    /// Builder form of [`set_oscillating_from`](Self::set_oscillating_from).
    #[must_use]
    pub fn with_oscillating_from<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'a,
    {
        self.set_oscillating_from(f);
        self
    }

    /// Builder form of [`set_speed`](Self::set_speed).
    #[must_use]
    pub fn with_speed(mut self, speed: FanSpeed) -> Self {
        self.set_speed(speed);
        self
    }

    /// Builder form of [`set_speed_from`](Self::set_speed_from).
    #[must_use]
    pub fn with_speed_from<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> FanSpeed + Send + Sync + 'a,
    {
        self.set_speed_from(f);
        self
    }
}

impl<T> sealed::Sealed for TurnOnAction<'_, T> {}

impl<T> Action<T> for TurnOnAction<'_, T> {
    fn play(&self, x: T) -> T {
        self.state.set_state(true);
        if let Some(oscillating) = self.oscillating.value(&x) {
            self.state.set_oscillating(oscillating);
        }
        if let Some(speed) = self.speed.value(&x) {
            self.state.set_speed(speed);
        }
        x
    }
}

impl<T> fmt::Debug for TurnOnAction<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnOnAction")
            .field("fan", &self.state.name())
            .field("oscillating", &self.oscillating)
            .field("speed", &self.speed)
            .finish()
    }
}

/// Action that turns a fan off.
///
/// # Examples
///
/// ```
/// use fan_core::FanState;
/// use fan_core::automation::Action;
///
/// let fan = FanState::new("fan");
/// fan.set_state(true);
///
/// fan.turn_off_action::<()>().play(());
/// assert!(!fan.get_state());
/// ```
pub struct TurnOffAction<'a, T> {
    state: &'a FanState,
    _input: PhantomData<fn(T)>,
}

impl<'a, T> TurnOffAction<'a, T> {
    /// Creates an action bound to `state`.
    #[must_use]
    pub fn new(state: &'a FanState) -> Self {
        Self {
            state,
            _input: PhantomData,
        }
    }

    /// Returns the fan this action controls.
    #[must_use]
    pub fn state(&self) -> &'a FanState {
        self.state
    }
}

impl<T> sealed::Sealed for TurnOffAction<'_, T> {}

impl<T> Action<T> for TurnOffAction<'_, T> {
    fn play(&self, x: T) -> T {
        self.state.set_state(false);
        x
    }
}

impl<T> fmt::Debug for TurnOffAction<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnOffAction")
            .field("fan", &self.state.name())
            .finish()
    }
}

/// Action that flips a fan between on and off.
///
/// The current state is read and its negation written with a single
/// [`FanState::set_state`] call. The read and the write are not atomic:
/// another context setting the state in between is overwritten.
///
/// # Examples
///
/// ```
/// use fan_core::FanState;
/// use fan_core::automation::Action;
///
/// let fan = FanState::new("fan");
/// let toggle = fan.toggle_action::<()>();
///
/// toggle.play(());
/// assert!(fan.get_state());
/// toggle.play(());
/// assert!(!fan.get_state());
/// ```
pub struct ToggleAction<'a, T> {
    state: &'a FanState,
    _input: PhantomData<fn(T)>,
}

impl<'a, T> ToggleAction<'a, T> {
    /// Creates an action bound to `state`.
    #[must_use]
    pub fn new(state: &'a FanState) -> Self {
        Self {
            state,
            _input: PhantomData,
        }
    }

    /// Returns the fan this action controls.
    #[must_use]
    pub fn state(&self) -> &'a FanState {
        self.state
    }
}

impl<T> sealed::Sealed for ToggleAction<'_, T> {}

impl<T> Action<T> for ToggleAction<'_, T> {
    fn play(&self, x: T) -> T {
        self.state.set_state(!self.state.get_state());
        x
    }
}

impl<T> fmt::Debug for ToggleAction<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleAction")
            .field("fan", &self.state.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::RwLock;
    use std::sync::Arc;

    /// Records what every notification round observed.
    fn recorder(fan: &Arc<FanState>) -> Arc<RwLock<Vec<(bool, bool, FanSpeed)>>> {
        let log = Arc::new(RwLock::new(Vec::new()));
        let log_clone = log.clone();
        let weak = Arc::downgrade(fan);
        fan.add_on_state_change_callback(move || {
            if let Some(fan) = weak.upgrade() {
                log_clone
                    .write()
                    .push((fan.get_state(), fan.is_oscillating(), fan.get_speed()));
            }
        });
        log
    }

    #[test]
    fn turn_on_without_parameters_only_sets_state() {
        let fan = Arc::new(FanState::new("fan"));
        fan.set_oscillating(true);
        fan.set_speed(FanSpeed::Low);
        let log = recorder(&fan);

        fan.turn_on_action::<()>().play(());

        assert!(fan.get_state());
        assert!(fan.is_oscillating());
        assert_eq!(fan.get_speed(), FanSpeed::Low);
        assert_eq!(log.read().len(), 1);
    }

    #[test]
    fn turn_on_with_speed_leaves_oscillation() {
        let fan = Arc::new(FanState::new("fan"));
        let log = recorder(&fan);

        fan.turn_on_action::<u8>()
            .with_speed(FanSpeed::Medium)
            .play(0);

        assert!(fan.get_state());
        assert_eq!(fan.get_speed(), FanSpeed::Medium);
        assert!(!fan.is_oscillating());
        assert_eq!(
            *log.read(),
            vec![(true, false, FanSpeed::High), (true, false, FanSpeed::Medium)]
        );
    }

    #[test]
    fn turn_on_applies_state_then_oscillation_then_speed() {
        let fan = Arc::new(FanState::new("fan"));
        let log = recorder(&fan);

        let mut action = TurnOnAction::new(&fan);
        action.set_oscillating(true);
        action.set_speed(FanSpeed::Low);
        action.play(());

        assert_eq!(
            *log.read(),
            vec![
                (true, false, FanSpeed::High),
                (true, true, FanSpeed::High),
                (true, true, FanSpeed::Low),
            ]
        );
    }

    #[test]
    fn turn_on_computes_parameters_from_input() {
        let fan = FanState::new("fan");
        let mut action = fan.turn_on_action::<(bool, u8)>();
        action.set_oscillating_from(|(osc, _)| *osc);
        action.set_speed_from(|(_, level)| FanSpeed::try_from(*level).unwrap_or_default());

        assert_eq!(action.play((true, 1)), (true, 1));
        assert!(fan.is_oscillating());
        assert_eq!(fan.get_speed(), FanSpeed::Low);

        action.play((false, 9));
        assert!(!fan.is_oscillating());
        assert_eq!(fan.get_speed(), FanSpeed::High);
    }

    #[test]
    fn turn_on_is_repeatable() {
        let fan = FanState::new("fan");
        let action = fan
            .turn_on_action::<()>()
            .with_oscillating(true)
            .with_speed(FanSpeed::Low);

        action.play(());
        fan.set_state(false);
        fan.set_speed(FanSpeed::High);
        action.play(());

        assert!(fan.get_state());
        assert_eq!(fan.get_speed(), FanSpeed::Low);
    }

    #[test]
    fn turn_off_from_any_state() {
        let fan = FanState::new("fan");
        let action = fan.turn_off_action::<()>();

        action.play(());
        assert!(!fan.get_state());

        fan.set_state(true);
        action.play(());
        assert!(!fan.get_state());
    }

    #[test]
    fn turn_off_notifies_once() {
        let fan = Arc::new(FanState::new("fan"));
        let log = recorder(&fan);

        TurnOffAction::new(&fan).play(());
        assert_eq!(*log.read(), vec![(false, false, FanSpeed::High)]);
    }

    #[test]
    fn toggle_flips_both_ways() {
        let fan = Arc::new(FanState::new("fan"));
        let log = recorder(&fan);
        let toggle = ToggleAction::new(&fan);

        toggle.play(());
        assert!(fan.get_state());
        toggle.play(());
        assert!(!fan.get_state());
        assert_eq!(log.read().len(), 2);
    }

    #[test]
    fn actions_forward_input_unchanged() {
        let fan = FanState::new("fan");
        let input = String::from("motion detected");

        let out = fan.turn_on_action::<String>().play(input.clone());
        let out = fan.toggle_action::<String>().play(out);
        let out = fan.turn_off_action::<String>().play(out);
        assert_eq!(out, input);
    }

    #[test]
    fn state_accessor_returns_bound_fan() {
        let fan = FanState::new("porch");
        assert_eq!(fan.turn_on_action::<()>().state().name(), "porch");
        assert_eq!(fan.turn_off_action::<()>().state().name(), "porch");
        assert_eq!(fan.toggle_action::<()>().state().name(), "porch");
    }

    #[test]
    fn debug_output() {
        let fan = FanState::new("fan");
        let action = fan.turn_on_action::<()>().with_speed(FanSpeed::Low);
        let debug = format!("{action:?}");
        assert!(debug.contains("TurnOnAction"));
        assert!(debug.contains("Constant(Low)"));
        assert!(debug.contains("oscillating: Unset"));

        assert!(format!("{:?}", fan.toggle_action::<()>()).contains("ToggleAction"));
    }
}
