// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Automation actions for fans.
//!
//! Actions are configured once (usually at device setup) and played any
//! number of times by an automation engine, each time with an input value
//! coming from the trigger: a temperature reading, a button press count, a
//! remote payload.
//!
//! # Available Actions
//!
//! | Action | Effect |
//! |--------|--------|
//! | [`TurnOnAction`] | ON, then optional oscillation, then optional speed |
//! | [`TurnOffAction`] | OFF |
//! | [`ToggleAction`] | flips ON/OFF |
//!
//! The set is closed: [`Action`] is sealed and [`FanAction`] holds any of
//! the three.
//!
//! # Chaining
//!
//! [`Action::play`] hands its input back once the action is done. That
//! value is what the engine passes to the next step. [`ActionList`] is a
//! minimal engine doing exactly that.
//!
//! ```
//! use fan_core::FanState;
//! use fan_core::automation::ActionList;
//! use fan_core::types::FanSpeed;
//!
//! let fan = FanState::new("fan");
//!
//! let mut on_hot = ActionList::<f32>::new();
//! on_hot.add(fan.turn_on_action::<f32>().with_speed(FanSpeed::High));
//! on_hot.add(fan.toggle_action::<f32>());
//!
//! let input = on_hot.play(31.5_f32);
//! assert_eq!(input, 31.5);
//! assert!(!fan.get_state());
//! ```

mod actions;
mod templatable;

pub use actions::{ToggleAction, TurnOffAction, TurnOnAction};
pub use templatable::TemplatableValue;

use std::fmt;

use crate::state::FanState;

mod sealed {
    pub trait Sealed {}
}

/// An operation applied to a fan when an automation step runs.
///
/// This trait is sealed; it is implemented by the three fan actions and by
/// [`FanAction`].
pub trait Action<T>: sealed::Sealed {
    /// Applies the action and returns `x` unchanged for the next step.
    fn play(&self, x: T) -> T;
}

/// Any of the fan actions.
pub enum FanAction<'a, T> {
    /// Turn the fan on.
    TurnOn(TurnOnAction<'a, T>),
    /// Turn the fan off.
    TurnOff(TurnOffAction<'a, T>),
    /// Toggle the fan.
    Toggle(ToggleAction<'a, T>),
}

impl<'a, T> FanAction<'a, T> {
    /// Returns a short name for the action kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TurnOn(_) => "turn_on",
            Self::TurnOff(_) => "turn_off",
            Self::Toggle(_) => "toggle",
        }
    }

    /// Returns the fan the action controls.
    #[must_use]
    pub fn state(&self) -> &'a FanState {
        match self {
            Self::TurnOn(action) => action.state(),
            Self::TurnOff(action) => action.state(),
            Self::Toggle(action) => action.state(),
        }
    }
}

impl<T> sealed::Sealed for FanAction<'_, T> {}

impl<T> Action<T> for FanAction<'_, T> {
    fn play(&self, x: T) -> T {
        tracing::trace!(fan = %self.state().name(), action = self.kind(), "Playing fan action");
        match self {
            Self::TurnOn(action) => action.play(x),
            Self::TurnOff(action) => action.play(x),
            Self::Toggle(action) => action.play(x),
        }
    }
}

impl<'a, T> From<TurnOnAction<'a, T>> for FanAction<'a, T> {
    fn from(action: TurnOnAction<'a, T>) -> Self {
        Self::TurnOn(action)
    }
}

impl<'a, T> From<TurnOffAction<'a, T>> for FanAction<'a, T> {
    fn from(action: TurnOffAction<'a, T>) -> Self {
        Self::TurnOff(action)
    }
}

impl<'a, T> From<ToggleAction<'a, T>> for FanAction<'a, T> {
    fn from(action: ToggleAction<'a, T>) -> Self {
        Self::Toggle(action)
    }
}

impl<T> fmt::Debug for FanAction<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnOn(action) => f.debug_tuple("TurnOn").field(action).finish(),
            Self::TurnOff(action) => f.debug_tuple("TurnOff").field(action).finish(),
            Self::Toggle(action) => f.debug_tuple("Toggle").field(action).finish(),
        }
    }
}

/// Ordered chain of fan actions sharing one input.
pub struct ActionList<'a, T> {
    actions: Vec<FanAction<'a, T>>,
}

impl<'a, T> ActionList<'a, T> {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Appends an action to the end of the chain.
    pub fn add(&mut self, action: impl Into<FanAction<'a, T>>) {
        self.actions.push(action.into());
    }

    /// Builder form of [`add`](Self::add).
    #[must_use]
    pub fn then(mut self, action: impl Into<FanAction<'a, T>>) -> Self {
        self.add(action);
        self
    }

    /// Plays every action in order, passing `x` from one to the next.
    pub fn play(&self, x: T) -> T {
        self.actions.iter().fold(x, |x, action| action.play(x))
    }

    /// Returns the number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if the chain has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterates over the actions in play order.
    pub fn iter(&self) -> impl Iterator<Item = &FanAction<'a, T>> {
        self.actions.iter()
    }
}

impl<T> Default for ActionList<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ActionList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.actions).finish()
    }
}
