// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `fan_core` - Shared runtime state for controllable fans.
//!
//! This library models one fan as seen by the rest of a device: ON/OFF
//! state, speed level, oscillation and the declared traits. The hardware
//! backend and any number of frontends share a single [`FanState`] and learn
//! about changes through callbacks. Automation rules drive it through
//! preconfigured actions.
//!
//! # Features
//!
//! - **State**: getters and setters for state, speed and oscillation
//! - **Notifications**: ordered callbacks on every change, no deduplication
//! - **Traits**: declared oscillation/speed support, never enforced here
//! - **Persistence**: restore at boot and save on demand through a
//!   [`PreferenceStore`]
//! - **Automation**: turn-on, turn-off and toggle actions with fixed or
//!   input-dependent parameters
//!
//! Everything runs synchronously on the caller's thread.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use fan_core::{FanState, FanTraits};
//! use fan_core::automation::Action;
//! use fan_core::preferences::MemoryPreferences;
//! use fan_core::types::FanSpeed;
//!
//! let store = Arc::new(MemoryPreferences::new());
//!
//! // Configure and restore the last known state
//! let fan = FanState::builder("Living Room Fan")
//!     .with_traits(FanTraits::full())
//!     .with_preferences(store)
//!     .restore_on_build()
//!     .build();
//!
//! // Backend: drive the motor whenever something changes
//! fan.add_on_state_change_callback(|| {
//!     // read the state and update the PWM output
//! });
//!
//! // Frontend: apply a remote command
//! fan.set_state(true);
//! fan.set_speed_str("MEDIUM");
//!
//! // Automation: "turn on oscillating at low speed"
//! let action = fan
//!     .turn_on_action::<()>()
//!     .with_oscillating(true)
//!     .with_speed(FanSpeed::Low);
//! action.play(());
//!
//! fan.save_to_preferences();
//! assert_eq!(fan.get_speed(), FanSpeed::Low);
//! ```

pub mod automation;
mod capabilities;
pub mod error;
pub mod preferences;
pub mod state;
pub mod subscription;
pub mod types;

pub use automation::{
    Action, ActionList, FanAction, TemplatableValue, ToggleAction, TurnOffAction, TurnOnAction,
};
pub use capabilities::{FanTraits, FanTraitsBuilder};
pub use error::{Error, PreferenceError, Result, ValueError};
pub use preferences::{FanRecord, JsonFilePreferences, MemoryPreferences, PreferenceStore};
pub use state::{FanSnapshot, FanState, FanStateBuilder};
pub use subscription::CallbackRegistry;
pub use types::FanSpeed;
