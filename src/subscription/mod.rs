// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for fan state changes.
//!
//! A [`FanState`](crate::FanState) owns a [`CallbackRegistry`]. Frontends
//! (which push state to a remote controller) and backends (which drive the
//! motor) register zero-argument callbacks and read whatever they need from
//! the state when called.
//!
//! # Usage
//!
//! ```
//! use fan_core::FanState;
//!
//! let fan = FanState::new("Ceiling Fan");
//! fan.add_on_state_change_callback(|| {
//!     println!("fan changed");
//! });
//!
//! fan.set_state(true); // prints once
//! fan.set_state(true); // prints again, no deduplication
//! ```
//!
//! # Delivery Guarantees
//!
//! - Every `set_state`, `set_oscillating` and `set_speed` call notifies, even
//!   when the new value equals the old one.
//! - Callbacks run synchronously on the caller's thread, in registration order.
//! - Traits changes and preference restores do not notify.

mod callback;

pub use callback::CallbackRegistry;
