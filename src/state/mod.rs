// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan state management types.
//!
//! [`FanState`] is the single source of truth for one fan. It is configured
//! with a [`FanStateBuilder`] and can be copied out as a [`FanSnapshot`].
//!
//! # Examples
//!
//! ```
//! use fan_core::state::FanState;
//! use fan_core::types::FanSpeed;
//!
//! let fan = FanState::new("fan");
//! fan.set_state(true);
//! fan.set_speed(FanSpeed::Medium);
//!
//! let snapshot = fan.snapshot();
//! assert!(snapshot.state);
//! assert_eq!(snapshot.speed, FanSpeed::Medium);
//! ```

mod builder;
mod fan_state;
mod snapshot;

pub use builder::FanStateBuilder;
pub use fan_state::FanState;
pub use snapshot::FanSnapshot;
