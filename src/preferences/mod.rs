// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Persistence of the last known fan state.
//!
//! A [`FanState`](crate::FanState) can be attached to a [`PreferenceStore`].
//! The store is keyed by the fan's name and holds a small [`FanRecord`]. The
//! fan reads it once at boot ([`load_from_preferences`]) and writes it when
//! the host asks ([`save_to_preferences`]).
//!
//! Two stores are provided:
//!
//! - [`MemoryPreferences`] - process-local map, useful for tests and hosts
//!   without non-volatile storage
//! - [`JsonFilePreferences`] - one JSON file per fan in a directory
//!
//! Real devices usually implement [`PreferenceStore`] on top of their flash
//! or NVS driver.
//!
//! [`load_from_preferences`]: crate::FanState::load_from_preferences
//! [`save_to_preferences`]: crate::FanState::save_to_preferences

mod file;
mod memory;

pub use file::JsonFilePreferences;
pub use memory::MemoryPreferences;

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;
use crate::types::FanSpeed;

/// Persisted subset of a fan's state.
///
/// Traits are configuration and are never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanRecord {
    /// ON/OFF state.
    pub state: bool,
    /// Speed level.
    pub speed: FanSpeed,
    /// Oscillation flag.
    pub oscillating: bool,
}

/// Key-value storage for [`FanRecord`]s.
///
/// Implementations must treat a missing key as `Ok(None)`, not as an error.
pub trait PreferenceStore: Send + Sync {
    /// Loads the record stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or the stored
    /// bytes do not decode to a [`FanRecord`].
    fn load(&self, key: &str) -> Result<Option<FanRecord>, PreferenceError>;

    /// Stores `record` under `key`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    fn save(&self, key: &str, record: &FanRecord) -> Result<(), PreferenceError>;
}
