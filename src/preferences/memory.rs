// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory preference store.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::{FanRecord, PreferenceStore};
use crate::error::PreferenceError;

/// Preference store backed by a process-local map.
///
/// Records are kept encoded, exactly as a flash-backed store would keep them,
/// so decoding failures surface the same way.
///
/// # Examples
///
/// ```
/// use fan_core::preferences::{FanRecord, MemoryPreferences, PreferenceStore};
/// use fan_core::types::FanSpeed;
///
/// let store = MemoryPreferences::new();
/// assert_eq!(store.load("fan").unwrap(), None);
///
/// let record = FanRecord { state: true, speed: FanSpeed::Low, oscillating: true };
/// store.save("fan", &record).unwrap();
/// assert_eq!(store.load("fan").unwrap(), Some(record));
/// ```
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryPreferences {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw bytes under `key`, bypassing encoding.
    pub fn insert_raw(&self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.write().insert(key.into(), bytes.into());
    }

    /// Returns whether a record exists under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Result<Option<FanRecord>, PreferenceError> {
        let entries = self.entries.read();
        let Some(bytes) = entries.get(key) else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(bytes)?))
    }

    fn save(&self, key: &str, record: &FanRecord) -> Result<(), PreferenceError> {
        let bytes = serde_json::to_vec(record)?;
        self.entries.write().insert(key.to_string(), bytes);
        Ok(())
    }
}
