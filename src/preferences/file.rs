// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Directory of JSON files, one per fan.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{FanRecord, PreferenceStore};
use crate::error::PreferenceError;

/// Preference store writing one `<key>.json` file per fan into a directory.
///
/// Keys are percent-encoded into file names, so `"Ceiling Fan"` is stored in
/// `Ceiling%20Fan.json`. The encoding is one-to-one: distinct names never
/// share a file.
///
/// The directory is created on the first save.
#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    dir: PathBuf,
}

impl JsonFilePreferences {
    /// Creates a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory records are written to.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file a key is stored in.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", urlencoding::encode(key)))
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn load(&self, key: &str) -> Result<Option<FanRecord>, PreferenceError> {
        let path = self.path_for(key);
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::trace!(path = %path.display(), "No stored fan record");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let record = serde_json::from_slice(&contents)?;
        tracing::debug!(path = %path.display(), "Read fan record");
        Ok(Some(record))
    }

    fn save(&self, key: &str, record: &FanRecord) -> Result<(), PreferenceError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let contents = serde_json::to_vec_pretty(record)?;
        fs::write(&path, contents)?;

        tracing::debug!(path = %path.display(), "Wrote fan record");
        Ok(())
    }
}
