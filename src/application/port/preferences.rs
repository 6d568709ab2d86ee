// SPDX-License-Identifier: MPL-2.0
//! Preference storage port definition.
//!
//! A [`PreferenceStore`] is a flat string key-value store, the shape browser
//! local storage has. Typed decoding and fallbacks live in
//! [`Preferences`](crate::player::Preferences), not in the store.

use crate::error::Result;

/// Port for persisting small user preferences.
pub trait PreferenceStore {
    /// Reads a value; `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
