// SPDX-License-Identifier: MPL-2.0
//! Local storage adapters: persisted preferences and resource URLs.

pub mod preferences;
pub mod resource;

pub use preferences::{MemoryPreferenceStore, TomlPreferenceStore, PREFERENCES_FILE};
pub use resource::LocalResourceRegistry;
