// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external tools and system I/O.
//!
//! # Available Adapters
//!
//! - [`mediainfo`]: Metadata extraction via the `mediainfo` CLI (implements [`MetadataAnalyzer`])
//! - [`storage`]: Preference files and resource URLs (implements [`PreferenceStore`] and [`ResourceRegistry`])
//!
//! [`MetadataAnalyzer`]: crate::application::port::MetadataAnalyzer
//! [`PreferenceStore`]: crate::application::port::PreferenceStore
//! [`ResourceRegistry`]: crate::application::port::ResourceRegistry

pub mod mediainfo;
pub mod storage;

// Re-export main types for convenience
pub use mediainfo::MediaInfoCli;
pub use storage::{LocalResourceRegistry, MemoryPreferenceStore, TomlPreferenceStore};
