// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters and
//! the presentation layer implement. These traits use only domain types, so
//! the player store can be driven by fakes in tests.
//!
//! # Available Ports
//!
//! - [`surface`]: The native playback element
//! - [`metadata`]: Background metadata extraction
//! - [`preferences`]: Persisted key-value preferences
//! - [`resource`]: Ephemeral resource URLs for selected files
//!
//! # Design Notes
//!
//! - `MediaSurface` and `ResourceRegistry` are single-threaded (UI thread)
//! - `MetadataAnalyzer` is `Send + Sync`: it runs on the blocking pool
//! - Methods return `Result` with port-local error types

pub mod metadata;
pub mod preferences;
pub mod resource;
pub mod surface;

// Re-export main types for convenience
pub use metadata::{MetadataAnalyzer, MetadataError};
pub use preferences::PreferenceStore;
pub use resource::{ResourceRegistry, ResourceUrl};
pub use surface::{EventSender, ListenerId, MediaSurface, SurfaceError, SurfaceEvent};
