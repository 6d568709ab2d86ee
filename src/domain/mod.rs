// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with no I/O and no external crates.
//!
//! # Modules
//!
//! - [`media`]: The selected file ([`MediaFile`](media::MediaFile))
//! - [`metadata`]: Technical metadata ([`MetadataRecord`](metadata::MetadataRecord))
//! - [`video`]: Playback values ([`Volume`](video::Volume),
//!   [`PlaybackRate`](video::PlaybackRate), [`PlaybackState`](video::PlaybackState))

pub mod media;
pub mod metadata;
pub mod video;
