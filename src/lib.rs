// SPDX-License-Identifier: MPL-2.0
//! `vidlens` is the playback core of a local-file video player.
//!
//! It keeps an observable playback state in sync with a native media
//! surface, persists the user's playback preferences and extracts detailed
//! media metadata in the background. Rendering is left to the embedding
//! presentation layer, which reads the store's cells and forwards user
//! intents to it.

#![doc(html_root_url = "https://docs.rs/vidlens/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod paths;
pub mod player;

#[cfg(test)]
pub(crate) mod test_utils;
