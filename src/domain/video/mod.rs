// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback value objects that are independent of any
//! presentation or infrastructure concerns.

pub mod newtypes;
pub mod playback;

pub use newtypes::{PlaybackRate, Volume};
pub use playback::PlaybackState;
