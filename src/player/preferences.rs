// SPDX-License-Identifier: MPL-2.0
//! Persisted playback preferences.
//!
//! Volume, mute, playback rate and loop survive restarts. They are read once
//! when the store is created and written through on every change. Neither
//! direction ever fails: unreadable values fall back to defaults and write
//! errors are logged.

use crate::application::port::PreferenceStore;
use crate::config::{DEFAULT_LOOP, DEFAULT_MUTED};
use crate::domain::video::{PlaybackRate, Volume};

pub const VOLUME_KEY: &str = "videoPlayer.volume";
pub const MUTED_KEY: &str = "videoPlayer.isMuted";
pub const PLAYBACK_RATE_KEY: &str = "videoPlayer.playbackRate";
pub const LOOP_KEY: &str = "videoPlayer.loop";

/// Playback preferences as loaded at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub volume: Volume,
    pub muted: bool,
    pub playback_rate: PlaybackRate,
    pub loop_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            volume: Volume::default(),
            muted: DEFAULT_MUTED,
            playback_rate: PlaybackRate::default(),
            loop_enabled: DEFAULT_LOOP,
        }
    }
}

impl Preferences {
    /// Reads all preferences from `store`.
    ///
    /// Missing, unreadable or malformed values fall back to their defaults;
    /// out-of-range numbers are clamped.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();
        Self {
            volume: read(store, VOLUME_KEY)
                .and_then(|raw| parse_number(&raw))
                .map_or(defaults.volume, Volume::new),
            muted: read(store, MUTED_KEY).map_or(defaults.muted, |raw| parse_flag(&raw)),
            playback_rate: read(store, PLAYBACK_RATE_KEY)
                .and_then(|raw| parse_number(&raw))
                .map_or(defaults.playback_rate, PlaybackRate::new),
            loop_enabled: read(store, LOOP_KEY).map_or(defaults.loop_enabled, |raw| parse_flag(&raw)),
        }
    }

    pub fn save_volume(store: &mut dyn PreferenceStore, volume: Volume) {
        write(store, VOLUME_KEY, &volume.value().to_string());
    }

    pub fn save_muted(store: &mut dyn PreferenceStore, muted: bool) {
        write(store, MUTED_KEY, &muted.to_string());
    }

    pub fn save_playback_rate(store: &mut dyn PreferenceStore, rate: PlaybackRate) {
        write(store, PLAYBACK_RATE_KEY, &rate.value().to_string());
    }

    pub fn save_loop(store: &mut dyn PreferenceStore, enabled: bool) {
        write(store, LOOP_KEY, &enabled.to_string());
    }
}

fn read(store: &dyn PreferenceStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(key, %error, "failed to read preference, using default");
            None
        }
    }
}

fn write(store: &mut dyn PreferenceStore, key: &str, value: &str) {
    if let Err(error) = store.set(key, value) {
        tracing::warn!(key, value, %error, "failed to persist preference");
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Only the exact string `true` enables a flag.
fn parse_flag(raw: &str) -> bool {
    raw == "true"
}
