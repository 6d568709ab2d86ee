// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_PLAYBACK_RATE, DEFAULT_VOLUME, MAX_PLAYBACK_RATE, MAX_VOLUME, MIN_PLAYBACK_RATE,
    MIN_VOLUME, PLAYBACK_RATE_PRESETS,
};

// =============================================================================
// Volume
// =============================================================================

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// Non-finite input collapses to the default so a corrupt value can never
/// reach a surface.
///
/// # Example
///
/// ```
/// use vidlens::domain::video::Volume;
///
/// assert_eq!(Volume::new(0.4).value(), 0.4);
/// assert_eq!(Volume::new(3.0).value(), 1.0);
/// assert_eq!(Volume::new(f64::NAN).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f64) -> Self {
        if volume.is_nan() {
            return Self::default();
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if this volume is silent.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 <= MIN_VOLUME
    }

    /// Returns the audible volume for the given mute flag.
    #[must_use]
    pub fn effective(self, muted: bool) -> f64 {
        if muted {
            0.0
        } else {
            self.0
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate, guaranteed to be within valid range (0.25x - 4.0x).
///
/// # Example
///
/// ```
/// use vidlens::domain::video::PlaybackRate;
///
/// assert_eq!(PlaybackRate::new(1.5).value(), 1.5);
/// assert_eq!(PlaybackRate::new(16.0).value(), 4.0);
/// assert_eq!(PlaybackRate::new(1.0).faster().value(), 1.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a new playback rate, clamping to valid range.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if rate.is_nan() {
            return Self::default();
        }
        Self(rate.clamp(MIN_PLAYBACK_RATE, MAX_PLAYBACK_RATE))
    }

    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the next higher preset rate, or self if at maximum.
    #[must_use]
    pub fn faster(self) -> Self {
        let next = PLAYBACK_RATE_PRESETS
            .iter()
            .find(|&&r| r > self.0 + 0.001)
            .copied()
            .unwrap_or(self.0);
        Self(next)
    }

    /// Returns the next lower preset rate, or self if at minimum.
    #[must_use]
    pub fn slower(self) -> Self {
        let prev = PLAYBACK_RATE_PRESETS
            .iter()
            .rev()
            .find(|&&r| r < self.0 - 0.001)
            .copied()
            .unwrap_or(self.0);
        Self(prev)
    }

    /// Returns true if this rate is one of the menu presets.
    #[must_use]
    pub fn is_preset(self) -> bool {
        PLAYBACK_RATE_PRESETS
            .iter()
            .any(|&r| (r - self.0).abs() < 0.001)
    }

    /// Returns true if this is normal speed.
    #[must_use]
    pub fn is_normal(self) -> bool {
        (self.0 - DEFAULT_PLAYBACK_RATE).abs() < 0.001
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(DEFAULT_PLAYBACK_RATE)
    }
}
