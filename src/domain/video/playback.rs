// SPDX-License-Identifier: MPL-2.0
//! Playback state snapshot.

use super::newtypes::{PlaybackRate, Volume};

/// Point-in-time view of everything the control bar renders.
///
/// The store owns the live values; this is a copy taken with
/// [`PlayerStore::snapshot`](crate::player::PlayerStore::snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    /// Whether the surface last reported playback as running.
    pub is_playing: bool,
    /// Current position in seconds.
    pub current_time: f64,
    /// Media duration in seconds (0 until metadata is loaded).
    pub duration: f64,
    /// Stored volume, independent of mute.
    pub volume: Volume,
    /// Whether audio is muted.
    pub is_muted: bool,
    /// Playback rate.
    pub playback_rate: PlaybackRate,
    /// Whether playback restarts at the end.
    pub loop_enabled: bool,
}

impl PlaybackState {
    /// Returns the audible volume: zero when muted, the stored volume otherwise.
    #[must_use]
    pub fn effective_volume(&self) -> f64 {
        self.volume.effective(self.is_muted)
    }

    /// Returns playback progress in `[0, 1]`, or 0 when the duration is unknown.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 && self.duration.is_finite() {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Returns the remaining time in seconds, never negative.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.duration - self.current_time).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_paused_at_start_with_default_preferences() {
        let state = PlaybackState::default();
        assert!(!state.is_playing);
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.volume, Volume::default());
        assert_eq!(state.playback_rate, PlaybackRate::default());
        assert!(!state.loop_enabled);
    }

    #[test]
    fn effective_volume_respects_mute() {
        let mut state = PlaybackState {
            volume: Volume::new(0.6),
            ..PlaybackState::default()
        };
        assert_eq!(state.effective_volume(), 0.6);

        state.is_muted = true;
        assert_eq!(state.effective_volume(), 0.0);
    }

    #[test]
    fn progress_handles_unknown_duration() {
        let state = PlaybackState {
            current_time: 12.0,
            ..PlaybackState::default()
        };
        assert_eq!(state.progress(), 0.0);

        let state = PlaybackState {
            current_time: 30.0,
            duration: 120.0,
            ..PlaybackState::default()
        };
        assert_eq!(state.progress(), 0.25);
    }

    #[test]
    fn remaining_never_negative() {
        let state = PlaybackState {
            current_time: 130.0,
            duration: 120.0,
            ..PlaybackState::default()
        };
        assert_eq!(state.remaining(), 0.0);
    }
}
