// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Audio playback volume bounds
//! - **Playback Rate**: Speed bounds and presets offered by the speed menu
//! - **Controls**: Auto-hide delays for the control bar
//! - **Metadata**: External analyzer defaults

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f64 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f64 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f64 = 1.0;

/// Whether audio starts muted when nothing has been persisted.
pub const DEFAULT_MUTED: bool = false;

/// Whether looping is enabled when nothing has been persisted.
pub const DEFAULT_LOOP: bool = false;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Normal playback rate.
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// Slowest supported playback rate.
pub const MIN_PLAYBACK_RATE: f64 = 0.25;

/// Fastest supported playback rate.
pub const MAX_PLAYBACK_RATE: f64 = 4.0;

/// Rates offered by the speed menu, in ascending order.
pub const PLAYBACK_RATE_PRESETS: &[f64] = &[0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 3.0, 4.0];

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Delay before the control bar hides after the last pointer activity.
pub const DEFAULT_CONTROLS_HIDE_DELAY_MS: u64 = 3000;

/// Delay before the control bar hides once the pointer leaves the player.
pub const DEFAULT_CONTROLS_LEAVE_HIDE_DELAY_MS: u64 = 1000;

// ==========================================================================
// Metadata Defaults
// ==========================================================================

/// Executable used by the MediaInfo analyzer when none is configured.
pub const DEFAULT_MEDIAINFO_PATH: &str = "mediainfo";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "vidlens=info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);

    assert!(MIN_PLAYBACK_RATE > 0.0);
    assert!(MAX_PLAYBACK_RATE > MIN_PLAYBACK_RATE);
    assert!(DEFAULT_PLAYBACK_RATE >= MIN_PLAYBACK_RATE);
    assert!(DEFAULT_PLAYBACK_RATE <= MAX_PLAYBACK_RATE);

    assert!(DEFAULT_CONTROLS_HIDE_DELAY_MS > 0);
    assert!(DEFAULT_CONTROLS_LEAVE_HIDE_DELAY_MS > 0);
    assert!(DEFAULT_CONTROLS_LEAVE_HIDE_DELAY_MS <= DEFAULT_CONTROLS_HIDE_DELAY_MS);
};
