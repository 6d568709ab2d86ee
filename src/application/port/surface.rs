// SPDX-License-Identifier: MPL-2.0
//! Playback surface port definition.
//!
//! This module defines the [`MediaSurface`] trait for the native element that
//! decodes and presents the video. The player store drives it through
//! imperative setters and observes it through [`SurfaceEvent`]s.
//!
//! # Design Notes
//!
//! - The surface is **owned by the presentation layer**; the store only holds
//!   a weak reference to it
//! - Methods take `&self`: surfaces are shared handles with interior state
//! - Events carry no payload; handlers read the surface's current values when
//!   the event is processed
//! - A surface only emits `VolumeChange`/`RateChange` when a value actually
//!   changes

use std::fmt;
use tokio::sync::mpsc::UnboundedSender;

// =============================================================================
// Events
// =============================================================================

/// Notifications a surface emits about its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceEvent {
    /// Duration and dimensions are known.
    LoadedMetadata,
    /// The playback position advanced.
    TimeUpdate,
    /// Playback started.
    Play,
    /// Playback paused.
    Pause,
    /// Playback reached the end without looping.
    Ended,
    /// Volume or mute flag changed.
    VolumeChange,
    /// Playback rate changed.
    RateChange,
}

/// Channel end a surface delivers events into.
pub type EventSender = UnboundedSender<SurfaceEvent>;

/// Identifies one listener registration on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

// =============================================================================
// SurfaceError
// =============================================================================

/// Errors a surface reports for requested operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// Playback was refused (autoplay policy, no user gesture).
    NotAllowed(String),

    /// The media could not be decoded.
    Decode(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NotAllowed(msg) => write!(f, "Playback not allowed: {msg}"),
            SurfaceError::Decode(msg) => write!(f, "Decode error: {msg}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

// =============================================================================
// MediaSurface Trait
// =============================================================================

/// Port for the native playback element.
///
/// Setters are fire-and-forget: the surface applies the value and, if it
/// changed, emits the matching event to every registered listener.
pub trait MediaSurface {
    /// Starts playback.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the surface refuses to play.
    fn play(&self) -> Result<(), SurfaceError>;

    /// Pauses playback.
    fn pause(&self);

    /// Returns the surface's own paused flag.
    fn is_paused(&self) -> bool;

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playback position.
    fn set_current_time(&self, seconds: f64);

    /// Duration in seconds; NaN or infinite until metadata is loaded.
    fn duration(&self) -> f64;

    fn volume(&self) -> f64;
    fn set_volume(&self, volume: f64);

    fn is_muted(&self) -> bool;
    fn set_muted(&self, muted: bool);

    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&self, rate: f64);

    fn is_looping(&self) -> bool;
    fn set_looping(&self, looping: bool);

    /// Intrinsic video size, once known.
    fn video_dimensions(&self) -> Option<(u32, u32)>;

    /// Registers a listener and returns its id.
    fn add_listener(&self, sender: EventSender) -> ListenerId;

    /// Removes a listener; unknown ids are ignored.
    fn remove_listener(&self, id: ListenerId);
}
