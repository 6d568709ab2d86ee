// SPDX-License-Identifier: MPL-2.0
//! Player state store and surface synchronization.
//!
//! [`PlayerStore`] owns every observable playback cell and keeps them in step
//! with the bound [`MediaSurface`]:
//!
//! - **Intents** (store to surface) update the store and are applied
//!   directly to the surface.
//! - **Native events** (surface to store) are read back from the surface
//!   and written into the store only when they differ from the stored value.
//!
//! The equality gate on the second path is what breaks the loop where an
//! intent makes the surface emit an event that would re-run the intent.
//!
//! # Lifecycle
//!
//! ```text
//! Unbound --register_surface(Some)--> Bound --register_surface(None)--> Unbound
//!                                       |
//!                                       +--surface dropped--> Unbound
//! ```
//!
//! Binding applies the store's volume, mute, rate and loop to the new
//! surface before any event is observed, so a freshly mounted surface
//! inherits the user's preferences rather than its own defaults.

use super::binding::{Poll, SurfaceBinding};
use super::controls::ControlsTimer;
use super::metadata_worker::{MetadataWorker, RequestId, ResponseKind, WorkerResponse};
use super::observable::Observable;
use super::preferences::Preferences;
use crate::application::port::{
    MediaSurface, PreferenceStore, ResourceRegistry, ResourceUrl, SurfaceEvent,
};
use crate::config::ControlsConfig;
use crate::domain::media::MediaFile;
use crate::domain::metadata::MetadataRecord;
use crate::domain::video::{PlaybackRate, PlaybackState, Volume};
use crate::error::{MediaError, Result};
use std::rc::Rc;
use std::time::Instant;

// =============================================================================
// Cells
// =============================================================================

/// Every observable value the presentation layer renders.
#[derive(Debug)]
pub struct PlayerCells {
    pub is_playing: Observable<bool>,
    pub current_time: Observable<f64>,
    pub duration: Observable<f64>,
    pub volume: Observable<Volume>,
    pub is_muted: Observable<bool>,
    pub playback_rate: Observable<PlaybackRate>,
    pub loop_enabled: Observable<bool>,
    /// True while the user drags the seek bar.
    pub is_seeking: Observable<bool>,

    /// Metadata the surface and file handle provide on load.
    pub basic_metadata: Observable<Option<MetadataRecord>>,
    /// Metadata from the background analyzer.
    pub media_info: Observable<Option<MetadataRecord>>,
    /// Last rejected file.
    pub error: Observable<Option<MediaError>>,

    pub drag_over: Observable<bool>,
    pub fullscreen: Observable<bool>,
    pub controls_visible: Observable<bool>,
    pub info_visible: Observable<bool>,
}

impl PlayerCells {
    fn new(preferences: &Preferences) -> Self {
        Self {
            is_playing: Observable::new(false),
            current_time: Observable::new(0.0),
            duration: Observable::new(0.0),
            volume: Observable::new(preferences.volume),
            is_muted: Observable::new(preferences.muted),
            playback_rate: Observable::new(preferences.playback_rate),
            loop_enabled: Observable::new(preferences.loop_enabled),
            is_seeking: Observable::new(false),
            basic_metadata: Observable::new(None),
            media_info: Observable::new(None),
            error: Observable::new(None),
            drag_over: Observable::new(false),
            fullscreen: Observable::new(false),
            controls_visible: Observable::new(true),
            info_visible: Observable::new(false),
        }
    }
}

// =============================================================================
// Media source
// =============================================================================

/// The loaded file and its resource URL.
///
/// Revokes the URL when dropped, so replacing or clearing the source
/// releases it exactly once.
struct MediaSource {
    file: MediaFile,
    url: ResourceUrl,
    registry: Rc<dyn ResourceRegistry>,
}

impl Drop for MediaSource {
    fn drop(&mut self) {
        self.registry.revoke(&self.url);
    }
}

struct Extraction {
    worker: MetadataWorker,
    warmup: Option<RequestId>,
    pending: Option<RequestId>,
}

// =============================================================================
// PlayerStore
// =============================================================================

/// Playback state store bound to at most one surface.
pub struct PlayerStore {
    cells: PlayerCells,
    binding: Option<SurfaceBinding>,
    source: Option<MediaSource>,
    preferences: Box<dyn PreferenceStore>,
    resources: Rc<dyn ResourceRegistry>,
    extraction: Option<Extraction>,
    controls: ControlsTimer,
}

impl PlayerStore {
    /// Creates a store with initial values read from `preferences`.
    pub fn new(preferences: Box<dyn PreferenceStore>, resources: Rc<dyn ResourceRegistry>) -> Self {
        let initial = Preferences::load(preferences.as_ref());
        Self {
            cells: PlayerCells::new(&initial),
            binding: None,
            source: None,
            preferences,
            resources,
            extraction: None,
            controls: ControlsTimer::default(),
        }
    }

    /// Attaches a metadata worker and asks it to warm up.
    #[must_use]
    pub fn with_metadata_worker(mut self, mut worker: MetadataWorker) -> Self {
        let warmup = worker.warm_up();
        self.extraction = Some(Extraction {
            worker,
            warmup: Some(warmup),
            pending: None,
        });
        self
    }

    /// Uses custom control bar hide delays.
    #[must_use]
    pub fn with_controls_config(mut self, config: &ControlsConfig) -> Self {
        self.controls = ControlsTimer::new(config);
        self
    }

    #[must_use]
    pub fn cells(&self) -> &PlayerCells {
        &self.cells
    }

    // -------------------------------------------------------------------------
    // Binding
    // -------------------------------------------------------------------------

    /// Binds the store to `surface`, or unbinds it with `None`.
    ///
    /// Registering the surface that is already bound does nothing. Binding a
    /// different surface removes the listener from the previous one first.
    pub fn register_surface(&mut self, surface: Option<&Rc<dyn MediaSurface>>) {
        let Some(surface) = surface else {
            if self.binding.take().is_some() {
                tracing::debug!("surface unbound");
            }
            return;
        };

        if self
            .binding
            .as_ref()
            .is_some_and(|binding| binding.is_bound_to(surface))
        {
            return;
        }

        self.binding = None;
        self.apply_state_to(surface.as_ref());
        self.binding = Some(SurfaceBinding::attach(surface));
        tracing::debug!("surface bound");
    }

    /// Returns true if a live surface is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding
            .as_ref()
            .is_some_and(|binding| binding.surface().is_some())
    }

    fn apply_state_to(&self, surface: &dyn MediaSurface) {
        surface.set_volume(self.effective_volume());
        surface.set_muted(self.cells.is_muted.get());
        surface.set_playback_rate(self.cells.playback_rate.get().value());
        surface.set_looping(self.cells.loop_enabled.get());
    }

    /// Returns the bound surface, dropping the binding if the surface is gone.
    fn surface(&mut self) -> Option<Rc<dyn MediaSurface>> {
        let surface = self.binding.as_ref()?.surface();
        if surface.is_none() {
            tracing::debug!("bound surface was dropped, unbinding");
            self.binding = None;
        }
        surface
    }

    // -------------------------------------------------------------------------
    // Native events
    // -------------------------------------------------------------------------

    /// Handles every event the surface has queued.
    ///
    /// Handlers may run intents that make the surface queue further events;
    /// those are handled in the same call. Returns the number of events
    /// handled.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(binding) = self.binding.as_mut() {
            match binding.poll() {
                Poll::Event(event) => {
                    self.handle_event(event);
                    handled += 1;
                }
                Poll::Idle => break,
                Poll::Detached => {
                    tracing::debug!("surface detached, unbinding");
                    self.binding = None;
                }
            }
        }
        handled
    }

    fn handle_event(&mut self, event: SurfaceEvent) {
        let Some(surface) = self.surface() else {
            return;
        };

        match event {
            SurfaceEvent::LoadedMetadata => {
                let duration = finite_or_zero(surface.duration());
                self.cells.duration.set(duration);
                if let Some(source) = &self.source {
                    let record = basic_metadata(&source.file, duration, surface.video_dimensions());
                    self.cells.basic_metadata.set(Some(record));
                }
            }
            SurfaceEvent::TimeUpdate => {
                if !self.cells.is_seeking.get() {
                    self.cells
                        .current_time
                        .set(finite_or_zero(surface.current_time()));
                }
            }
            SurfaceEvent::Play => {
                if self.cells.is_playing.set(true) {
                    self.on_playback_changed(Instant::now());
                }
            }
            SurfaceEvent::Pause | SurfaceEvent::Ended => {
                if self.cells.is_playing.set(false) {
                    self.on_playback_changed(Instant::now());
                }
            }
            SurfaceEvent::VolumeChange => {
                let volume = surface.volume();
                let muted = surface.is_muted();
                // A zero volume is how a muted surface reports itself, not a
                // preference the user chose.
                if volume != self.cells.volume.get().value() && volume > 0.0 {
                    self.set_volume(volume);
                }
                if muted != self.cells.is_muted.get() {
                    self.set_muted(muted);
                }
            }
            SurfaceEvent::RateChange => {
                let rate = surface.playback_rate();
                if rate != self.cells.playback_rate.get().value() {
                    self.set_playback_rate(rate);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Playback intents
    // -------------------------------------------------------------------------

    /// Plays if the surface is paused, pauses otherwise.
    ///
    /// Reads the surface's own paused flag, not `is_playing`, which may not
    /// have caught up with a previous toggle yet.
    pub fn toggle_play_pause(&mut self) {
        let Some(surface) = self.surface() else {
            return;
        };
        if surface.is_paused() {
            start(surface.as_ref());
        } else {
            surface.pause();
        }
    }

    pub fn play(&mut self) {
        if let Some(surface) = self.surface() {
            start(surface.as_ref());
        }
    }

    pub fn pause(&mut self) {
        if let Some(surface) = self.surface() {
            surface.pause();
        }
    }

    /// Moves playback to `seconds`.
    ///
    /// The stored position changes immediately, even with no surface bound.
    /// Non-finite targets are ignored and negative ones clamp to zero.
    pub fn seek_to(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            tracing::debug!(seconds, "ignoring non-finite seek target");
            return;
        }
        let target = seconds.max(0.0);
        self.cells.current_time.set(target);
        if let Some(surface) = self.surface() {
            surface.set_current_time(target);
        }
    }

    /// Seeks relative to the surface position, within `[0, duration]`.
    pub fn seek_by(&mut self, delta: f64) {
        let Some(surface) = self.surface() else {
            return;
        };
        let duration = self.cells.duration.get();
        let mut target = (surface.current_time() + delta).max(0.0);
        if duration > 0.0 {
            target = target.min(duration);
        }
        self.seek_to(target);
    }

    /// Starts a seek gesture; time updates stop overwriting the position.
    pub fn begin_seek(&mut self) {
        self.cells.is_seeking.set(true);
    }

    pub fn end_seek(&mut self) {
        self.cells.is_seeking.set(false);
    }

    /// Sets the volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f64) {
        let volume = Volume::new(volume);
        self.cells.volume.set(volume);
        Preferences::save_volume(self.preferences.as_mut(), volume);

        let muted = self.cells.is_muted.get();
        if let Some(surface) = self.surface() {
            surface.set_volume(volume.effective(muted));
        }
    }

    /// Sets the mute flag.
    ///
    /// Applies both the effective volume and the native mute flag, so that
    /// unmuting restores sound whichever of the two the surface honours.
    pub fn set_muted(&mut self, muted: bool) {
        self.cells.is_muted.set(muted);
        Preferences::save_muted(self.preferences.as_mut(), muted);

        let volume = self.cells.volume.get();
        if let Some(surface) = self.surface() {
            surface.set_volume(volume.effective(muted));
            surface.set_muted(muted);
        }
    }

    pub fn toggle_mute(&mut self) {
        let muted = !self.cells.is_muted.get();
        self.set_muted(muted);
    }

    /// Sets the playback rate, clamped to `[0.25, 4]`.
    pub fn set_playback_rate(&mut self, rate: f64) {
        let rate = PlaybackRate::new(rate);
        self.cells.playback_rate.set(rate);
        Preferences::save_playback_rate(self.preferences.as_mut(), rate);
        if let Some(surface) = self.surface() {
            surface.set_playback_rate(rate.value());
        }
    }

    /// Steps to the next faster preset rate.
    pub fn faster(&mut self) {
        let rate = self.cells.playback_rate.get().faster();
        self.set_playback_rate(rate.value());
    }

    /// Steps to the next slower preset rate.
    pub fn slower(&mut self) {
        let rate = self.cells.playback_rate.get().slower();
        self.set_playback_rate(rate.value());
    }

    pub fn set_loop(&mut self, enabled: bool) {
        self.cells.loop_enabled.set(enabled);
        Preferences::save_loop(self.preferences.as_mut(), enabled);
        if let Some(surface) = self.surface() {
            surface.set_looping(enabled);
        }
    }

    pub fn toggle_loop(&mut self) {
        let enabled = !self.cells.loop_enabled.get();
        self.set_loop(enabled);
    }

    // -------------------------------------------------------------------------
    // Media source
    // -------------------------------------------------------------------------

    /// Makes `file` the current media.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::NotAVideo`] if the file is not a video. The
    /// error is also stored in the `error` cell and the current media is
    /// left untouched.
    pub fn load_file(&mut self, file: MediaFile) -> Result<()> {
        if !file.is_video() {
            let error = MediaError::NotAVideo {
                mime_type: file.mime_type().to_string(),
            };
            tracing::warn!(file = file.name(), %error, "rejected file");
            self.cells.error.set(Some(error.clone()));
            return Err(error.into());
        }

        let url = self.resources.create(&file);
        tracing::debug!(file = file.name(), %url, "loading media");
        // Replacing the source revokes the previous URL.
        self.source = Some(MediaSource {
            file: file.clone(),
            url,
            registry: Rc::clone(&self.resources),
        });
        self.cells.error.set(None);
        self.reset_media_state();

        if let Some(extraction) = self.extraction.as_mut() {
            extraction.pending = Some(extraction.worker.analyze(file));
        }
        Ok(())
    }

    /// Releases the current media.
    pub fn close_media(&mut self) {
        if self.source.take().is_some() {
            tracing::debug!("media closed");
        }
        if let Some(extraction) = self.extraction.as_mut() {
            extraction.pending = None;
        }
        self.reset_media_state();
        self.cells.info_visible.set(false);
    }

    fn reset_media_state(&mut self) {
        self.cells.is_playing.set(false);
        self.cells.current_time.set(0.0);
        self.cells.duration.set(0.0);
        self.cells.basic_metadata.set(None);
        self.cells.media_info.set(None);
    }

    #[must_use]
    pub fn media_file(&self) -> Option<&MediaFile> {
        self.source.as_ref().map(|source| &source.file)
    }

    /// URL the presentation layer hands to the surface.
    #[must_use]
    pub fn resource_url(&self) -> Option<&ResourceUrl> {
        self.source.as_ref().map(|source| &source.url)
    }

    /// Window title for the loaded media.
    #[must_use]
    pub fn media_title(&self) -> Option<&str> {
        self.media_file().map(MediaFile::base_name)
    }

    // -------------------------------------------------------------------------
    // Metadata extraction
    // -------------------------------------------------------------------------

    /// Applies every metadata response already received, without waiting.
    ///
    /// Returns the number of responses taken from the worker, stale ones
    /// included.
    pub fn process_metadata(&mut self) -> usize {
        let mut count = 0;
        while let Some(response) = self
            .extraction
            .as_mut()
            .and_then(|extraction| extraction.worker.try_recv())
        {
            self.apply_metadata_response(response);
            count += 1;
        }
        count
    }

    /// Waits for one metadata response and applies it.
    ///
    /// Returns false if there is no worker or it has stopped.
    pub async fn recv_metadata(&mut self) -> bool {
        let Some(extraction) = self.extraction.as_mut() else {
            return false;
        };
        match extraction.worker.recv().await {
            Some(response) => {
                self.apply_metadata_response(response);
                true
            }
            None => false,
        }
    }

    /// Waits until the outstanding analysis, if any, has been resolved.
    pub async fn settle_metadata(&mut self) {
        while self.is_metadata_pending() {
            if !self.recv_metadata().await {
                break;
            }
        }
    }

    /// Returns true while an analysis for the current media is outstanding.
    #[must_use]
    pub fn is_metadata_pending(&self) -> bool {
        self.extraction
            .as_ref()
            .is_some_and(|extraction| extraction.pending.is_some())
    }

    fn apply_metadata_response(&mut self, response: WorkerResponse) {
        let Some(extraction) = self.extraction.as_mut() else {
            return;
        };

        if extraction.warmup == Some(response.id) {
            extraction.warmup = None;
            match response.kind {
                ResponseKind::Error(message) => {
                    tracing::warn!(%message, "metadata analyzer failed to warm up");
                }
                _ => tracing::debug!("metadata analyzer ready"),
            }
            return;
        }

        if extraction.pending != Some(response.id) {
            tracing::debug!(id = response.id.value(), "discarding stale metadata response");
            return;
        }
        extraction.pending = None;

        match response.kind {
            ResponseKind::Metadata(record) => {
                self.cells.media_info.set(record);
            }
            ResponseKind::Error(message) => {
                tracing::warn!(%message, "metadata extraction failed");
                self.cells.media_info.set(None);
            }
            ResponseKind::Ready => {}
        }
    }

    // -------------------------------------------------------------------------
    // UI-only state
    // -------------------------------------------------------------------------

    pub fn set_drag_over(&mut self, drag_over: bool) {
        self.cells.drag_over.set(drag_over);
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.cells.fullscreen.set(fullscreen);
    }

    /// Shows or hides the information panel. Does nothing without media.
    pub fn toggle_info_panel(&mut self) {
        if self.is_loaded() {
            let visible = !self.cells.info_visible.get();
            self.cells.info_visible.set(visible);
        }
    }

    fn can_hide_controls(&self) -> bool {
        self.cells.is_playing.get() && self.is_loaded()
    }

    /// Pointer moved over the player.
    pub fn pointer_activity(&mut self, now: Instant) {
        self.cells.controls_visible.set(true);
        let can_hide = self.can_hide_controls();
        self.controls.on_activity(now, can_hide);
    }

    /// Pointer left the player or the control bar.
    pub fn pointer_leave(&mut self, now: Instant) {
        let can_hide = self.can_hide_controls();
        self.controls.on_leave(now, can_hide);
    }

    /// Pointer entered the control bar; keeps it visible.
    pub fn controls_hovered(&mut self) {
        self.cells.controls_visible.set(true);
        self.controls.cancel();
    }

    /// Applies an expired hide deadline.
    pub fn tick(&mut self, now: Instant) {
        if self.controls.expire(now) {
            self.cells.controls_visible.set(false);
        }
    }

    fn on_playback_changed(&mut self, now: Instant) {
        self.cells.controls_visible.set(true);
        if self.can_hide_controls() {
            self.controls.on_activity(now, true);
        } else {
            self.controls.cancel();
        }
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Zero when muted, the stored volume otherwise.
    #[must_use]
    pub fn effective_volume(&self) -> f64 {
        self.cells.volume.get().effective(self.cells.is_muted.get())
    }

    /// True when a file and its resource URL are present.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// True when media is loaded and a surface is bound to play it.
    #[must_use]
    pub fn can_play(&self) -> bool {
        self.is_loaded() && self.is_bound()
    }

    #[must_use]
    pub fn has_metadata(&self) -> bool {
        self.cells.basic_metadata.with(Option::is_some)
            || self.cells.media_info.with(Option::is_some)
    }

    /// Copies the playback cells into a [`PlaybackState`].
    #[must_use]
    pub fn snapshot(&self) -> PlaybackState {
        PlaybackState {
            is_playing: self.cells.is_playing.get(),
            current_time: self.cells.current_time.get(),
            duration: self.cells.duration.get(),
            volume: self.cells.volume.get(),
            is_muted: self.cells.is_muted.get(),
            playback_rate: self.cells.playback_rate.get(),
            loop_enabled: self.cells.loop_enabled.get(),
        }
    }

    /// Metadata for the information panel: the analyzer's record with gaps
    /// filled from the basic metadata.
    #[must_use]
    pub fn overlay_metadata(&self) -> Option<MetadataRecord> {
        let extracted = self.cells.media_info.get();
        let basic = self.cells.basic_metadata.get();
        match (extracted, basic) {
            (Some(extracted), Some(basic)) => Some(extracted.merged_with(&basic)),
            (extracted, basic) => extracted.or(basic),
        }
    }
}

impl std::fmt::Debug for PlayerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerStore")
            .field("state", &self.snapshot())
            .field("binding", &self.binding)
            .field("media", &self.media_file().map(MediaFile::name))
            .finish_non_exhaustive()
    }
}

fn start(surface: &dyn MediaSurface) {
    if let Err(error) = surface.play() {
        tracing::warn!(%error, "playback was rejected");
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn basic_metadata(
    file: &MediaFile,
    duration: f64,
    dimensions: Option<(u32, u32)>,
) -> MetadataRecord {
    let dimensions = dimensions.filter(|(width, height)| *width > 0 && *height > 0);
    MetadataRecord {
        duration: Some(duration),
        file_name: Some(file.name().to_string()),
        file_size: Some(file.size()),
        container_format: file.container_label(),
        video_width: dimensions.map(|(width, _)| width),
        video_height: dimensions.map(|(_, height)| height),
        ..MetadataRecord::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::infrastructure::{LocalResourceRegistry, MemoryPreferenceStore};
    use crate::player::preferences::{MUTED_KEY, VOLUME_KEY};

    fn store_with(prefs: MemoryPreferenceStore) -> (PlayerStore, Rc<LocalResourceRegistry>) {
        let registry = Rc::new(LocalResourceRegistry::new());
        let store = PlayerStore::new(Box::new(prefs), registry.clone());
        (store, registry)
    }

    fn video(name: &str) -> MediaFile {
        MediaFile::new(name, 4096, "video/mp4")
    }

    #[test]
    fn initial_cells_come_from_preferences() {
        let prefs = MemoryPreferenceStore::new()
            .with_value(VOLUME_KEY, "0.25")
            .with_value(MUTED_KEY, "true");
        let (store, _) = store_with(prefs);

        let state = store.snapshot();
        assert_eq!(state.volume, Volume::new(0.25));
        assert!(state.is_muted);
        assert_eq!(store.effective_volume(), 0.0);
        assert!(store.cells().controls_visible.get());
    }

    #[test]
    fn intents_without_surface_only_touch_the_store() {
        let (mut store, _) = store_with(MemoryPreferenceStore::new());

        store.toggle_play_pause();
        store.play();
        store.seek_by(10.0);
        store.set_volume(0.3);
        store.set_loop(true);

        assert!(!store.cells().is_playing.get());
        assert_eq!(store.cells().current_time.get(), 0.0);
        assert_eq!(store.cells().volume.get(), Volume::new(0.3));
        assert!(store.cells().loop_enabled.get());
        assert!(!store.is_bound());
    }

    #[test]
    fn seek_to_without_surface_sets_position() {
        let (mut store, _) = store_with(MemoryPreferenceStore::new());
        store.seek_to(42.5);
        assert_eq!(store.cells().current_time.get(), 42.5);
    }

    #[test]
    fn seek_to_ignores_non_finite_and_clamps_negative() {
        let (mut store, _) = store_with(MemoryPreferenceStore::new());
        store.seek_to(12.0);
        store.seek_to(f64::NAN);
        assert_eq!(store.cells().current_time.get(), 12.0);

        store.seek_to(-3.0);
        assert_eq!(store.cells().current_time.get(), 0.0);
    }

    #[test]
    fn volume_is_clamped() {
        let (mut store, _) = store_with(MemoryPreferenceStore::new());
        store.set_volume(1.7);
        assert_eq!(store.cells().volume.get().value(), 1.0);
        store.set_volume(-1.0);
        assert_eq!(store.cells().volume.get().value(), 0.0);
    }

    #[test]
    fn mute_round_trip_restores_volume() {
        let (mut store, _) = store_with(MemoryPreferenceStore::new());
        store.set_volume(0.35);
        store.toggle_mute();
        assert_eq!(store.effective_volume(), 0.0);
        store.toggle_mute();
        assert_eq!(store.effective_volume(), 0.35);
    }

    #[test]
    fn faster_and_slower_step_presets() {
        let (mut store, _) = store_with(MemoryPreferenceStore::new());
        store.faster();
        assert_eq!(store.cells().playback_rate.get().value(), 1.25);
        store.slower();
        store.slower();
        assert_eq!(store.cells().playback_rate.get().value(), 0.75);
    }

    #[test]
    fn load_rejects_non_video_and_keeps_current_media() {
        let (mut store, registry) = store_with(MemoryPreferenceStore::new());
        store.load_file(video("a.mp4")).expect("video should load");

        let result = store.load_file(MediaFile::new("notes.txt", 10, "text/plain"));
        assert!(matches!(
            result,
            Err(Error::Media(MediaError::NotAVideo { .. }))
        ));
        assert_eq!(store.media_file().map(MediaFile::name), Some("a.mp4"));
        assert!(store.cells().error.get().is_some());
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn successful_load_clears_error_and_resets_playback() {
        let (mut store, _) = store_with(MemoryPreferenceStore::new());
        let _ = store.load_file(MediaFile::new("a.png", 1, "image/png"));
        store.seek_to(30.0);

        store.load_file(video("b.mp4")).expect("video should load");
        assert!(store.cells().error.get().is_none());
        assert_eq!(store.cells().current_time.get(), 0.0);
        assert_eq!(store.cells().duration.get(), 0.0);
        assert_eq!(store.media_title(), Some("b"));
    }

    #[test]
    fn replacing_media_revokes_previous_url_once() {
        let (mut store, registry) = store_with(MemoryPreferenceStore::new());

        store.load_file(video("a.mp4")).expect("load a");
        let first = store.resource_url().cloned().expect("url for a");
        store.load_file(video("b.mp4")).expect("load b");

        assert!(!registry.is_live(&first));
        assert_eq!(registry.live_count(), 1);
        assert_eq!(registry.revoked_count(), 1);
    }

    #[test]
    fn close_and_drop_release_urls() {
        let (mut store, registry) = store_with(MemoryPreferenceStore::new());
        store.load_file(video("a.mp4")).expect("load a");
        store.close_media();
        assert_eq!(registry.live_count(), 0);
        assert!(!store.is_loaded());

        store.load_file(video("b.mp4")).expect("load b");
        drop(store);
        assert_eq!(registry.live_count(), 0);
        assert_eq!(registry.revoked_count(), 2);
    }

    #[test]
    fn info_panel_needs_media() {
        let (mut store, _) = store_with(MemoryPreferenceStore::new());
        store.toggle_info_panel();
        assert!(!store.cells().info_visible.get());

        store.load_file(video("a.mp4")).expect("load");
        store.toggle_info_panel();
        assert!(store.cells().info_visible.get());

        store.close_media();
        assert!(!store.cells().info_visible.get());
    }

    #[test]
    fn controls_stay_visible_while_paused() {
        let (mut store, _) = store_with(MemoryPreferenceStore::new());
        store.load_file(video("a.mp4")).expect("load");

        let now = Instant::now();
        store.pointer_activity(now);
        store.tick(now + std::time::Duration::from_secs(60));
        assert!(store.cells().controls_visible.get());
    }

    #[test]
    fn overlay_prefers_extracted_values() {
        let (store, _) = store_with(MemoryPreferenceStore::new());
        store.cells.basic_metadata.set(Some(MetadataRecord {
            file_name: Some("a.mp4".into()),
            video_width: Some(640),
            ..MetadataRecord::default()
        }));
        store.cells.media_info.set(Some(MetadataRecord {
            video_width: Some(1920),
            ..MetadataRecord::default()
        }));

        let overlay = store.overlay_metadata().expect("overlay");
        assert_eq!(overlay.video_width, Some(1920));
        assert_eq!(overlay.file_name.as_deref(), Some("a.mp4"));
        assert!(store.has_metadata());
    }

    #[test]
    fn basic_metadata_ignores_zero_dimensions() {
        let record = basic_metadata(&video("a.mp4"), 12.0, Some((0, 0)));
        assert_eq!(record.dimensions(), None);
        assert_eq!(record.container_format.as_deref(), Some("MP4"));
        assert_eq!(record.file_size, Some(4096));
    }
}
