// SPDX-License-Identifier: MPL-2.0
//! Shared fakes for the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::mpsc;
use std::sync::Mutex;
use vidlens::application::port::{
    EventSender, ListenerId, MediaSurface, MetadataAnalyzer, MetadataError, PreferenceStore,
    SurfaceError, SurfaceEvent,
};
use vidlens::domain::media::MediaFile;
use vidlens::domain::metadata::MetadataRecord;
use vidlens::error::Result;
use vidlens::infrastructure::{LocalResourceRegistry, MemoryPreferenceStore};
use vidlens::player::PlayerStore;

// =============================================================================
// FakeSurface
// =============================================================================

/// A call the store made on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Play,
    Pause,
    SetCurrentTime(f64),
    SetVolume(f64),
    SetMuted(bool),
    SetPlaybackRate(f64),
    SetLooping(bool),
}

/// Surface that behaves like a `<video>` element: setters only emit an event
/// when the value actually changes, and events are queued to listeners.
pub struct FakeSurface {
    paused: Cell<bool>,
    time: Cell<f64>,
    duration: Cell<f64>,
    volume: Cell<f64>,
    muted: Cell<bool>,
    rate: Cell<f64>,
    looping: Cell<bool>,
    dimensions: Cell<Option<(u32, u32)>>,
    reject_play: Cell<bool>,
    listeners: RefCell<Vec<(ListenerId, EventSender)>>,
    next_listener: Cell<u64>,
    calls: RefCell<Vec<Call>>,
}

impl Default for FakeSurface {
    fn default() -> Self {
        Self {
            paused: Cell::new(true),
            time: Cell::new(0.0),
            duration: Cell::new(f64::NAN),
            volume: Cell::new(1.0),
            muted: Cell::new(false),
            rate: Cell::new(1.0),
            looping: Cell::new(false),
            dimensions: Cell::new(None),
            reject_play: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeSurface {
    /// Returns the concrete surface and the handle the store binds to.
    pub fn create() -> (Rc<Self>, Rc<dyn MediaSurface>) {
        let fake = Rc::new(Self::default());
        let surface: Rc<dyn MediaSurface> = fake.clone();
        (fake, surface)
    }

    fn emit(&self, event: SurfaceEvent) {
        for (_, tx) in self.listeners.borrow().iter() {
            let _ = tx.send(event);
        }
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| matches(call)).count()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn reject_play(&self, reject: bool) {
        self.reject_play.set(reject);
    }

    pub fn set_dimensions(&self, width: u32, height: u32) {
        self.dimensions.set(Some((width, height)));
    }

    /// Media finished loading its header.
    pub fn finish_loading(&self, duration: f64) {
        self.duration.set(duration);
        self.emit(SurfaceEvent::LoadedMetadata);
    }

    /// Playback clock advanced.
    pub fn advance_to(&self, seconds: f64) {
        self.time.set(seconds);
        self.emit(SurfaceEvent::TimeUpdate);
    }

    /// Playback reached the end.
    pub fn end(&self) {
        self.paused.set(true);
        self.emit(SurfaceEvent::Ended);
    }

    /// User moved the native volume slider.
    pub fn external_volume(&self, volume: f64) {
        self.volume.set(volume);
        self.emit(SurfaceEvent::VolumeChange);
    }

    /// User toggled the native mute button.
    pub fn external_mute(&self, muted: bool) {
        self.muted.set(muted);
        self.emit(SurfaceEvent::VolumeChange);
    }

    /// User picked a rate from the native menu.
    pub fn external_rate(&self, rate: f64) {
        self.rate.set(rate);
        self.emit(SurfaceEvent::RateChange);
    }

    /// Re-sends a volume event without changing anything.
    pub fn repeat_volume_event(&self) {
        self.emit(SurfaceEvent::VolumeChange);
    }
}

impl MediaSurface for FakeSurface {
    fn play(&self) -> std::result::Result<(), SurfaceError> {
        self.record(Call::Play);
        if self.reject_play.get() {
            return Err(SurfaceError::NotAllowed("autoplay blocked".into()));
        }
        if self.paused.replace(false) {
            self.emit(SurfaceEvent::Play);
        }
        Ok(())
    }

    fn pause(&self) {
        self.record(Call::Pause);
        if !self.paused.replace(true) {
            self.emit(SurfaceEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        self.paused.get()
    }

    fn current_time(&self) -> f64 {
        self.time.get()
    }

    fn set_current_time(&self, seconds: f64) {
        self.record(Call::SetCurrentTime(seconds));
        self.time.set(seconds);
        self.emit(SurfaceEvent::TimeUpdate);
    }

    fn duration(&self) -> f64 {
        self.duration.get()
    }

    fn volume(&self) -> f64 {
        self.volume.get()
    }

    fn set_volume(&self, volume: f64) {
        self.record(Call::SetVolume(volume));
        if self.volume.replace(volume) != volume {
            self.emit(SurfaceEvent::VolumeChange);
        }
    }

    fn is_muted(&self) -> bool {
        self.muted.get()
    }

    fn set_muted(&self, muted: bool) {
        self.record(Call::SetMuted(muted));
        if self.muted.replace(muted) != muted {
            self.emit(SurfaceEvent::VolumeChange);
        }
    }

    fn playback_rate(&self) -> f64 {
        self.rate.get()
    }

    fn set_playback_rate(&self, rate: f64) {
        self.record(Call::SetPlaybackRate(rate));
        if self.rate.replace(rate) != rate {
            self.emit(SurfaceEvent::RateChange);
        }
    }

    fn is_looping(&self) -> bool {
        self.looping.get()
    }

    fn set_looping(&self, looping: bool) {
        self.record(Call::SetLooping(looping));
        self.looping.set(looping);
    }

    fn video_dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions.get()
    }

    fn add_listener(&self, sender: EventSender) -> ListenerId {
        let id = ListenerId(self.next_listener.get() + 1);
        self.next_listener.set(id.0);
        self.listeners.borrow_mut().push((id, sender));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(listener, _)| *listener != id);
    }
}

// =============================================================================
// SharedPreferences
// =============================================================================

/// Preference store the test keeps a handle to after giving it to the store.
#[derive(Clone, Default)]
pub struct SharedPreferences(Rc<RefCell<MemoryPreferenceStore>>);

impl SharedPreferences {
    pub fn new(inner: MemoryPreferenceStore) -> Self {
        Self(Rc::new(RefCell::new(inner)))
    }

    pub fn writes_for(&self, key: &str) -> usize {
        self.0.borrow().writes().iter().filter(|(k, _)| k == key).count()
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.0.borrow().value(key).map(str::to_string)
    }
}

impl PreferenceStore for SharedPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.0.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.borrow_mut().set(key, value)
    }
}

/// A store over `prefs` with a fresh resource registry.
pub fn store_with(prefs: &SharedPreferences) -> (PlayerStore, Rc<LocalResourceRegistry>) {
    let registry = Rc::new(LocalResourceRegistry::new());
    let store = PlayerStore::new(Box::new(prefs.clone()), registry.clone());
    (store, registry)
}

pub fn video(name: &str) -> MediaFile {
    MediaFile::new(name, 2048, "video/mp4")
}

// =============================================================================
// GatedAnalyzer
// =============================================================================

/// Analyzer whose answer for a given file can be held back.
///
/// A gated analysis blocks until its [`Gate`] is opened or dropped.
#[derive(Default)]
pub struct GatedAnalyzer {
    gates: Mutex<HashMap<String, mpsc::Receiver<()>>>,
    finished: Mutex<Vec<String>>,
}

pub struct Gate(mpsc::Sender<()>);

impl Gate {
    pub fn open(self) {
        let _ = self.0.send(());
    }
}

impl GatedAnalyzer {
    pub fn gate(&self, name: &str) -> Gate {
        let (tx, rx) = mpsc::channel();
        self.gates
            .lock()
            .expect("gate lock")
            .insert(name.to_string(), rx);
        Gate(tx)
    }

    pub fn finished(&self) -> Vec<String> {
        self.finished.lock().expect("finished lock").clone()
    }
}

impl MetadataAnalyzer for GatedAnalyzer {
    fn analyze(
        &self,
        file: &MediaFile,
    ) -> std::result::Result<Option<MetadataRecord>, MetadataError> {
        let gate = self.gates.lock().expect("gate lock").remove(file.name());
        if let Some(gate) = gate {
            let _ = gate.recv();
        }
        self.finished
            .lock()
            .expect("finished lock")
            .push(file.name().to_string());

        if file.name().starts_with("panic") {
            panic!("analyzer crashed on {}", file.name());
        }
        if file.name().starts_with("broken") {
            return Err(MetadataError::AnalysisFailed("unreadable header".into()));
        }
        Ok(Some(MetadataRecord {
            title: Some(format!("{} (analyzed)", file.base_name())),
            file_name: Some(file.name().to_string()),
            video_codec: Some("AVC".into()),
            ..MetadataRecord::default()
        }))
    }
}
