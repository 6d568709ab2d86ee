// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for store/surface synchronization.
//!
//! Measures the performance of:
//! - Intent round trips (intent + echoed event)
//! - Draining a burst of time updates

use criterion::{criterion_group, criterion_main, Criterion};
use std::cell::{Cell, RefCell};
use std::hint::black_box;
use std::rc::Rc;
use vidlens::application::port::{
    EventSender, ListenerId, MediaSurface, SurfaceError, SurfaceEvent,
};
use vidlens::infrastructure::{LocalResourceRegistry, MemoryPreferenceStore};
use vidlens::player::PlayerStore;

/// Surface that echoes every setter as an event.
#[derive(Default)]
struct EchoSurface {
    time: Cell<f64>,
    volume: Cell<f64>,
    rate: Cell<f64>,
    listeners: RefCell<Vec<EventSender>>,
}

impl EchoSurface {
    fn emit(&self, event: SurfaceEvent) {
        for tx in self.listeners.borrow().iter() {
            let _ = tx.send(event);
        }
    }
}

impl MediaSurface for EchoSurface {
    fn play(&self) -> Result<(), SurfaceError> {
        self.emit(SurfaceEvent::Play);
        Ok(())
    }
    fn pause(&self) {
        self.emit(SurfaceEvent::Pause);
    }
    fn is_paused(&self) -> bool {
        true
    }
    fn current_time(&self) -> f64 {
        self.time.get()
    }
    fn set_current_time(&self, seconds: f64) {
        self.time.set(seconds);
        self.emit(SurfaceEvent::TimeUpdate);
    }
    fn duration(&self) -> f64 {
        3600.0
    }
    fn volume(&self) -> f64 {
        self.volume.get()
    }
    fn set_volume(&self, volume: f64) {
        self.volume.set(volume);
        self.emit(SurfaceEvent::VolumeChange);
    }
    fn is_muted(&self) -> bool {
        false
    }
    fn set_muted(&self, _muted: bool) {}
    fn playback_rate(&self) -> f64 {
        self.rate.get()
    }
    fn set_playback_rate(&self, rate: f64) {
        self.rate.set(rate);
        self.emit(SurfaceEvent::RateChange);
    }
    fn is_looping(&self) -> bool {
        false
    }
    fn set_looping(&self, _looping: bool) {}
    fn video_dimensions(&self) -> Option<(u32, u32)> {
        Some((1920, 1080))
    }
    fn add_listener(&self, sender: EventSender) -> ListenerId {
        self.listeners.borrow_mut().push(sender);
        ListenerId(self.listeners.borrow().len() as u64)
    }
    fn remove_listener(&self, _id: ListenerId) {
        self.listeners.borrow_mut().clear();
    }
}

fn bound_store() -> (PlayerStore, Rc<EchoSurface>) {
    let surface = Rc::new(EchoSurface::default());
    let handle: Rc<dyn MediaSurface> = surface.clone();
    let mut store = PlayerStore::new(
        Box::new(MemoryPreferenceStore::new()),
        Rc::new(LocalResourceRegistry::new()),
    );
    store.register_surface(Some(&handle));
    (store, surface)
}

/// Benchmark an intent followed by its echoed event.
fn bench_intent_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_sync");
    let (mut store, _surface) = bound_store();

    let mut step = 0_u32;
    group.bench_function("set_volume_round_trip", |b| {
        b.iter(|| {
            step = (step + 1) % 100;
            store.set_volume(f64::from(step) / 100.0);
            black_box(store.process_events());
        });
    });

    group.bench_function("seek_round_trip", |b| {
        b.iter(|| {
            store.seek_to(black_box(42.0));
            black_box(store.process_events());
        });
    });

    group.finish();
}

/// Benchmark draining many queued time updates at once.
fn bench_time_update_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_sync");
    let (mut store, surface) = bound_store();

    group.bench_function("drain_100_time_updates", |b| {
        b.iter(|| {
            for i in 0..100 {
                surface.time.set(f64::from(i));
                surface.emit(SurfaceEvent::TimeUpdate);
            }
            black_box(store.process_events());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_intent_round_trip, bench_time_update_burst);
criterion_main!(benches);
