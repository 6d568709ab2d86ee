// SPDX-License-Identifier: MPL-2.0
//! Playback state and its synchronization with a media surface.
//!
//! - [`PlayerStore`] owns the observable cells and drives the surface
//! - [`Preferences`] persists volume, mute, rate and loop
//! - [`MetadataWorker`] runs the analyzer off the UI thread
//! - [`ControlsTimer`] schedules the control bar auto-hide

mod binding;
pub mod controls;
pub mod metadata_worker;
pub mod observable;
pub mod preferences;
pub mod store;

pub use controls::ControlsTimer;
pub use metadata_worker::{MetadataWorker, RequestId, ResponseKind, WorkerResponse};
pub use observable::Observable;
pub use preferences::Preferences;
pub use store::{PlayerCells, PlayerStore};
