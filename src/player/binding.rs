// SPDX-License-Identifier: MPL-2.0
//! Listener registration on a playback surface.

use crate::application::port::{ListenerId, MediaSurface, SurfaceEvent};
use std::rc::{Rc, Weak};
use tokio::sync::mpsc::{self, error::TryRecvError};

/// Result of polling a binding for its next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Poll {
    Event(SurfaceEvent),
    Idle,
    /// The surface is gone; the binding is dead.
    Detached,
}

/// A live listener registration on one surface.
///
/// Holds the surface weakly: the presentation layer owns it. Dropping the
/// binding removes the listener from the surface, if the surface still
/// exists.
pub(crate) struct SurfaceBinding {
    surface: Weak<dyn MediaSurface>,
    listener: ListenerId,
    events: mpsc::UnboundedReceiver<SurfaceEvent>,
}

impl SurfaceBinding {
    /// Registers a new listener on `surface`.
    pub(crate) fn attach(surface: &Rc<dyn MediaSurface>) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let listener = surface.add_listener(tx);
        tracing::debug!(listener = listener.0, "attached surface listener");
        Self {
            surface: Rc::downgrade(surface),
            listener,
            events,
        }
    }

    /// Returns the surface if it is still alive.
    pub(crate) fn surface(&self) -> Option<Rc<dyn MediaSurface>> {
        self.surface.upgrade()
    }

    /// Returns true if this binding targets `surface`.
    pub(crate) fn is_bound_to(&self, surface: &Rc<dyn MediaSurface>) -> bool {
        std::ptr::addr_eq(self.surface.as_ptr(), Rc::as_ptr(surface))
    }

    /// Takes the next queued event without waiting.
    pub(crate) fn poll(&mut self) -> Poll {
        match self.events.try_recv() {
            Ok(event) => Poll::Event(event),
            Err(TryRecvError::Empty) if self.surface.strong_count() > 0 => Poll::Idle,
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => Poll::Detached,
        }
    }
}

impl Drop for SurfaceBinding {
    fn drop(&mut self) {
        if let Some(surface) = self.surface.upgrade() {
            surface.remove_listener(self.listener);
            tracing::debug!(listener = self.listener.0, "removed surface listener");
        }
    }
}

impl std::fmt::Debug for SurfaceBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceBinding")
            .field("listener", &self.listener)
            .field("alive", &(self.surface.strong_count() > 0))
            .finish()
    }
}
