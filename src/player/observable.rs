// SPDX-License-Identifier: MPL-2.0
//! Observable value cells.

use tokio::sync::watch;

/// A value cell that notifies subscribers when it changes.
///
/// Writes are equality-gated: setting the current value again neither
/// notifies subscribers nor counts as a change. This is what keeps the
/// store/surface feedback loop from running forever.
///
/// # Example
///
/// ```
/// use vidlens::player::Observable;
///
/// let cell = Observable::new(1.0);
/// let rx = cell.subscribe();
///
/// assert_eq!(cell.get(), 1.0);
/// assert!(!rx.has_changed().unwrap());
/// ```
///
/// Only the crate writes to cells; the presentation layer reads and
/// subscribes.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + PartialEq> Observable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        let (tx, _rx) = watch::channel(value);
        Self { tx }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Calls `f` with a reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Stores `value` if it differs from the current one.
    ///
    /// Returns true if the value changed.
    pub(crate) fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Returns a receiver that observes every change from now on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
