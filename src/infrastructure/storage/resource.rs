// SPDX-License-Identifier: MPL-2.0
//! Local [`ResourceRegistry`] adapter.

use crate::application::port::{ResourceRegistry, ResourceUrl};
use crate::domain::media::MediaFile;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

const URL_PREFIX: &str = "blob:vidlens/";

/// Registry that mints `blob:vidlens/<n>` URLs and tracks which are live.
#[derive(Debug, Default)]
pub struct LocalResourceRegistry {
    next: Cell<u64>,
    live: RefCell<HashSet<ResourceUrl>>,
    revoked: Cell<usize>,
}

impl LocalResourceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of URLs created and not yet revoked.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }

    /// Number of successful revocations.
    #[must_use]
    pub fn revoked_count(&self) -> usize {
        self.revoked.get()
    }

    #[must_use]
    pub fn is_live(&self, url: &ResourceUrl) -> bool {
        self.live.borrow().contains(url)
    }
}

impl ResourceRegistry for LocalResourceRegistry {
    fn create(&self, file: &MediaFile) -> ResourceUrl {
        let id = self.next.get() + 1;
        self.next.set(id);

        let url = ResourceUrl::new(format!("{URL_PREFIX}{id}"));
        tracing::debug!(%url, file = file.name(), "created resource url");
        self.live.borrow_mut().insert(url.clone());
        url
    }

    fn revoke(&self, url: &ResourceUrl) {
        if self.live.borrow_mut().remove(url) {
            self.revoked.set(self.revoked.get() + 1);
            tracing::debug!(%url, "revoked resource url");
        } else {
            tracing::warn!(%url, "revoking unknown resource url");
        }
    }
}
