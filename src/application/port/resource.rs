// SPDX-License-Identifier: MPL-2.0
//! Resource handle port definition.
//!
//! Before a surface can play a user-selected file, the file must be exposed
//! under an ephemeral URL. The [`ResourceRegistry`] mints and releases those
//! URLs; every minted URL must be revoked exactly once.

use crate::domain::media::MediaFile;
use std::fmt;

/// An ephemeral URL a surface can load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceUrl(String);

impl ResourceUrl {
    /// Wraps a URL string.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Port for minting and releasing resource URLs.
pub trait ResourceRegistry {
    /// Exposes a file under a fresh URL.
    fn create(&self, file: &MediaFile) -> ResourceUrl;

    /// Releases a URL previously returned by [`create`](Self::create).
    fn revoke(&self, url: &ResourceUrl);
}
