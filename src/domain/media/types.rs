// SPDX-License-Identifier: MPL-2.0
//! The media file handle.

use std::path::{Path, PathBuf};

/// MIME types for the container extensions browsers and players commonly
/// accept, keyed by lower-case extension.
const VIDEO_MIME_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("ogv", "video/ogg"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
    ("ts", "video/mp2t"),
    ("3gp", "video/3gpp"),
    ("wmv", "video/x-ms-wmv"),
    ("flv", "video/x-flv"),
];

/// Returns the video MIME type for a file extension, if it is a known one.
///
/// # Example
///
/// ```
/// use vidlens::domain::media::mime_type_for_extension;
///
/// assert_eq!(mime_type_for_extension("MKV"), Some("video/x-matroska"));
/// assert_eq!(mime_type_for_extension("png"), None);
/// ```
#[must_use]
pub fn mime_type_for_extension(extension: &str) -> Option<&'static str> {
    let ext = extension.to_ascii_lowercase();
    VIDEO_MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

/// Opaque handle to a user-selected file.
///
/// Carries what the player needs to know about the file without reading it:
/// its display name, size, MIME type and, for native sources, its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    name: String,
    size: u64,
    mime_type: String,
    path: Option<PathBuf>,
}

impl MediaFile {
    /// Creates a handle from the attributes a file picker reports.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            path: None,
        }
    }

    /// Attaches the on-disk location of the file.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Display name, including the extension.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// MIME type as reported by the source; may be empty.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// On-disk location, when known.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns true if the MIME type is a `video/*` type.
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }

    /// Returns the extension of the display name, without the dot.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            None
        } else {
            Some(ext)
        }
    }

    /// Returns the display name without its last extension.
    ///
    /// Used as the window title while the file plays.
    #[must_use]
    pub fn base_name(&self) -> &str {
        match self.extension() {
            Some(ext) => &self.name[..self.name.len() - ext.len() - 1],
            None => &self.name,
        }
    }

    /// Returns a short container label such as `MP4` or `X-MATROSKA`.
    ///
    /// Derived from the MIME subtype, falling back to the extension.
    #[must_use]
    pub fn container_label(&self) -> Option<String> {
        if let Some(subtype) = self.mime_type.strip_prefix("video/") {
            if !subtype.is_empty() {
                return Some(subtype.to_uppercase());
            }
        }
        self.extension().map(str::to_uppercase)
    }
}
