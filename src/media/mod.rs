// SPDX-License-Identifier: MPL-2.0
//! Media file access and display helpers.
//!
//! This module turns paths into [`MediaFile`] handles and formats metadata
//! for display. Everything that touches the filesystem lives here rather than
//! in `domain`.

pub mod format;

use crate::domain::media::{mime_type_for_extension, MediaFile};
use crate::error::{MediaError, Result};
use std::fs;
use std::path::Path;

pub use format::{
    format_bitrate, format_file_size, format_rate, format_resolution, format_sample_rate,
    format_time, info_lines, InfoLine,
};

/// Detects the video MIME type of a path from its extension.
///
/// Returns an empty string for unknown extensions, the way a browser
/// reports a file type it does not recognize.
pub fn detect_mime_type<P: AsRef<Path>>(path: P) -> &'static str {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .and_then(mime_type_for_extension)
        .unwrap_or("")
}

/// Builds a [`MediaFile`] for a file on disk.
///
/// Reads the size from the filesystem and guesses the MIME type from the
/// extension. Does not check that the file is a video: that is
/// [`PlayerStore::load_file`](crate::player::PlayerStore::load_file)'s job.
///
/// # Errors
///
/// Returns [`MediaError::Unreadable`] if the path does not exist or is not a
/// regular file.
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<MediaFile> {
    let path = path.as_ref();
    let metadata =
        fs::metadata(path).map_err(|e| MediaError::Unreadable(format!("{}: {e}", path.display())))?;
    if !metadata.is_file() {
        return Err(MediaError::Unreadable(format!("{} is not a file", path.display())).into());
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(MediaFile::new(name, metadata.len(), detect_mime_type(path)).with_path(path))
}
