// SPDX-License-Identifier: MPL-2.0
//! Metadata extraction port definition.
//!
//! This module defines the [`MetadataAnalyzer`] trait for producing a
//! [`MetadataRecord`] from a media file. Infrastructure adapters (like the
//! `mediainfo` command-line tool) implement this trait.
//!
//! # Design Notes
//!
//! - Analysis is **blocking** and may take seconds on large files
//! - Callers never invoke the analyzer directly: the
//!   [`MetadataWorker`](crate::player::MetadataWorker) drives it from the
//!   blocking thread pool
//! - A successful analysis may still find nothing (`Ok(None)`)

use crate::domain::media::MediaFile;
use crate::domain::metadata::MetadataRecord;
use std::fmt;

// =============================================================================
// MetadataError
// =============================================================================

/// Errors that can occur during metadata extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// The file has no location the analyzer can read from.
    UnsupportedSource,

    /// The analyzer could not be started.
    AnalyzerUnavailable(String),

    /// The analyzer ran but reported a failure.
    AnalysisFailed(String),

    /// The analyzer output could not be parsed.
    InvalidReport(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::UnsupportedSource => write!(f, "File cannot be analyzed"),
            MetadataError::AnalyzerUnavailable(msg) => {
                write!(f, "Metadata analyzer unavailable: {msg}")
            }
            MetadataError::AnalysisFailed(msg) => write!(f, "Metadata analysis failed: {msg}"),
            MetadataError::InvalidReport(msg) => write!(f, "Invalid metadata report: {msg}"),
        }
    }
}

impl std::error::Error for MetadataError {}

// =============================================================================
// MetadataAnalyzer Trait
// =============================================================================

/// Port for extracting technical metadata from media files.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: the worker shares one analyzer
/// across blocking tasks that may run concurrently.
///
/// # Example
///
/// ```ignore
/// use vidlens::application::port::MetadataAnalyzer;
/// use vidlens::domain::media::MediaFile;
///
/// fn print_codec(analyzer: &impl MetadataAnalyzer, file: &MediaFile) {
///     if let Ok(Some(record)) = analyzer.analyze(file) {
///         println!("codec: {:?}", record.video_codec);
///     }
/// }
/// ```
pub trait MetadataAnalyzer: Send + Sync {
    /// Prepares the analyzer so the first real request is fast.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the analyzer cannot be made ready.
    fn warm_up(&self) -> Result<(), MetadataError> {
        Ok(())
    }

    /// Analyzes a file.
    ///
    /// Returns `Ok(None)` when the analysis succeeded but found nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the file cannot be analyzed.
    fn analyze(&self, file: &MediaFile) -> Result<Option<MetadataRecord>, MetadataError>;
}
