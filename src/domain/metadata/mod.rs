// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! [`MetadataRecord`] is the best-effort technical description of a file,
//! filled partly from the playback surface and partly from the background
//! analyzer.

mod record;

pub use record::MetadataRecord;
