// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module describes the file the user selected, independent of how it
//! was obtained (file picker, drop, command line).

pub mod types;

pub use types::{mime_type_for_extension, MediaFile};
