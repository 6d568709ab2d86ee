// SPDX-License-Identifier: MPL-2.0
use crate::application::port::MetadataError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Preferences(String),
    Media(MediaError),
    Metadata(MetadataError),
}

/// Reasons a file cannot become the current media source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The file's MIME type is not a `video/*` type.
    NotAVideo { mime_type: String },

    /// The file could not be inspected (missing, permission denied, ...).
    Unreadable(String),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::NotAVideo { mime_type } if mime_type.is_empty() => {
                write!(f, "Invalid video file")
            }
            MediaError::NotAVideo { mime_type } => {
                write!(f, "Invalid video file ({})", mime_type)
            }
            MediaError::Unreadable(msg) => write!(f, "Unreadable file: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Preferences(e) => write!(f, "Preferences Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
            Error::Metadata(e) => write!(f, "Metadata Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<MetadataError> for Error {
    fn from(err: MetadataError) -> Self {
        Error::Metadata(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Metadata(MetadataError::InvalidReport(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
