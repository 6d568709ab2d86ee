// SPDX-License-Identifier: MPL-2.0
//! `mediainfo` adapter implementing the [`MetadataAnalyzer`] port trait.
//!
//! [`MediaInfoCli`] shells out to the `mediainfo` command-line tool and reads
//! its JSON report. The call blocks until the tool exits, which is why it is
//! only ever driven by the [`MetadataWorker`](crate::player::MetadataWorker).
//!
//! [`MetadataAnalyzer`]: crate::application::port::MetadataAnalyzer

mod report;

pub use report::{parse_number, parse_report};

use crate::application::port::{MetadataAnalyzer, MetadataError};
use crate::config::DEFAULT_MEDIAINFO_PATH;
use crate::domain::media::MediaFile;
use crate::domain::metadata::MetadataRecord;
use std::process::Command;

/// Metadata analyzer backed by the `mediainfo` executable.
#[derive(Debug, Clone)]
pub struct MediaInfoCli {
    program: String,
}

impl MediaInfoCli {
    /// Creates an analyzer that runs `program` (a name on `PATH` or a path).
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for MediaInfoCli {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIAINFO_PATH)
    }
}

impl MetadataAnalyzer for MediaInfoCli {
    fn warm_up(&self) -> Result<(), MetadataError> {
        let output = Command::new(&self.program)
            .arg("--Version")
            .output()
            .map_err(|e| MetadataError::AnalyzerUnavailable(format!("{}: {e}", self.program)))?;

        if !output.status.success() {
            return Err(MetadataError::AnalyzerUnavailable(format!(
                "{} --Version exited with {}",
                self.program, output.status
            )));
        }
        Ok(())
    }

    fn analyze(&self, file: &MediaFile) -> Result<Option<MetadataRecord>, MetadataError> {
        let path = file.path().ok_or(MetadataError::UnsupportedSource)?;

        tracing::debug!(program = %self.program, path = %path.display(), "running mediainfo");
        let output = Command::new(&self.program)
            .arg("--Output=JSON")
            .arg(path)
            .output()
            .map_err(|e| MetadataError::AnalyzerUnavailable(format!("{}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MetadataError::AnalysisFailed(format!(
                "{} ({})",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_report(&stdout)
    }
}
