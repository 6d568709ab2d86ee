// SPDX-License-Identifier: MPL-2.0
//! Display formatting for the control bar and the information panel.

use crate::domain::metadata::MetadataRecord;

/// Formats seconds as `H:MM:SS` from one hour on, `M:SS` below.
///
/// Fractions are truncated; negative and non-finite input reads as zero.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0) as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Formats a resolution with its reduced aspect ratio, e.g. `1920×1080 (16:9)`.
///
/// Returns `Unknown` when either side is zero.
#[must_use]
pub fn format_resolution(width: u32, height: u32) -> String {
    if width == 0 || height == 0 {
        return "Unknown".to_string();
    }
    let divisor = gcd(width, height);
    format!(
        "{width}×{height} ({}:{})",
        width / divisor,
        height / divisor
    )
}

/// Formats a byte count with 1024-based units and at most two decimals.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", trim_decimals(&format!("{value:.2}")), UNITS[unit])
}

fn trim_decimals(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Formats a bitrate in bits per second.
#[must_use]
pub fn format_bitrate(bits_per_second: u64) -> String {
    let bps = bits_per_second as f64;
    if bits_per_second >= 1_000_000 {
        format!("{:.1} Mbps", bps / 1_000_000.0)
    } else if bits_per_second >= 1_000 {
        format!("{:.0} Kbps", bps / 1_000.0)
    } else {
        format!("{bits_per_second} bps")
    }
}

/// Formats a sample rate in hertz.
#[must_use]
pub fn format_sample_rate(hertz: u32) -> String {
    if hertz >= 1_000 {
        format!("{:.1} kHz", f64::from(hertz) / 1_000.0)
    } else {
        format!("{hertz} Hz")
    }
}

/// Formats a playback rate for the speed menu.
/// Always shows 2 decimal places for consistent width.
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.2}×")
}

/// One labelled row of the information panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoLine {
    pub label: &'static str,
    pub value: String,
}

impl InfoLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Builds the information panel rows for a record.
///
/// Rows whose value is unknown are omitted.
#[must_use]
pub fn info_lines(record: &MetadataRecord) -> Vec<InfoLine> {
    let mut lines = Vec::new();

    if let Some(name) = &record.file_name {
        lines.push(InfoLine::new("File Name", name.clone()));
    }
    if let Some(title) = &record.title {
        lines.push(InfoLine::new("Title", title.clone()));
    }
    lines.push(InfoLine::new(
        "Duration",
        format_time(record.duration.unwrap_or(0.0)),
    ));
    if let Some((width, height)) = record.dimensions().filter(|(w, h)| *w > 0 && *h > 0) {
        lines.push(InfoLine::new("Resolution", format_resolution(width, height)));
    }
    if let Some(container) = &record.container_format {
        lines.push(InfoLine::new("Container Format", container.clone()));
    }
    if let Some(size) = record.file_size.filter(|s| *s > 0) {
        lines.push(InfoLine::new("File Size", format_file_size(size)));
    }

    if let Some(codec) = &record.video_codec {
        let value = match &record.video_profile {
            Some(profile) => format!("{codec} ({profile})"),
            None => codec.clone(),
        };
        lines.push(InfoLine::new("Video Codec", value));
    }
    if let Some(bitrate) = record.video_bitrate {
        lines.push(InfoLine::new("Video Bitrate", format_bitrate(bitrate)));
    }
    if let Some(fps) = record.video_frame_rate {
        lines.push(InfoLine::new("Frame Rate", format!("{fps:.2} fps")));
    }
    if let Some(space) = &record.video_color_space {
        lines.push(InfoLine::new("Color Space", space.clone()));
    }
    if let Some(depth) = record.video_bit_depth {
        lines.push(InfoLine::new("Bit Depth", format!("{depth} bits")));
    }

    if let Some(codec) = &record.audio_codec {
        lines.push(InfoLine::new("Audio Codec", codec.clone()));
    }
    if let Some(bitrate) = record.audio_bitrate {
        lines.push(InfoLine::new("Audio Bitrate", format_bitrate(bitrate)));
    }
    if let Some(channels) = record.audio_channels {
        lines.push(InfoLine::new("Channels", channels.to_string()));
    }
    if let Some(rate) = record.audio_sample_rate {
        lines.push(InfoLine::new("Sample Rate", format_sample_rate(rate)));
    }

    lines
}
