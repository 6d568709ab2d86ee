// SPDX-License-Identifier: MPL-2.0
//! Parsing of `mediainfo --Output=JSON` reports.
//!
//! Only the first General, Video and Audio tracks are read. MediaInfo prints
//! most numbers as strings (`"1920"`, `"29.970"`, sometimes `"1 920"`), so
//! numeric fields go through [`parse_number`].

use crate::application::port::MetadataError;
use crate::domain::metadata::MetadataRecord;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Report {
    media: Option<Media>,
}

#[derive(Debug, Deserialize)]
struct Media {
    #[serde(default)]
    track: Vec<Track>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Track {
    #[serde(rename = "@type")]
    kind: Option<String>,
    title: Option<String>,
    format: Option<String>,
    #[serde(rename = "CodecID")]
    codec_id: Option<String>,
    #[serde(rename = "Format_Profile")]
    format_profile: Option<String>,
    duration: Option<Value>,
    file_size: Option<Value>,
    width: Option<Value>,
    height: Option<Value>,
    frame_rate: Option<Value>,
    bit_rate: Option<Value>,
    color_space: Option<String>,
    bit_depth: Option<Value>,
    sampling_rate: Option<Value>,
    channels: Option<Value>,
}

impl Track {
    fn is(&self, kind: &str) -> bool {
        self.kind.as_deref() == Some(kind)
    }

    fn codec(&self) -> Option<String> {
        self.format.clone().or_else(|| self.codec_id.clone())
    }
}

/// Reads a number from a JSON value that may be a number or a string.
///
/// Strings are stripped of commas and spaces, then the leading decimal
/// number is used (`"48 000 Hz"` reads as 48000). Anything else yields
/// `None`.
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => leading_decimal(text),
        _ => None,
    }
}

fn leading_decimal(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != ',' && *c != ' ').collect();
    let int_len = cleaned.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return None;
    }

    let mut end = int_len;
    let rest = &cleaned.as_bytes()[int_len..];
    if rest.first() == Some(&b'.') {
        let frac_len = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if frac_len > 0 {
            end += 1 + frac_len;
        }
    }
    cleaned[..end].parse().ok()
}

fn number(value: Option<&Value>) -> Option<f64> {
    value.and_then(parse_number).filter(|n| n.is_finite())
}

fn whole<T: TryFrom<u64>>(value: Option<&Value>) -> Option<T> {
    let n = number(value)?;
    T::try_from(n.round() as u64).ok()
}

/// Parses a JSON report into a record.
///
/// Returns `Ok(None)` when the report describes no tracks.
///
/// # Errors
///
/// Returns [`MetadataError::InvalidReport`] if the text is not a MediaInfo
/// JSON document.
pub fn parse_report(json: &str) -> Result<Option<MetadataRecord>, MetadataError> {
    let report: Report =
        serde_json::from_str(json).map_err(|e| MetadataError::InvalidReport(e.to_string()))?;
    let tracks = report.media.map(|m| m.track).unwrap_or_default();

    let empty = Track::default();
    let general = tracks.iter().find(|t| t.is("General")).unwrap_or(&empty);
    let video = tracks.iter().find(|t| t.is("Video")).unwrap_or(&empty);
    let audio = tracks.iter().find(|t| t.is("Audio")).unwrap_or(&empty);

    let record = MetadataRecord {
        title: general.title.clone(),
        container_format: general.format.clone(),
        file_name: None,
        file_size: whole(general.file_size.as_ref()),
        duration: number(general.duration.as_ref()),

        video_codec: video.codec(),
        video_profile: video.format_profile.clone(),
        video_width: whole(video.width.as_ref()),
        video_height: whole(video.height.as_ref()),
        video_frame_rate: number(video.frame_rate.as_ref()),
        video_bitrate: whole(video.bit_rate.as_ref()),
        video_color_space: video.color_space.clone(),
        video_bit_depth: whole(video.bit_depth.as_ref()),

        audio_codec: audio.codec(),
        audio_bitrate: whole(audio.bit_rate.as_ref()),
        audio_sample_rate: whole(audio.sampling_rate.as_ref()),
        audio_channels: whole(audio.channels.as_ref()),
    };

    Ok((!record.is_empty()).then_some(record))
}
