// SPDX-License-Identifier: MPL-2.0
//! Technical metadata record.

/// Best-effort technical description of a media file.
///
/// Every field is optional: the playback surface only knows duration and
/// dimensions, while a full analysis can fill the codec details. Units are
/// seconds for `duration`, bytes for `file_size`, bits per second for
/// bitrates and hertz for sample rates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetadataRecord {
    pub title: Option<String>,
    pub container_format: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub duration: Option<f64>,

    pub video_codec: Option<String>,
    pub video_profile: Option<String>,
    pub video_width: Option<u32>,
    pub video_height: Option<u32>,
    pub video_frame_rate: Option<f64>,
    pub video_bitrate: Option<u64>,
    pub video_color_space: Option<String>,
    pub video_bit_depth: Option<u32>,

    pub audio_codec: Option<String>,
    pub audio_bitrate: Option<u64>,
    pub audio_sample_rate: Option<u32>,
    pub audio_channels: Option<u32>,
}

impl MetadataRecord {
    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the video dimensions when both sides are known.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.video_width.zip(self.video_height)
    }

    /// Returns a copy where every unset field is taken from `other`.
    ///
    /// Fields already set on `self` win.
    ///
    /// # Example
    ///
    /// ```
    /// use vidlens::domain::metadata::MetadataRecord;
    ///
    /// let extracted = MetadataRecord {
    ///     video_codec: Some("AVC".into()),
    ///     ..MetadataRecord::default()
    /// };
    /// let basic = MetadataRecord {
    ///     video_codec: Some("unknown".into()),
    ///     duration: Some(12.5),
    ///     ..MetadataRecord::default()
    /// };
    ///
    /// let merged = extracted.merged_with(&basic);
    /// assert_eq!(merged.video_codec.as_deref(), Some("AVC"));
    /// assert_eq!(merged.duration, Some(12.5));
    /// ```
    #[must_use]
    pub fn merged_with(&self, other: &Self) -> Self {
        fn pick<T: Clone>(mine: &Option<T>, theirs: &Option<T>) -> Option<T> {
            mine.clone().or_else(|| theirs.clone())
        }

        Self {
            title: pick(&self.title, &other.title),
            container_format: pick(&self.container_format, &other.container_format),
            file_name: pick(&self.file_name, &other.file_name),
            file_size: self.file_size.or(other.file_size),
            duration: self.duration.or(other.duration),
            video_codec: pick(&self.video_codec, &other.video_codec),
            video_profile: pick(&self.video_profile, &other.video_profile),
            video_width: self.video_width.or(other.video_width),
            video_height: self.video_height.or(other.video_height),
            video_frame_rate: self.video_frame_rate.or(other.video_frame_rate),
            video_bitrate: self.video_bitrate.or(other.video_bitrate),
            video_color_space: pick(&self.video_color_space, &other.video_color_space),
            video_bit_depth: self.video_bit_depth.or(other.video_bit_depth),
            audio_codec: pick(&self.audio_codec, &other.audio_codec),
            audio_bitrate: self.audio_bitrate.or(other.audio_bitrate),
            audio_sample_rate: self.audio_sample_rate.or(other.audio_sample_rate),
            audio_channels: self.audio_channels.or(other.audio_channels),
        }
    }
}
