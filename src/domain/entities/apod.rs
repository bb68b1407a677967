//! APOD entity representing one "astronomy picture of the day" entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of media an entry points to.
///
/// The API documents `image` and `video`; anything else decodes to
/// [`MediaType::Other`] instead of failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    #[serde(other)]
    Other,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Other => "other",
        }
    }
}

/// One APOD record, decoded verbatim from the remote payload.
///
/// `date`, `title`, `explanation` and `url` are required; a payload missing
/// any of them is rejected at decode time. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apod {
    pub date: NaiveDate,
    pub title: String,
    pub explanation: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,
}

impl Apod {
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Best available media URL: `hdurl` when present, otherwise `url`.
    pub fn best_url(&self) -> &str {
        self.hdurl.as_deref().unwrap_or(&self.url)
    }

    /// Copyright holder with the line breaks the API sometimes embeds removed.
    pub fn copyright_line(&self) -> Option<String> {
        self.copyright
            .as_deref()
            .map(|c| c.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}
