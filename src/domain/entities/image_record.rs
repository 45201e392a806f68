//! ImageRecord entity - one entry of the daily feed
//!
//! Field names follow the feed's JSON so records can be decoded straight
//! from a response body and persisted in the same shape.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ApodDate;

/// Kind of media an entry points at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    /// Anything else the feed publishes (interactive pages and the like)
    #[serde(other)]
    Other,
}

impl MediaType {
    pub fn is_image(&self) -> bool {
        matches!(self, MediaType::Image)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Other => "other",
        }
    }
}

/// One dated feed record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Unique per feed entry
    pub date: ApodDate,
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    /// Primary media URL (image or embeddable video)
    pub url: String,
    /// High resolution variant, images only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl ImageRecord {
    /// URL to use when saving the media locally
    pub fn best_url(&self) -> &str {
        self.hdurl.as_deref().unwrap_or(&self.url)
    }

    /// Copyright line with the feed's stray whitespace removed
    pub fn attribution(&self) -> Option<String> {
        self.copyright
            .as_deref()
            .map(|c| c.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_feed_body() {
        let body = r#"{
            "copyright": "\nJane Doe\n",
            "date": "2020-01-01",
            "explanation": "A galaxy.",
            "hdurl": "https://apod.example/hd.jpg",
            "media_type": "image",
            "service_version": "v1",
            "title": "Galaxy",
            "url": "https://apod.example/img.jpg"
        }"#;

        let record: ImageRecord = serde_json::from_str(body).unwrap();

        assert_eq!(record.date.to_string(), "2020-01-01");
        assert_eq!(record.media_type, MediaType::Image);
        assert_eq!(record.best_url(), "https://apod.example/hd.jpg");
        assert_eq!(record.attribution().as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_decode_minimal_body() {
        let body = r#"{"date":"2020-01-01","title":"T","url":"http://x/img.jpg","media_type":"image"}"#;

        let record: ImageRecord = serde_json::from_str(body).unwrap();

        assert_eq!(record.title, "T");
        assert!(record.explanation.is_empty());
        assert!(record.copyright.is_none());
        assert_eq!(record.best_url(), "http://x/img.jpg");
    }

    #[test]
    fn test_unknown_media_type() {
        let body = r#"{"date":"2019-05-05","title":"T","url":"http://x/page","media_type":"interactive"}"#;
        let record: ImageRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.media_type, MediaType::Other);
    }

    #[test]
    fn test_video_record() {
        let body = r#"{"date":"2018-02-02","title":"V","url":"https://www.youtube.com/embed/x","media_type":"video"}"#;
        let record: ImageRecord = serde_json::from_str(body).unwrap();
        assert!(!record.media_type.is_image());
    }

    #[test]
    fn test_missing_optionals_are_not_serialized() {
        let body = r#"{"date":"2020-01-01","title":"T","url":"u","media_type":"image"}"#;
        let record: ImageRecord = serde_json::from_str(body).unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("hdurl"));
        assert!(!json.contains("copyright"));
    }
}
