//! ApodHttpGateway - the feed over HTTP
//!
//! `GET <base>?api_key=<key>&date=<YYYY-MM-DD>` returning one JSON record.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use tracing::{debug, info, warn};

use crate::application::ports::{DownloadOutcome, FeedPort, FetchError, MediaPort};
use crate::domain::entities::{ImageRecord, MediaType};
use crate::domain::value_objects::ApodDate;
use crate::shared::config::FeedConfig;

/// HTTP feed gateway
pub struct ApodHttpGateway {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl ApodHttpGateway {
    /// Create a gateway with its own client
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("apodview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Self::with_client(base_url, api_key, client)
    }

    /// Create a gateway around an existing client
    pub fn with_client(base_url: &str, api_key: &str, client: Client) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Create from the `[feed]` config section
    pub fn from_config(config: &FeedConfig) -> Result<Self, FetchError> {
        Self::new(
            &config.base_url,
            &config.api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Full request URL for `date`
    pub fn request_url(&self, date: ApodDate) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("date", &date.to_string());
        url
    }

    /// File name used when saving a record's image
    pub fn file_name_for(record: &ImageRecord) -> String {
        let ext = Url::parse(record.best_url())
            .ok()
            .and_then(|u| {
                u.path_segments()
                    .and_then(|mut s| s.next_back().map(str::to_string))
            })
            .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()))
            .filter(|ext| !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_else(|| "jpg".to_string());
        format!("NASA_APOD_{}.{}", record.date, ext)
    }
}

impl MediaPort for ApodHttpGateway {
    /// Save a record's image into `dir`, preferring the HD URL.
    ///
    /// Videos and other media are not downloaded; their URL comes back as
    /// `DownloadOutcome::External`.
    fn download(&self, record: &ImageRecord, dir: &Path) -> Result<DownloadOutcome, FetchError> {
        if record.media_type != MediaType::Image {
            return Ok(DownloadOutcome::External(record.url.clone()));
        }

        let url = record.best_url();
        debug!(date = %record.date, url, "downloading image");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(date = %record.date, status = status.as_u16(), "image download failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        fs::create_dir_all(dir)?;
        let path = dir.join(Self::file_name_for(record));
        fs::write(&path, &bytes)?;

        info!(path = %path.display(), bytes = bytes.len(), "saved image");
        Ok(DownloadOutcome::Saved(path))
    }
}

impl FeedPort for ApodHttpGateway {
    fn fetch(&self, date: ApodDate) -> Result<ImageRecord, FetchError> {
        // The key is in the query string, so only the date goes to the log
        debug!(%date, "requesting feed entry");

        let response = self
            .client
            .get(self.request_url(date))
            .send()
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%date, status = status.as_u16(), "feed returned an error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

        let record: ImageRecord =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        debug!(%date, title = %record.title, media = record.media_type.as_str(), "received feed entry");
        Ok(record)
    }
}
