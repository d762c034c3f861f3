// src/source.rs
// Slide data source resolution: prefetched list first, then a fetch
//
// Every failure here means "no slides". Errors are logged and swallowed at
// `SlideSource::load`; the strict helpers below return them for testing.

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, error};
use url::Url;

use crate::error::{CarouselError, Result};
use crate::slides::{SlideRecord, normalize_slides};

/// Where slide data is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    Remote(Url),
    Local(PathBuf),
}

impl DataLocation {
    /// Classify `data_url`, resolving relative references against `base`.
    ///
    /// With no base, a reference without a scheme is a filesystem path.
    pub fn parse(data_url: &str, base: Option<&Url>) -> Result<Self> {
        let url = match Url::parse(data_url) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => match base {
                Some(base) => base.join(data_url)?,
                None => return Ok(DataLocation::Local(PathBuf::from(data_url))),
            },
            Err(e) => return Err(e.into()),
        };

        match url.scheme() {
            "http" | "https" => Ok(DataLocation::Remote(url)),
            "file" => url
                .to_file_path()
                .map(DataLocation::Local)
                .map_err(|_| CarouselError::Config(format!("not a local file URL: {}", url))),
            other => Err(CarouselError::Config(format!(
                "unsupported data source scheme: {}",
                other
            ))),
        }
    }
}

/// Supplies the records a carousel should render
#[derive(Debug, Clone)]
pub struct SlideSource {
    client: reqwest::Client,
    prefetched: Option<Vec<SlideRecord>>,
    data_url: String,
    base: Option<Url>,
}

impl SlideSource {
    pub fn new(client: reqwest::Client, data_url: impl Into<String>) -> Self {
        Self {
            client,
            prefetched: None,
            data_url: data_url.into(),
            base: None,
        }
    }

    pub fn with_prefetched(mut self, slides: Option<Vec<SlideRecord>>) -> Self {
        self.prefetched = slides;
        self
    }

    pub fn with_base(mut self, base: Option<Url>) -> Self {
        self.base = base;
        self
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Resolve the slide list. Never fails; unavailable data is an empty list.
    pub async fn load(&self) -> Vec<SlideRecord> {
        if let Some(slides) = self.prefetched.as_ref().filter(|s| !s.is_empty()) {
            debug!(count = slides.len(), "Using prefetched slides");
            return slides.clone();
        }

        match self.load_payload().await {
            Ok(payload) => normalize_slides(&payload),
            Err(e) => {
                error!(data_url = %self.data_url, error = %e, "Failed to load slide data");
                Vec::new()
            }
        }
    }

    /// Read and parse the configured data location
    pub async fn load_payload(&self) -> Result<Value> {
        match DataLocation::parse(&self.data_url, self.base.as_ref())? {
            DataLocation::Remote(url) => fetch_json(&self.client, url).await,
            DataLocation::Local(path) => read_json(path).await,
        }
    }
}

/// GET `url` bypassing caches; only 2xx bodies are parsed
pub async fn fetch_json(client: &reqwest::Client, url: Url) -> Result<Value> {
    debug!(url = %url, "Fetching slide data");
    let response = client
        .get(url)
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CarouselError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Read a JSON document from disk
pub async fn read_json(path: PathBuf) -> Result<Value> {
    debug!(path = %path.display(), "Reading slide data file");
    let contents = tokio::fs::read(&path).await?;
    Ok(serde_json::from_slice(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::create_shared_client;
    use std::io::Write;

    // ============================================================================
    // DataLocation
    // ============================================================================

    #[test]
    fn test_remote_locations() {
        let loc = DataLocation::parse("https://example.test/slides.json", None).unwrap();
        assert!(matches!(loc, DataLocation::Remote(_)));

        let base = Url::parse("https://example.test/site/").unwrap();
        let loc = DataLocation::parse("assets/data/hero-slides.json", Some(&base)).unwrap();
        assert_eq!(
            loc,
            DataLocation::Remote(Url::parse("https://example.test/site/assets/data/hero-slides.json").unwrap())
        );
    }

    #[test]
    fn test_local_locations() {
        let loc = DataLocation::parse("assets/data/hero-slides.json", None).unwrap();
        assert_eq!(loc, DataLocation::Local(PathBuf::from("assets/data/hero-slides.json")));

        let base = Url::parse("file:///srv/site/").unwrap();
        let loc = DataLocation::parse("slides.json", Some(&base)).unwrap();
        assert_eq!(loc, DataLocation::Local(PathBuf::from("/srv/site/slides.json")));
    }

    #[test]
    fn test_unsupported_scheme() {
        let err = DataLocation::parse("ftp://example.test/slides.json", None).unwrap_err();
        assert!(matches!(err, CarouselError::Config(_)));
    }

    // ============================================================================
    // Loading
    // ============================================================================

    #[tokio::test]
    async fn test_prefetched_slides_skip_the_fetch() {
        let prefetched = vec![SlideRecord {
            title: Some("Prefetched".to_string()),
            ..Default::default()
        }];
        let source = SlideSource::new(create_shared_client(), "does/not/exist.json")
            .with_prefetched(Some(prefetched.clone()));
        assert_eq!(source.load().await, prefetched);
    }

    #[tokio::test]
    async fn test_empty_prefetched_list_falls_through() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"slides": [{{"title": "From disk"}}]}}"#).unwrap();

        let source = SlideSource::new(create_shared_client(), file.path().to_string_lossy())
            .with_prefetched(Some(Vec::new()));
        let slides = source.load().await;
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title.as_deref(), Some("From disk"));
    }

    #[tokio::test]
    async fn test_missing_file_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let source = SlideSource::new(create_shared_client(), path.to_string_lossy());
        assert!(source.load_payload().await.unwrap_err().is_data_unavailable());
        assert!(source.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_is_no_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{ not json").unwrap();
        let source = SlideSource::new(create_shared_client(), file.path().to_string_lossy());
        assert!(matches!(source.load_payload().await, Err(CarouselError::Json(_))));
        assert!(source.load().await.is_empty());
    }
}
