// src/error.rs
// Error types for the carousel core

use thiserror::Error;

/// Main error type for the carousel library
#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("slide data request failed with status {0}")]
    HttpStatus(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not resolve asset {reference:?}: {reason}")]
    AssetResolution { reference: String, reason: String },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("carousel task failed: {0}")]
    Task(String),
}

/// Convenience type alias for Result using CarouselError
pub type Result<T> = std::result::Result<T, CarouselError>;

impl CarouselError {
    /// True for failures that mean "the slide data could not be obtained".
    ///
    /// These are recovered by rendering nothing rather than surfacing an error.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            CarouselError::HttpStatus(_)
                | CarouselError::Http(_)
                | CarouselError::Json(_)
                | CarouselError::Io(_)
                | CarouselError::InvalidUrl(_)
        )
    }
}

impl From<tokio::task::JoinError> for CarouselError {
    fn from(err: tokio::task::JoinError) -> Self {
        CarouselError::Task(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Construction and display
    // ============================================================================

    #[test]
    fn test_http_status_error() {
        let err = CarouselError::HttpStatus(500);
        assert!(err.to_string().contains("500"));
        assert!(err.is_data_unavailable());
    }

    #[test]
    fn test_asset_resolution_error() {
        let err = CarouselError::AssetResolution {
            reference: "img/hero.jpg".to_string(),
            reason: "no base".to_string(),
        };
        assert!(err.to_string().contains("img/hero.jpg"));
        assert!(err.to_string().contains("no base"));
        assert!(!err.is_data_unavailable());
    }

    #[test]
    fn test_config_error() {
        let err = CarouselError::Config("bad delay".to_string());
        assert!(err.to_string().contains("configuration error"));
        assert!(!err.is_data_unavailable());
    }

    // ============================================================================
    // From implementations
    // ============================================================================

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CarouselError = json_err.into();
        assert!(matches!(err, CarouselError::Json(_)));
        assert!(err.is_data_unavailable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CarouselError = io_err.into();
        assert!(matches!(err, CarouselError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_from_url_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: CarouselError = url_err.into();
        assert!(matches!(err, CarouselError::InvalidUrl(_)));
    }
}
