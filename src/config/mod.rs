// src/config/mod.rs
// Carousel configuration and built-in defaults

pub mod env;
pub mod file;

pub use env::EnvOverrides;
pub use file::CarouselFileConfig;

use std::time::Duration;

use crate::slides::SlideRecord;

/// Delay between unattended advances
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_millis(5000);

/// Grace period after the user picks a slide explicitly
pub const DEFAULT_MANUAL_PAUSE: Duration = Duration::from_millis(10000);

/// Data location used when neither config nor container names one
pub const DEFAULT_DATA_URL: &str = "assets/data/hero-slides.json";

/// Container attribute naming the data location
pub const SOURCE_ATTRIBUTE: &str = "data-hero-source";

/// Construction-time options for one carousel instance.
///
/// Every field is optional; `resolve_*` helpers apply the fallbacks.
#[derive(Debug, Clone, Default)]
pub struct CarouselConfig {
    pub auto_advance_delay: Option<Duration>,
    pub manual_pause_delay: Option<Duration>,
    pub data_url: Option<String>,
    pub base_url: Option<String>,
    pub slides: Option<Vec<SlideRecord>>,
}

impl CarouselConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_advance(mut self, delay: Duration) -> Self {
        self.auto_advance_delay = Some(delay);
        self
    }

    pub fn with_manual_pause(mut self, delay: Duration) -> Self {
        self.manual_pause_delay = Some(delay);
        self
    }

    pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = Some(url.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_slides(mut self, slides: Vec<SlideRecord>) -> Self {
        self.slides = Some(slides);
        self
    }

    /// Auto-advance delay; zero counts as unset
    pub fn resolve_auto_advance(&self) -> Duration {
        non_zero(self.auto_advance_delay).unwrap_or(DEFAULT_AUTO_ADVANCE)
    }

    /// Manual pause delay; zero counts as unset
    pub fn resolve_manual_pause(&self) -> Duration {
        non_zero(self.manual_pause_delay).unwrap_or(DEFAULT_MANUAL_PAUSE)
    }

    /// Data location: config, then the container attribute, then the default
    pub fn resolve_data_url(&self, container_source: Option<&str>) -> String {
        self.data_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .or(container_source.filter(|u| !u.trim().is_empty()))
            .unwrap_or(DEFAULT_DATA_URL)
            .to_string()
    }

    /// Fill unset fields from environment overrides
    pub fn apply_env(mut self, env: &EnvOverrides) -> Self {
        self.auto_advance_delay = self.auto_advance_delay.or(env.auto_advance_delay);
        self.manual_pause_delay = self.manual_pause_delay.or(env.manual_pause_delay);
        self.data_url = self.data_url.or_else(|| env.data_url.clone());
        self.base_url = self.base_url.or_else(|| env.base_url.clone());
        self
    }

    /// Fill unset fields from a config file
    pub fn apply_file(mut self, file: &CarouselFileConfig) -> Self {
        let carousel = &file.carousel;
        self.auto_advance_delay = self
            .auto_advance_delay
            .or(carousel.auto_advance_ms.map(Duration::from_millis));
        self.manual_pause_delay = self
            .manual_pause_delay
            .or(carousel.manual_pause_ms.map(Duration::from_millis));
        self.data_url = self.data_url.or_else(|| carousel.data_url.clone());
        self.base_url = self.base_url.or_else(|| carousel.base_url.clone());
        self
    }
}

fn non_zero(delay: Option<Duration>) -> Option<Duration> {
    delay.filter(|d| !d.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.resolve_auto_advance(), Duration::from_millis(5000));
        assert_eq!(config.resolve_manual_pause(), Duration::from_millis(10000));
        assert_eq!(config.resolve_data_url(None), DEFAULT_DATA_URL);
    }

    #[test]
    fn test_zero_delay_falls_back_to_default() {
        let config = CarouselConfig::new().with_auto_advance(Duration::ZERO);
        assert_eq!(config.resolve_auto_advance(), DEFAULT_AUTO_ADVANCE);
    }

    #[test]
    fn test_data_url_precedence() {
        let config = CarouselConfig::new();
        assert_eq!(config.resolve_data_url(Some("from/container.json")), "from/container.json");
        assert_eq!(config.resolve_data_url(Some("  ")), DEFAULT_DATA_URL);

        let config = config.with_data_url("from/config.json");
        assert_eq!(config.resolve_data_url(Some("from/container.json")), "from/config.json");
    }

    #[test]
    fn test_explicit_values_win_over_env() {
        let env = EnvOverrides {
            auto_advance_delay: Some(Duration::from_millis(1)),
            manual_pause_delay: Some(Duration::from_millis(2)),
            data_url: Some("env.json".to_string()),
            base_url: None,
        };
        let config = CarouselConfig::new()
            .with_auto_advance(Duration::from_millis(700))
            .apply_env(&env);
        assert_eq!(config.resolve_auto_advance(), Duration::from_millis(700));
        assert_eq!(config.resolve_manual_pause(), Duration::from_millis(2));
        assert_eq!(config.data_url.as_deref(), Some("env.json"));
    }

    #[test]
    fn test_file_fills_remaining_gaps() {
        let file: CarouselFileConfig = toml::from_str(
            r#"
[carousel]
auto_advance_ms = 3000
base_url = "https://example.test/"
"#,
        )
        .unwrap();
        let config = CarouselConfig::new().apply_file(&file);
        assert_eq!(config.resolve_auto_advance(), Duration::from_millis(3000));
        assert_eq!(config.base_url.as_deref(), Some("https://example.test/"));
        assert_eq!(config.resolve_manual_pause(), DEFAULT_MANUAL_PAUSE);
    }
}
