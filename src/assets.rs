// src/assets.rs
// Resolve asset references (images, icons) to absolute form

use tracing::{debug, warn};
use url::Url;

use crate::error::{CarouselError, Result};

/// Schemes that are already self-contained and never rewritten
const PASSTHROUGH_SCHEMES: &[&str] = &["data:", "blob:"];

/// Resolves relative asset references against a base location
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    base: Option<Url>,
}

impl AssetResolver {
    pub fn new(base: Option<Url>) -> Self {
        Self { base }
    }

    /// Build a resolver from a base URL string, ignoring an unparsable base
    pub fn from_base_str(base: Option<&str>) -> Self {
        let base = base.and_then(|raw| match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(base = raw, error = %e, "Invalid asset base URL, assets stay relative");
                None
            }
        });
        Self { base }
    }

    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// Resolve `reference`, falling back to the raw value on failure.
    ///
    /// Failures are logged, never returned.
    pub fn resolve(&self, reference: &str) -> String {
        match self.try_resolve(reference) {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(reference, error = %e, "Asset resolution failed, using raw reference");
                reference.to_string()
            }
        }
    }

    /// Strict resolution used by `resolve`
    pub fn try_resolve(&self, reference: &str) -> Result<String> {
        let trimmed = reference.trim();
        if is_passthrough(trimmed) {
            return Ok(trimmed.to_string());
        }

        if let Ok(absolute) = Url::parse(trimmed) {
            return Ok(absolute.to_string());
        }

        let Some(base) = &self.base else {
            debug!(reference, "No asset base configured, keeping relative reference");
            return Ok(trimmed.to_string());
        };

        base.join(trimmed)
            .map(|url| url.to_string())
            .map_err(|e| CarouselError::AssetResolution {
                reference: reference.to_string(),
                reason: e.to_string(),
            })
    }
}

fn is_passthrough(reference: &str) -> bool {
    let lower = reference.to_ascii_lowercase();
    PASSTHROUGH_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(base: &str) -> AssetResolver {
        AssetResolver::new(Some(Url::parse(base).unwrap()))
    }

    #[test]
    fn test_relative_reference_joins_base() {
        let r = resolver("https://example.test/site/index.html");
        assert_eq!(r.resolve("img/hero.jpg"), "https://example.test/site/img/hero.jpg");
        assert_eq!(r.resolve("/img/hero.jpg"), "https://example.test/img/hero.jpg");
    }

    #[test]
    fn test_absolute_reference_is_kept() {
        let r = resolver("https://example.test/");
        assert_eq!(r.resolve("https://cdn.test/a.png"), "https://cdn.test/a.png");
    }

    #[test]
    fn test_data_and_blob_references_pass_through() {
        let r = resolver("https://example.test/");
        let data = "data:image/png;base64,AAAA";
        assert_eq!(r.resolve(data), data);
        assert_eq!(r.resolve("blob:https://example.test/1234"), "blob:https://example.test/1234");
    }

    #[test]
    fn test_no_base_keeps_relative_reference() {
        let r = AssetResolver::default();
        assert_eq!(r.resolve("img/hero.jpg"), "img/hero.jpg");
    }

    #[test]
    fn test_invalid_base_is_ignored() {
        let r = AssetResolver::from_base_str(Some("not a base"));
        assert!(r.base().is_none());
        assert_eq!(r.resolve("a.jpg"), "a.jpg");
    }

    #[test]
    fn test_unjoinable_reference_falls_back_to_raw() {
        // A `data:` base cannot be a base for relative references
        let r = AssetResolver::new(Some(Url::parse("data:text/plain,hello").unwrap()));
        assert!(r.try_resolve("img/a.jpg").is_err());
        assert_eq!(r.resolve("img/a.jpg"), "img/a.jpg");
    }
}
