// src/config/env.rs
// Environment-based overrides

use std::time::Duration;
use tracing::{debug, warn};

/// Values read from HERO_* environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// HERO_AUTO_ADVANCE_MS
    pub auto_advance_delay: Option<Duration>,
    /// HERO_MANUAL_PAUSE_MS
    pub manual_pause_delay: Option<Duration>,
    /// HERO_DATA_URL
    pub data_url: Option<String>,
    /// HERO_BASE_URL
    pub base_url: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read overrides through `lookup`, so tests need not touch the process env
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let overrides = Self {
            auto_advance_delay: read("HERO_AUTO_ADVANCE_MS").and_then(|v| parse_millis("HERO_AUTO_ADVANCE_MS", &v)),
            manual_pause_delay: read("HERO_MANUAL_PAUSE_MS").and_then(|v| parse_millis("HERO_MANUAL_PAUSE_MS", &v)),
            data_url: read("HERO_DATA_URL"),
            base_url: read("HERO_BASE_URL"),
        };
        if overrides != Self::default() {
            debug!(?overrides, "Loaded carousel overrides from environment");
        }
        overrides
    }
}

fn parse_millis(name: &str, value: &str) -> Option<Duration> {
    match value.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            warn!(name, value, "Ignoring non-numeric millisecond value");
            None
        }
    }
}
