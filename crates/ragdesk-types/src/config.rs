//! Page-level configuration.
//!
//! Pages configure the bootstrapper through `data-*` attributes on
//! `<body>`; anything missing falls back to same-origin endpoints and
//! `info` logging.

use crate::page::Endpoint;

pub const API_BASE_ATTRIBUTE: &str = "data-api-base";
pub const LOG_LEVEL_ATTRIBUTE: &str = "data-log-level";

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Prefix for endpoint paths. Empty means same origin.
    pub api_base: String,
    /// `tracing` level name: trace, debug, info, warn, error, off.
    pub log_level: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl PortalConfig {
    /// Build from raw attribute values. Blank values are ignored.
    pub fn from_attributes(api_base: Option<String>, log_level: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.map(|l| l.trim().to_ascii_lowercase()) {
            if !level.is_empty() {
                config.log_level = level;
            }
        }
        config
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_base, endpoint.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        let config = PortalConfig::default();
        assert_eq!(config.endpoint_url(Endpoint::Upload), "/upload");
        assert_eq!(config.endpoint_url(Endpoint::Query), "/query");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_api_base_trailing_slash_trimmed() {
        let config =
            PortalConfig::from_attributes(Some("http://localhost:8000/ ".to_string()), None);
        assert_eq!(
            config.endpoint_url(Endpoint::Query),
            "http://localhost:8000/query"
        );
    }

    #[test]
    fn test_blank_attributes_keep_defaults() {
        let config = PortalConfig::from_attributes(Some("  ".to_string()), Some("".to_string()));
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_log_level_normalized() {
        let config = PortalConfig::from_attributes(None, Some(" DEBUG ".to_string()));
        assert_eq!(config.log_level, "debug");
    }
}
