//! Configuration types
//!
//! Pagination options and HTTP server options, loadable from YAML. Every
//! field has a default, so an empty document is a valid configuration.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of records per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default upper bound on a client-requested page size
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete application configuration loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerSettings,

    /// Pagination settings
    pub pagination: PaginationSettings,
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.pagination.validate()
    }
}

// ============================================================================
// Server Settings
// ============================================================================

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Scheme used for absolute links when the request does not carry one
    pub default_scheme: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            default_scheme: "http".to_string(),
        }
    }
}

impl ServerSettings {
    /// Validate server settings
    pub fn validate(&self) -> Result<()> {
        match self.default_scheme.as_str() {
            "http" | "https" => Ok(()),
            other => Err(Error::invalid_value(
                "server.default_scheme",
                format!("expected 'http' or 'https', got '{other}'"),
            )),
        }
    }
}

// ============================================================================
// Pagination Settings
// ============================================================================

/// Page-number pagination options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
    /// Records per page when the client does not ask for a size
    pub page_size: u32,

    /// Query parameter carrying the page number
    pub page_query_param: String,

    /// Query parameter letting the client choose the page size
    pub page_size_query_param: Option<String>,

    /// Upper bound on a client-requested page size
    pub max_page_size: Option<u32>,

    /// Page values that select the final page (e.g. `?page=last`)
    pub last_page_strings: Vec<String>,

    /// A trailing page with at most this many records is merged into the previous one
    pub orphans: u32,

    /// Whether page 1 of an empty collection is a valid page
    pub allow_empty_first_page: bool,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_query_param: "page".to_string(),
            page_size_query_param: Some("page_size".to_string()),
            max_page_size: Some(DEFAULT_MAX_PAGE_SIZE),
            last_page_strings: vec!["last".to_string()],
            orphans: 0,
            allow_empty_first_page: true,
        }
    }
}

impl PaginationSettings {
    /// Set the default page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the orphan threshold
    #[must_use]
    pub fn with_orphans(mut self, orphans: u32) -> Self {
        self.orphans = orphans;
        self
    }

    /// Set the maximum client page size (`None` = unbounded)
    #[must_use]
    pub fn with_max_page_size(mut self, max_page_size: Option<u32>) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    /// Validate pagination settings
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_value(
                "pagination.page_size",
                "must be greater than zero",
            ));
        }
        if self.max_page_size == Some(0) {
            return Err(Error::invalid_value(
                "pagination.max_page_size",
                "must be greater than zero",
            ));
        }
        if self.page_query_param.trim().is_empty() {
            return Err(Error::invalid_value(
                "pagination.page_query_param",
                "must not be empty",
            ));
        }
        if self.page_size_query_param.as_deref() == Some(self.page_query_param.as_str()) {
            return Err(Error::invalid_value(
                "pagination.page_size_query_param",
                "must differ from page_query_param",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = PaginationSettings::default();
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.page_query_param, "page");
        assert_eq!(settings.page_size_query_param.as_deref(), Some("page_size"));
        assert_eq!(settings.max_page_size, Some(100));
        assert_eq!(settings.last_page_strings, vec!["last".to_string()]);
        assert!(settings.allow_empty_first_page);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r"
server:
  port: 9000
pagination:
  page_size: 25
  orphans: 2
";
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.pagination.page_size, 25);
        assert_eq!(config.pagination.orphans, 2);
        assert_eq!(config.pagination.max_page_size, Some(100));
    }

    #[test]
    fn test_validation_errors() {
        let zero = PaginationSettings::default().with_page_size(0);
        assert!(matches!(
            zero.validate(),
            Err(Error::InvalidConfigValue { ref field, .. }) if field == "pagination.page_size"
        ));

        let zero_max = PaginationSettings::default().with_max_page_size(Some(0));
        assert!(zero_max.validate().is_err());

        let clash = PaginationSettings {
            page_size_query_param: Some("page".to_string()),
            ..Default::default()
        };
        assert!(clash.validate().is_err());

        let err = AppConfig::from_yaml_str("server:\n  default_scheme: ftp\n").unwrap_err();
        assert!(err.to_string().contains("server.default_scheme"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pagination:\n  page_size: 5").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.pagination.page_size, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
