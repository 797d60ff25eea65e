//! Runtime configuration
//!
//! Everything here has a default, so a config file is optional. Request
//! directives (site, sort, order, filter, page size) and the quota threshold
//! are not configurable.

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::types::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Base URL of the StackExchange API
pub const DEFAULT_BASE_URL: &str = "https://api.stackexchange.com/2.3/";

/// Search endpoint, relative to the base URL
pub const SEARCH_ENDPOINT: &str = "search/advanced";

/// sosq configuration, usually loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// API base URL; must end with `/` for the endpoint to join under it
    pub base_url: String,

    /// Directory the result file is written to
    pub output_dir: PathBuf,

    /// Output file format
    pub format: OutputFormat,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            format: OutputFormat::Csv,
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Parse a YAML config
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// HTTP client settings derived from this config
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}

/// Load a config file
pub fn load_config(path: impl AsRef<Path>) -> Result<SearchConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    SearchConfig::from_yaml(&content)
}
