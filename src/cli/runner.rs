//! CLI runner - executes a search

use crate::cli::commands::Cli;
use crate::config::{load_config, SearchConfig};
use crate::engine::{PageFetchLoop, Persisted, SearchOutcome};
use crate::error::Result;
use crate::request::SearchQuery;
use serde_json::json;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve the effective config: file (or defaults) overlaid with flags
    pub fn config(&self) -> Result<SearchConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => SearchConfig::default(),
        };

        if let Some(dir) = &self.cli.output_dir {
            config.output_dir.clone_from(dir);
        }
        if let Some(format) = self.cli.format {
            config.format = format;
        }
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }

        config.validate()?;
        Ok(config)
    }

    /// Run the search and print a one-line JSON summary
    pub async fn run(&self) -> Result<()> {
        let config = self.config()?;
        let query = SearchQuery::new(&self.cli.query, &self.cli.key, &self.cli.access_token);

        let outcome = PageFetchLoop::from_config(&config)?.run(&query).await?;
        println!("{}", summary(&query, &outcome));
        Ok(())
    }
}

/// Summary of a finished run
fn summary(query: &SearchQuery, outcome: &SearchOutcome) -> serde_json::Value {
    let (saved, path, error) = match &outcome.persisted {
        Persisted::Saved { path, .. } => (true, Some(path.display().to_string()), None),
        Persisted::Failed(e) => (false, None, Some(e.to_string())),
    };

    json!({
        "query": query.text,
        "records": outcome.results.len(),
        "pages": outcome.stats.pages,
        "stop_reason": outcome.stop_reason.to_string(),
        "quota_remaining": outcome.stats.quota_remaining,
        "saved": saved,
        "path": path,
        "error": error,
    })
}
