//! CLI runner - executes the selected mode

use crate::cli::commands::{Cli, OutputFormat};
use crate::engine::{SyncConfig, SyncEngine};
use crate::error::{Error, Result, ResultExt};
use crate::output::SingerWriter;
use crate::state::StateManager;
use crate::streams::StreamDefinition;
use crate::tap::{Catalog, Tap, TapConfig};
use serde_json::Value;
use std::fs;
use std::io::Write;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected mode
    pub async fn run(&self) -> Result<()> {
        if self.cli.about {
            return self.about();
        }

        let tap = Tap::new(self.load_config()?)?;
        if self.cli.discover {
            return self.discover(&tap);
        }
        self.sync(&tap).await
    }

    fn load_config(&self) -> Result<TapConfig> {
        if self.cli.config.is_empty() {
            return Err(Error::config("No config supplied (use --config)"));
        }
        TapConfig::load(self.cli.config.as_slice())
    }

    /// Load state
    fn load_state(&self) -> Result<StateManager> {
        // Inline state takes precedence
        let state = if let Some(state_json) = &self.cli.state_json {
            StateManager::from_json(state_json)?
        } else if let Some(path) = &self.cli.state {
            StateManager::from_file(path)?
        } else {
            StateManager::in_memory()
        };

        Ok(match &self.cli.state_output {
            Some(path) => state.persist_to(path),
            None => state,
        })
    }

    fn load_catalog(&self) -> Result<Option<Catalog>> {
        let Some(path) = &self.cli.catalog else {
            return Ok(None);
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("Invalid catalog JSON: {e}")))?;
        Catalog::from_value(value).map(Some)
    }

    fn about(&self) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string_pretty(&Tap::about())?,
            OutputFormat::Markdown => Tap::about_markdown(),
        };
        print_stdout(&text)
    }

    fn discover(&self, tap: &Tap) -> Result<()> {
        let catalog = serde_json::to_string_pretty(&tap.catalog())?;
        print_stdout(&catalog)
    }

    async fn sync(&self, tap: &Tap) -> Result<()> {
        let state = self.load_state()?;
        let streams: Vec<StreamDefinition> = match self.load_catalog()? {
            Some(catalog) => tap
                .select(&catalog)?
                .into_iter()
                .map(|s| s.definition().clone())
                .collect(),
            None => tap.streams().iter().map(|s| s.definition().clone()).collect(),
        };

        let mut sync_config = SyncConfig::new()
            .with_state_per_page(self.cli.state_per_page)
            .with_fail_fast(!self.cli.continue_on_error);
        if let Some(max) = self.cli.max_records {
            sync_config = sync_config.with_max_records(max);
        }

        let client = tap.http_client()?;
        let mut engine = SyncEngine::new(client, state.clone(), SingerWriter::stdout())
            .with_config(sync_config);
        let result = engine
            .sync_all(&streams, tap.config().start_date)
            .await
            .cloned();

        // Bookmarks of streams that completed are kept even when a later one fails
        if self.cli.state_output.is_some() {
            state.save().await?;
        }

        let stats = result?;
        info!(
            streams = stats.streams_synced,
            records = stats.records_synced,
            pages = stats.pages_fetched,
            truncated = stats.streams_truncated,
            duration_ms = stats.duration_ms,
            "Sync completed"
        );
        Ok(())
    }
}

fn print_stdout(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}
