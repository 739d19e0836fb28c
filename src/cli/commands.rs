//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Singer tap for Pushbullet
#[derive(Parser, Debug)]
#[command(name = "tap-pushbullet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON), or `ENV` to read `TAP_PUSHBULLET_*` variables.
    /// May be repeated; later sources override earlier ones.
    #[arg(short, long)]
    pub config: Vec<String>,

    /// State file (JSON)
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Inline state JSON
    #[arg(long, conflicts_with = "state")]
    pub state_json: Option<String>,

    /// Also write the final state to this file
    #[arg(long)]
    pub state_output: Option<PathBuf>,

    /// Catalog file selecting the streams to sync
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Print the discovery catalog and exit
    #[arg(long, conflicts_with = "about")]
    pub discover: bool,

    /// Print tap information and exit
    #[arg(long)]
    pub about: bool,

    /// Output format for `--about`
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Maximum records per stream (0 = unlimited)
    #[arg(long)]
    pub max_records: Option<usize>,

    /// Emit state after each page
    #[arg(long)]
    pub state_per_page: bool,

    /// Keep syncing the remaining streams after one fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON document
    Json,
    /// Markdown table
    Markdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sync_args() {
        let cli = Cli::try_parse_from([
            "tap-pushbullet",
            "--config",
            "base.json",
            "--config",
            "ENV",
            "--state",
            "state.json",
            "--catalog",
            "catalog.json",
            "--max-records",
            "10",
        ])
        .unwrap();

        assert_eq!(cli.config, vec!["base.json".to_string(), "ENV".to_string()]);
        assert_eq!(cli.state, Some(PathBuf::from("state.json")));
        assert_eq!(cli.catalog, Some(PathBuf::from("catalog.json")));
        assert_eq!(cli.max_records, Some(10));
        assert!(!cli.discover);
        assert!(!cli.about);
        assert!(!cli.continue_on_error);
    }

    #[test]
    fn test_parse_about_markdown() {
        let cli = Cli::try_parse_from(["tap-pushbullet", "--about", "--format", "markdown"]).unwrap();

        assert!(cli.about);
        assert_eq!(cli.format, OutputFormat::Markdown);
        assert!(cli.config.is_empty());
    }

    #[test]
    fn test_discover_conflicts_with_about() {
        assert!(Cli::try_parse_from(["tap-pushbullet", "--about", "--discover"]).is_err());
    }

    #[test]
    fn test_state_sources_conflict() {
        assert!(Cli::try_parse_from([
            "tap-pushbullet",
            "--state",
            "state.json",
            "--state-json",
            "{}"
        ])
        .is_err());
    }
}
