//! Command line argument parsing for the autocorrect CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::suggest::SuggestConfig;

/// Port the web front-end would listen on.
pub const DEFAULT_PORT: u16 = 4567;

/// Usage text printed when the invocation cannot run.
pub const USAGE: &str =
    "autocorrect --data=<list of files>\n[--prefix] [--whitespace] [--led=<led>]\n[--gui] [--port=<port>]";

/// autocorrect - suggest corrections for the last word of each input line
#[derive(Parser, Debug, Clone)]
#[command(name = "autocorrect")]
#[command(about = "Trie-backed autocorrect: prefix, split-word and edit-distance suggestions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AutocorrectArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Corpus files (comma-separated)
    #[arg(long, value_name = "FILES", value_delimiter = ',')]
    pub data: Vec<PathBuf>,

    /// Suggest every word the last token is a prefix of
    #[arg(long)]
    pub prefix: bool,

    /// Suggest splitting the last token into two words
    #[arg(long)]
    pub whitespace: bool,

    /// Suggest words within this Levenshtein distance (0 or less disables)
    #[arg(long, value_name = "LED", allow_negative_numbers = true)]
    pub led: Option<i64>,

    /// Request the web front-end
    #[arg(long)]
    pub gui: bool,

    /// Port for the web front-end
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// JSON file with default suggestion settings
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl AutocorrectArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Whether any corpus file was given.
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    /// Suggestion settings: the config file (if any) with the command line
    /// flags layered on top.
    pub fn suggest_config(&self) -> Result<SuggestConfig> {
        let mut config = match &self.config {
            Some(path) => SuggestConfig::from_json_file(path)?,
            None => SuggestConfig::default(),
        };

        config.prefix |= self.prefix;
        config.whitespace |= self.whitespace;
        if let Some(led) = self.led {
            config.max_edit_distance = usize::try_from(led).unwrap_or(0);
        }

        Ok(config)
    }
}

/// Output formats for suggestions
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One suggestion per line
    Human,
    /// One JSON array per input line
    Json,
}
