// CLI configuration
use clap::{Args, Parser, Subcommand, ValueEnum};
use podfeed::feed::{self, Settings};
use std::path::PathBuf;

/// Podfeed - podcast RSS feeds from a directory of MP3 files
#[derive(Parser, Debug)]
#[command(name = "podfeed")]
#[command(about = "Builds a podcast RSS feed from a directory of MP3 files", long_about = None)]
#[command(version)]
pub struct Config {
    /// Output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Quiet mode (suppress progress messages)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for tag reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Pretty,
    /// Compact JSON, one object per line
    Json,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory and write its feed
    Build(BuildArgs),

    /// Show the title and artist read from audio file(s)
    Tags {
        /// Audio file path(s)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
}

/// Options for `build`
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// URL prefix for the feed and its episodes
    #[arg(short, long, env = "DOMAIN_NAME", default_value = feed::DEFAULT_DOMAIN)]
    pub domain: String,

    /// Feed file name, written under the root directory
    #[arg(short = 'f', long, default_value = feed::DEFAULT_FEED_PATH)]
    pub feed_path: String,

    /// Podcast title
    #[arg(short, long, default_value = feed::DEFAULT_TITLE)]
    pub title: String,

    /// Podcast description
    #[arg(long = "desc", default_value = feed::DEFAULT_DESCRIPTION)]
    pub description: String,

    /// Directory to scan for MP3 files
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// RSS template to use instead of the built-in one
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Bitrate used to estimate episode durations, in bits per second
    #[arg(long, default_value_t = feed::DEFAULT_BITRATE)]
    pub bitrate: f64,
}

impl BuildArgs {
    pub fn into_settings(self) -> Settings {
        Settings {
            root: self.root,
            domain: self.domain,
            feed_path: self.feed_path,
            title: self.title,
            description: self.description,
            template: self.template,
            bitrate: self.bitrate,
        }
    }
}
