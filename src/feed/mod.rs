// Podcast feed assembly
//
// Walks a directory of MP3 files, titles each episode from its ID3v2 tag (or its
// file name), and renders the result through an RSS template.

pub mod episode;
pub mod template;

pub use episode::{scan_episodes, Episode};
pub use template::{render_feed, write_feed, DEFAULT_TEMPLATE};

use crate::error::FeedError;

use chrono::Utc;
use serde::Serialize;
use std::path::PathBuf;

pub const DEFAULT_DOMAIN: &str = "https://lab.jiangsc.me/";
pub const DEFAULT_FEED_PATH: &str = "feed.xml";
pub const DEFAULT_TITLE: &str = "My Daily Readings";
pub const DEFAULT_DESCRIPTION: &str = "Podcast for daily reading";
/// Bitrate of the text-to-speech recordings the feed was built for, in bits per second
pub const DEFAULT_BITRATE: f64 = 32_000.0;

/// Everything needed to build a feed
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Directory scanned for episodes; the feed file is written here too
    pub root: PathBuf,
    /// URL prefix for the feed and every episode, normally ending in `/`
    pub domain: String,
    /// Feed file name, relative to both `root` and `domain`
    pub feed_path: String,
    pub title: String,
    pub description: String,
    /// Template file to use instead of the built-in one
    pub template: Option<PathBuf>,
    pub bitrate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            root: PathBuf::from("."),
            domain: DEFAULT_DOMAIN.to_string(),
            feed_path: DEFAULT_FEED_PATH.to_string(),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            template: None,
            bitrate: DEFAULT_BITRATE,
        }
    }
}

/// Template context for the whole feed
#[derive(Debug, Clone, Serialize)]
pub struct Podcast {
    pub link: String,
    pub title: String,
    pub description: String,
    pub build_date: String,
    pub episodes: Vec<Episode>,
}

impl Podcast {
    pub fn new(settings: &Settings, episodes: Vec<Episode>) -> Self {
        Podcast {
            link: format!("{}{}", settings.domain, settings.feed_path),
            title: settings.title.clone(),
            description: settings.description.clone(),
            build_date: Utc::now().format(episode::DATE_FORMAT).to_string(),
            episodes,
        }
    }
}

/// Scan, render and write the feed, returning where it was written
pub fn build_feed(settings: &Settings) -> Result<PathBuf, FeedError> {
    let episodes = scan_episodes(settings)?;
    let podcast = Podcast::new(settings, episodes);
    write_feed(settings, &podcast)
}
