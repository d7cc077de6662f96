// Episode discovery: one episode per MP3 file under the feed root

use crate::error::FeedError;
use crate::feed::Settings;
use crate::id3::{extract, TrackTags};

use chrono::{DateTime, Utc};
use glob::{glob_with, MatchOptions, Pattern};
use serde::Serialize;
use std::path::{Component, Path};

/// `Mon, 02 Jan 2006 15:04:05 -0700`
pub const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

const BITS_PER_BYTE: f64 = 8.0;

/// A single feed item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Episode {
    pub url: String,
    pub title: String,
    pub description: String,
    pub pub_date: String,
    pub file_size: u64,
    /// Estimated from the file size and the configured bitrate, in seconds
    pub duration: f64,
}

/// Find every MP3 file under `settings.root` and build its episode
///
/// Files are returned in path order. A file whose tag cannot be read still
/// becomes an episode, titled after its file name.
pub fn scan_episodes(settings: &Settings) -> Result<Vec<Episode>, FeedError> {
    let root = &settings.root;
    let pattern = format!("{}/**/*.mp3", Pattern::escape(&root.to_string_lossy()));
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    let mut paths = Vec::new();
    for entry in glob_with(&pattern, options)? {
        let path = entry?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut episodes = Vec::with_capacity(paths.len());
    for path in paths {
        let relative = path.strip_prefix(root).unwrap_or(&path);
        episodes.push(build_episode(settings, &path, relative)?);
    }

    tracing::info!(count = episodes.len(), root = %root.display(), "scanned episodes");
    Ok(episodes)
}

fn build_episode(settings: &Settings, path: &Path, relative: &Path) -> Result<Episode, FeedError> {
    let metadata = std::fs::metadata(path)?;
    let file_size = metadata.len();
    let modified: DateTime<Utc> = metadata.modified()?.into();

    let tags = match extract(path) {
        Ok(extraction) => {
            for issue in &extraction.issues {
                tracing::debug!(path = %path.display(), %issue, "tag issue");
            }
            extraction.tags
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "no usable tag, using file name");
            TrackTags::default()
        }
    };

    let title = display_title(&tags, &file_title(path));
    tracing::debug!(path = %path.display(), %title, "episode");

    Ok(Episode {
        url: format!("{}{}", settings.domain, escape_path_segment(&url_path(relative))),
        description: title.clone(),
        title,
        pub_date: modified.format(DATE_FORMAT).to_string(),
        file_size,
        duration: estimate_duration(file_size, settings.bitrate),
    })
}

/// `[artist]title` when the tag has a non-empty title, otherwise `fallback`
pub fn display_title(tags: &TrackTags, fallback: &str) -> String {
    match tags.title.as_deref() {
        Some(title) if !title.is_empty() => {
            format!("[{}]{}", tags.artist.as_deref().unwrap_or_default(), title)
        }
        _ => fallback.to_string(),
    }
}

/// The file name without its extension
fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Playback length in seconds for a constant bitrate stream
pub fn estimate_duration(file_size: u64, bitrate: f64) -> f64 {
    file_size as f64 * BITS_PER_BYTE / bitrate
}

/// Join the normal components of a relative path with `/`
fn url_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-encode `s` as a single URL path segment
///
/// Unreserved characters and `$&+=:@` pass through. Everything else, `/` included,
/// is encoded as `%XX`.
pub fn escape_path_segment(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => escaped.push(b as char),
            b'-' | b'_' | b'.' | b'~' | b'$' | b'&' | b'+' | b'=' | b':' | b'@' => {
                escaped.push(b as char)
            }
            _ => escaped.push_str(&format!("%{:02X}", b)),
        }
    }
    escaped
}
