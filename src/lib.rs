//! Podfeed - podcast RSS feeds from a directory of MP3 files
//!
//! The [`id3`] module reads the title and artist from the ID3v2 tag at the start
//! of an MP3 file. The [`feed`] module walks a directory, titles each episode from
//! its tag (falling back to the file name), and renders an RSS feed.
//!
//! ```no_run
//! let extraction = podfeed::id3::extract("episode.mp3")?;
//! if let Some(title) = extraction.tags.title {
//!     println!("{title}");
//! }
//! # Ok::<(), podfeed::error::Id3Error>(())
//! ```

pub mod error;
pub mod feed;
pub mod id3;
mod utils;

pub use error::{FeedError, Id3Error};
pub use id3::{extract, Extraction, TrackTags};
