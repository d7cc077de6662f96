// Error types for tag extraction and feed assembly

use crate::id3::FrameId;

use std::io;

/// Alias for `Result<T, Id3Error>`
pub type Result<T> = std::result::Result<T, Id3Error>;

/// Errors raised while reading an ID3v2 tag
///
/// Only [`Id3Error::FileUnavailable`], [`Id3Error::MalformedTag`],
/// [`Id3Error::UnsupportedVersion`] and [`Id3Error::BadExtendedHeader`] end an extraction.
/// The rest are collected as issues on [`Extraction`](crate::id3::Extraction) while the
/// fields found so far are kept.
#[derive(Debug, thiserror::Error)]
pub enum Id3Error {
    /// The file could not be opened, or its first bytes could not be read
    #[error("file unavailable: {0}")]
    FileUnavailable(#[source] io::Error),
    /// No ID3v2 tag at the start of the stream
    #[error("malformed tag: {0}")]
    MalformedTag(&'static str),
    /// The tag uses a frame layout this reader does not understand
    #[error("unsupported ID3v2 version: 2.{0}.{1}")]
    UnsupportedVersion(u8, u8),
    /// The major version is not one this reader knows; frames were read as ID3v2.3
    #[error("unknown ID3v2 version 2.{0}.{1}, reading frames as ID3v2.3")]
    UnknownVersion(u8, u8),
    /// The extended header declares a size that cannot be valid
    #[error("bad extended header size: {0}")]
    BadExtendedHeader(u32),
    /// A frame declares more payload than remains in the tag
    #[error("frame {id} declares {declared} bytes, only {remaining} remain")]
    TruncatedFrame {
        /// The frame's identifier
        id: FrameId,
        /// The payload size from the frame header
        declared: u32,
        /// Bytes left in the tag region after the frame header
        remaining: u64,
    },
    /// A text frame uses an encoding other than Latin-1 or UTF-8
    #[error("frame {id} uses unsupported text encoding {encoding:#04x}")]
    UnsupportedEncoding {
        /// The frame's identifier
        id: FrameId,
        /// The raw encoding byte
        encoding: u8,
    },
    /// A text frame has no payload, not even an encoding byte
    #[error("text frame {0} is empty")]
    EmptyTextFrame(FrameId),
    /// The tag-wide unsynchronisation flag is set; frame contents are read as stored
    #[error("tag is unsynchronised, frame contents may contain stuffing bytes")]
    Unsynchronised,
    /// An I/O failure in the middle of the tag region
    #[error("failed to read tag region: {0}")]
    Read(#[source] io::Error),
}

/// Errors raised while assembling or writing the feed
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The episode search pattern could not be built
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Walking the episode directory failed
    #[error("failed to walk {0}")]
    Walk(#[from] glob::GlobError),
    /// Reading episode metadata, the template, or writing the feed failed
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The feed template failed to parse or render
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
