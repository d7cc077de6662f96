// Title and artist extraction from an ID3v2 tag prefix

use crate::error::{Id3Error, Result};
use crate::id3::frames::{decode_frame_text, frame_ids};
use crate::id3::v2::{decode_header, skip_extended_header, FrameLayout, FrameScanner, TagHeader};

use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The fields recovered from a tag
///
/// `None` means the frame was never found (or could not be decoded), which is
/// different from a frame that decoded to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrackTags {
    pub title: Option<String>,
    pub artist: Option<String>,
}

impl TrackTags {
    fn is_complete(&self) -> bool {
        self.title.is_some() && self.artist.is_some()
    }
}

/// The outcome of a successful extraction
///
/// `issues` holds the conditions that were hit while scanning but did not stop the
/// extraction: frames skipped for their encoding, a truncated frame that ended
/// the scan, and so on.
#[derive(Debug, Default)]
pub struct Extraction {
    pub header: Option<TagHeader>,
    pub tags: TrackTags,
    pub issues: Vec<Id3Error>,
}

/// Read the title and artist from the ID3v2 tag at the start of a file
///
/// The file is closed before this returns, whichever way it returns.
pub fn extract<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    let file = File::open(path.as_ref()).map_err(Id3Error::FileUnavailable)?;
    extract_from_reader(BufReader::new(file))
}

/// Read the title and artist from a stream positioned at an ID3v2 header
pub fn extract_from_reader<R: Read>(mut reader: R) -> Result<Extraction> {
    let header = decode_header(&mut reader)?;

    let mut extraction = Extraction {
        header: Some(header),
        ..Extraction::default()
    };

    // Nothing to scan, whatever the version
    if header.size == 0 {
        return Ok(extraction);
    }

    let layout = FrameLayout::for_version(header.version)?;
    if !FrameLayout::is_known_version(header.version.0) {
        extraction
            .issues
            .push(Id3Error::UnknownVersion(header.version.0, header.version.1));
    }

    if header.has_flag(TagHeader::FLAG_UNSYNCHRONISATION) {
        extraction.issues.push(Id3Error::Unsynchronised);
    }

    let mut region = reader.take(u64::from(header.size));
    if header.has_flag(TagHeader::FLAG_EXTENDED_HEADER) {
        skip_extended_header(&mut region, layout)?;
    }

    for frame in FrameScanner::from_region(region, layout) {
        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                extraction.issues.push(e);
                break;
            }
        };

        let slot = match frame.id() {
            id if id == frame_ids::TITLE => &mut extraction.tags.title,
            id if id == frame_ids::ARTIST => &mut extraction.tags.artist,
            _ => continue,
        };

        if slot.is_some() {
            continue;
        }

        match decode_frame_text(&frame) {
            Ok(text) => *slot = Some(text),
            Err(e) => extraction.issues.push(e),
        }

        if extraction.tags.is_complete() {
            break;
        }
    }

    Ok(extraction)
}
