// ID3v2 metadata handling module
pub mod extract;
pub mod frames;
pub mod v2;

pub use extract::{extract, extract_from_reader, Extraction, TrackTags};
pub use frames::{decode_text_frame, frame_ids};
pub use v2::{decode_header, Frame, FrameHeader, FrameId, FrameLayout, FrameScanner, TagHeader};
