// ID3 frame definitions and parsers

use crate::error::Id3Error;
use crate::id3::v2::{Frame, FrameId};
use crate::utils::encoding::{decode_text, TextEncoding};

/// Frame identifiers this crate reads
pub mod frame_ids {
    use super::FrameId;

    pub const TITLE: FrameId = FrameId::new(b"TIT2"); // Title/songname/content description
    pub const ARTIST: FrameId = FrameId::new(b"TPE1"); // Lead performer(s)/Soloist(s)
}

/// Why a text frame payload could not be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TextFrameError {
    #[error("text frame is empty")]
    Empty,
    #[error("unsupported text encoding {0:#04x}")]
    UnsupportedEncoding(u8),
}

impl TextFrameError {
    pub fn with_frame_id(self, id: FrameId) -> Id3Error {
        match self {
            TextFrameError::Empty => Id3Error::EmptyTextFrame(id),
            TextFrameError::UnsupportedEncoding(encoding) => {
                Id3Error::UnsupportedEncoding { id, encoding }
            }
        }
    }
}

/// Decode text frame data
///
/// The first byte selects the encoding, the rest is the text. Terminators and
/// BOMs are left in place.
pub fn decode_text_frame(payload: &[u8]) -> Result<String, TextFrameError> {
    let (&encoding_byte, text_data) = payload.split_first().ok_or(TextFrameError::Empty)?;
    let encoding = TextEncoding::from_byte(encoding_byte)
        .ok_or(TextFrameError::UnsupportedEncoding(encoding_byte))?;

    Ok(decode_text(text_data, encoding))
}

/// Decode a whole frame, tagging any failure with its id
pub fn decode_frame_text(frame: &Frame) -> Result<String, Id3Error> {
    decode_text_frame(&frame.payload).map_err(|e| e.with_frame_id(frame.id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_frame() {
        assert_eq!(decode_text_frame(b"\x00Hello").unwrap(), "Hello");
        assert_eq!(decode_text_frame(b"\x00\xC0\xFF").unwrap(), "Àÿ");
    }

    #[test]
    fn utf8_frame() {
        assert_eq!(decode_text_frame("\x03Jane Doe".as_bytes()).unwrap(), "Jane Doe");
        assert_eq!(decode_text_frame("\x03日本語".as_bytes()).unwrap(), "日本語");
    }

    #[test]
    fn encoding_byte_alone_is_empty_text() {
        assert_eq!(decode_text_frame(b"\x00").unwrap(), "");
    }

    #[test]
    fn terminators_are_kept() {
        assert_eq!(decode_text_frame(b"\x00Hi\x00").unwrap(), "Hi\0");
    }

    #[test]
    fn utf16_is_unsupported() {
        assert_eq!(
            decode_text_frame(b"\x01\xFF\xFEH\x00"),
            Err(TextFrameError::UnsupportedEncoding(0x01))
        );
        assert_eq!(
            decode_text_frame(b"\x02\x00H"),
            Err(TextFrameError::UnsupportedEncoding(0x02))
        );
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert_eq!(decode_text_frame(&[]), Err(TextFrameError::Empty));
    }

    #[test]
    fn errors_carry_the_frame_id() {
        let err = TextFrameError::UnsupportedEncoding(1).with_frame_id(frame_ids::TITLE);
        assert!(matches!(
            err,
            Id3Error::UnsupportedEncoding { id, encoding: 1 } if id == frame_ids::TITLE
        ));
    }
}
