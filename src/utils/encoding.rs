// Encoding utilities

use encoding_rs::{mem, UTF_8};

/// Text encodings understood by the text frame decoder
///
/// ID3v2 also defines UTF-16 with BOM (`0x01`) and UTF-16BE (`0x02`); those have no
/// variant here and are reported as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Latin1 = 0,
    Utf8 = 3,
}

impl TextEncoding {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(TextEncoding::Latin1),
            3 => Some(TextEncoding::Utf8),
            _ => None,
        }
    }
}

/// Decode text with specified encoding
///
/// Latin-1 maps every byte to the code point of the same value. UTF-8 is taken as-is,
/// with invalid sequences replaced by U+FFFD. Neither strips a BOM or NUL terminator.
pub fn decode_text(data: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Latin1 => mem::decode_latin1(data).into_owned(),
        TextEncoding::Utf8 => UTF_8.decode_without_bom_handling(data).0.into_owned(),
    }
}
