// ID3v2 header decoding and frame scanning

use crate::error::{Id3Error, Result};
use crate::utils::io::{read_be_u32, read_fully, read_synchsafe_u32, synchsafe_u32};

use std::fmt;
use std::io::{ErrorKind, Read, Take};

/// ID3v2 header structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagHeader {
    /// (major, revision)
    pub version: (u8, u8),
    pub flags: u8,
    /// Size of the frame data after the header, excluding any footer
    pub size: u32,
}

impl TagHeader {
    pub const SIZE: usize = 10;
    const ID: [u8; 3] = [b'I', b'D', b'3'];

    pub const FLAG_UNSYNCHRONISATION: u8 = 0x80;
    pub const FLAG_EXTENDED_HEADER: u8 = 0x40;

    pub fn has_flag(&self, flag: u8) -> bool {
        self.flags & flag == flag
    }
}

/// Read and validate the 10-byte tag header
///
/// On success the reader sits at the first byte of the tag region. Version and
/// flags are returned as-is.
pub fn decode_header<R: Read>(reader: &mut R) -> Result<TagHeader> {
    let mut buffer = [0u8; TagHeader::SIZE];
    let read = read_fully(reader, &mut buffer).map_err(Id3Error::FileUnavailable)?;
    if read < TagHeader::SIZE {
        return Err(Id3Error::MalformedTag("stream is shorter than a tag header"));
    }

    if buffer[0..3] != TagHeader::ID {
        return Err(Id3Error::MalformedTag("no ID3v2 tag found"));
    }

    Ok(TagHeader {
        version: (buffer[3], buffer[4]),
        flags: buffer[5],
        size: synchsafe_u32([buffer[6], buffer[7], buffer[8], buffer[9]]),
    })
}

/// A four character frame identifier, such as `TIT2`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub [u8; 4]);

impl FrameId {
    pub const fn new(id: &[u8; 4]) -> Self {
        FrameId(*id)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameId(\"{}\")", self)
    }
}

/// How the four frame size bytes are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLayout {
    /// ID3v2.3: plain 32-bit big-endian
    BigEndian,
    /// ID3v2.4: synchsafe
    Synchsafe,
}

impl FrameLayout {
    /// Pick the frame layout for a tag version
    ///
    /// ID3v2.2 uses 3 character ids with 6 byte frame headers, which would be read
    /// misaligned, so it is rejected. Any other unknown major is read as ID3v2.3.
    pub fn for_version(version: (u8, u8)) -> Result<Self> {
        match version.0 {
            2 => Err(Id3Error::UnsupportedVersion(version.0, version.1)),
            4 => Ok(FrameLayout::Synchsafe),
            _ => Ok(FrameLayout::BigEndian),
        }
    }

    /// Whether the major version is one whose frame layout is known for certain
    pub fn is_known_version(major: u8) -> bool {
        matches!(major, 3 | 4)
    }

    fn decode_size(self, bytes: [u8; 4]) -> u32 {
        match self {
            FrameLayout::BigEndian => u32::from_be_bytes(bytes),
            FrameLayout::Synchsafe => synchsafe_u32(bytes),
        }
    }
}

/// ID3v2 frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub id: FrameId,
    pub size: u32,
    pub flags: u16,
}

impl FrameHeader {
    pub const SIZE: usize = 10;

    fn parse(buffer: [u8; Self::SIZE], layout: FrameLayout) -> Self {
        FrameHeader {
            id: FrameId([buffer[0], buffer[1], buffer[2], buffer[3]]),
            size: layout.decode_size([buffer[4], buffer[5], buffer[6], buffer[7]]),
            flags: u16::from_be_bytes([buffer[8], buffer[9]]),
        }
    }
}

/// ID3v2 frame structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: FrameHeader,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn id(&self) -> FrameId {
        self.header.id
    }
}

/// Lazily walks the frames of a tag region
///
/// The scanner owns the only cursor into the region and never reads past its end.
/// Every frame's payload is consumed in full, whether or not the caller looks at it,
/// so the next header is always read from the right offset. Once the region runs
/// out, padding starts, or a frame is truncated, the scanner yields nothing more.
pub struct FrameScanner<R> {
    region: Take<R>,
    layout: FrameLayout,
    done: bool,
}

impl<R: Read> FrameScanner<R> {
    /// Scan the `size` bytes following the tag header
    pub fn new(reader: R, size: u32, layout: FrameLayout) -> Self {
        Self::from_region(reader.take(u64::from(size)), layout)
    }

    /// Scan an already bounded region
    pub fn from_region(region: Take<R>, layout: FrameLayout) -> Self {
        FrameScanner {
            region,
            layout,
            done: false,
        }
    }

    /// Bytes left in the region that have not been consumed yet
    pub fn remaining(&self) -> u64 {
        self.region.limit()
    }

    fn next_frame(&mut self) -> Result<Option<Frame>> {
        let mut buffer = [0u8; FrameHeader::SIZE];
        let read = read_fully(&mut self.region, &mut buffer).map_err(Id3Error::Read)?;
        if read < FrameHeader::SIZE {
            return Ok(None);
        }

        // Padding: no valid frame id starts with a null byte
        if buffer[0] == 0 {
            return Ok(None);
        }

        let header = FrameHeader::parse(buffer, self.layout);

        let declared = header.size as usize;
        if u64::from(header.size) > self.region.limit() {
            return Err(Id3Error::TruncatedFrame {
                id: header.id,
                declared: header.size,
                remaining: self.region.limit(),
            });
        }

        // Grows with the bytes actually present, not the declared size
        let mut payload = Vec::new();
        let read = (&mut self.region)
            .take(u64::from(header.size))
            .read_to_end(&mut payload)
            .map_err(Id3Error::Read)?;
        if read < declared {
            // The file ended before the region did
            return Err(Id3Error::TruncatedFrame {
                id: header.id,
                declared: header.size,
                remaining: read as u64,
            });
        }

        Ok(Some(Frame { header, payload }))
    }
}

impl<R: Read> Iterator for FrameScanner<R> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_frame() {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for FrameScanner<R> {}

/// Consume the extended header at the start of the region, if the tag has one
///
/// ID3v2.3 stores a big-endian size that excludes the size field itself (6 or 10).
/// ID3v2.4 stores a synchsafe size that includes it (at least 6).
pub fn skip_extended_header<R: Read>(region: &mut Take<R>, layout: FrameLayout) -> Result<()> {
    let size = match layout {
        FrameLayout::BigEndian => read_be_u32(region),
        FrameLayout::Synchsafe => read_synchsafe_u32(region),
    }
    .map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => Id3Error::BadExtendedHeader(0),
        _ => Id3Error::Read(e),
    })?;

    let rest = match layout {
        FrameLayout::BigEndian => u64::from(size),
        FrameLayout::Synchsafe if size >= 6 => u64::from(size) - 4,
        FrameLayout::Synchsafe => return Err(Id3Error::BadExtendedHeader(size)),
    };

    if rest > region.limit() {
        return Err(Id3Error::BadExtendedHeader(size));
    }

    let skipped = std::io::copy(&mut region.by_ref().take(rest), &mut std::io::sink())
        .map_err(Id3Error::Read)?;
    if skipped < rest {
        return Err(Id3Error::BadExtendedHeader(size));
    }

    Ok(())
}
