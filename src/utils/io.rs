// I/O utilities for reading tag data

use std::io::{ErrorKind, Read};

/// Decode a synchsafe integer (7 bits per byte)
///
/// The top bit of each byte is masked off, so a stray set bit cannot bleed into
/// the neighbouring group.
pub fn synchsafe_u32(bytes: [u8; 4]) -> u32 {
    (u32::from(bytes[0] & 0x7F) << 21)
        | (u32::from(bytes[1] & 0x7F) << 14)
        | (u32::from(bytes[2] & 0x7F) << 7)
        | u32::from(bytes[3] & 0x7F)
}

/// Read big-endian 32-bit integer
pub fn read_be_u32<R: Read>(reader: &mut R) -> std::io::Result<u32> {
    let mut buffer = [0u8; 4];
    reader.read_exact(&mut buffer)?;
    Ok(u32::from_be_bytes(buffer))
}

/// Read synchsafe 32-bit integer (7 bits per byte)
pub fn read_synchsafe_u32<R: Read>(reader: &mut R) -> std::io::Result<u32> {
    let mut buffer = [0u8; 4];
    reader.read_exact(&mut buffer)?;
    Ok(synchsafe_u32(buffer))
}

/// Fill `buf` as far as the reader allows, returning the number of bytes read
///
/// Unlike `read_exact`, running out of input is not an error: a short count means
/// the reader hit EOF.
pub fn read_fully<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
