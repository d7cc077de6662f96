// Helpers for building tagged files on disk

use std::io::Write;
use std::path::{Path, PathBuf};

/// Build an ID3v2.3 tag from `(id, payload)` pairs
pub fn id3v23_tag(frames: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (id, payload) in frames {
        body.extend_from_slice(*id);
        body.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        body.extend_from_slice(&[0, 0]);
        body.extend_from_slice(payload);
    }

    let size = body.len() as u32;
    let mut bytes = b"ID3\x03\x00\x00".to_vec();
    bytes.extend_from_slice(&[
        ((size >> 21) & 0x7F) as u8,
        ((size >> 14) & 0x7F) as u8,
        ((size >> 7) & 0x7F) as u8,
        (size & 0x7F) as u8,
    ]);
    bytes.extend(body);
    bytes
}

/// Write `tag` followed by some fake MPEG frames
pub fn write_mp3(dir: &Path, name: &str, tag: &[u8], audio_len: usize) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }

    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(tag).unwrap();
    let audio: Vec<u8> = [0xFF, 0xFB, 0x90, 0x64].iter().copied().cycle().take(audio_len).collect();
    file.write_all(&audio).unwrap();
    path
}
