//! Text-encoding detection for transcript exports.
//!
//! Exports come out of the registrar's system either as UTF-8 (usually with a
//! byte-order mark) or as GBK, depending on the browser and OS used to save
//! them.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::TranscriptError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encodings a transcript may be saved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptEncoding {
    /// UTF-8, with an optional leading byte-order mark.
    Utf8Sig,
    Gbk,
}

/// Candidate encodings, tried in order.
pub static ENCODINGS: &[TranscriptEncoding] =
    &[TranscriptEncoding::Utf8Sig, TranscriptEncoding::Gbk];

impl TranscriptEncoding {
    pub fn label(self) -> &'static str {
        match self {
            TranscriptEncoding::Utf8Sig => "utf-8-sig",
            TranscriptEncoding::Gbk => "gbk",
        }
    }

    /// Decodes the whole buffer, or returns `None` on the first malformed
    /// sequence.
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        match self {
            TranscriptEncoding::Utf8Sig => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(body)
            }
            TranscriptEncoding::Gbk => {
                if has_gb18030_only_bytes(bytes) {
                    return None;
                }
                encoding_rs::GBK.decode_without_bom_handling_and_without_replacement(bytes)
            }
        }
    }
}

/// The WHATWG gbk decoder is really a GB18030 decoder. Strict GBK has no
/// single-byte 0x80 and no four-byte sequences, so either one means the file
/// is not GBK.
fn has_gb18030_only_bytes(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            0x00..=0x7F => i += 1,
            0x80 => return true,
            _ => {
                if matches!(bytes.get(i + 1), Some(0x30..=0x39)) {
                    return true;
                }
                i += 2;
            }
        }
    }
    false
}

impl fmt::Display for TranscriptEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Transcript text together with the encoding it was read as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub encoding: TranscriptEncoding,
    pub text: String,
}

/// Decodes raw transcript bytes with the first encoding in [`ENCODINGS`]
/// that accepts them.
///
/// # Errors
///
/// Returns [`TranscriptError::UnknownEncoding`] if no candidate decodes the
/// buffer cleanly.
pub fn decode_transcript(bytes: &[u8]) -> Result<DecodedText, TranscriptError> {
    for &encoding in ENCODINGS {
        match encoding.decode(bytes) {
            Some(text) => {
                debug!(%encoding, bytes = bytes.len(), "Transcript decoded");
                return Ok(DecodedText {
                    encoding,
                    text: text.into_owned(),
                });
            }
            None => debug!(%encoding, "Decode attempt failed"),
        }
    }
    Err(TranscriptError::UnknownEncoding)
}

/// Reads a transcript file from disk and decodes it.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_transcript<P: AsRef<Path>>(path: P) -> Result<DecodedText, TranscriptError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| TranscriptError::Io {
        path: path.display().to_string(),
        source,
    })?;
    decode_transcript(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8() {
        let decoded = decode_transcript("学分\n3\n".as_bytes()).unwrap();
        assert_eq!(decoded.encoding, TranscriptEncoding::Utf8Sig);
        assert_eq!(decoded.text, "学分\n3\n");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("学分".as_bytes());
        let decoded = decode_transcript(&bytes).unwrap();
        assert_eq!(decoded.text, "学分");
    }

    #[test]
    fn test_gbk_fallback() {
        // "学分" in GBK
        let bytes = [0xD1, 0xA7, 0xB7, 0xD6];
        let decoded = decode_transcript(&bytes).unwrap();
        assert_eq!(decoded.encoding, TranscriptEncoding::Gbk);
        assert_eq!(decoded.text, "学分");
    }

    #[test]
    fn test_gbk_rejects_lone_0x80() {
        let result = decode_transcript(&[0x80]);
        assert!(matches!(result, Err(TranscriptError::UnknownEncoding)));

        // 0x80 after valid GBK text
        let result = decode_transcript(&[0xD1, 0xA7, 0x80]);
        assert!(matches!(result, Err(TranscriptError::UnknownEncoding)));
    }

    #[test]
    fn test_gbk_rejects_four_byte_sequences() {
        let result = decode_transcript(&[0x81, 0x30, 0x81, 0x30]);
        assert!(matches!(result, Err(TranscriptError::UnknownEncoding)));

        let result = decode_transcript(&[0xD1, 0xA7, 0x84, 0x31, 0xA4, 0x39]);
        assert!(matches!(result, Err(TranscriptError::UnknownEncoding)));
    }

    #[test]
    fn test_gbk_two_byte_trail_in_ascii_range() {
        // "丂" is 0x81 0x40; the trail byte is ASCII '@', not a digit
        let decoded = decode_transcript(&[0x81, 0x40, b',', b'1']).unwrap();
        assert_eq!(decoded.encoding, TranscriptEncoding::Gbk);
        assert_eq!(decoded.text, "丂,1");
    }

    #[test]
    fn test_undecodable_bytes() {
        let result = decode_transcript(&[0xFF, 0xFF, 0xFF]);
        assert!(matches!(result, Err(TranscriptError::UnknownEncoding)));
    }

    #[test]
    fn test_empty_input_is_utf8() {
        let decoded = decode_transcript(&[]).unwrap();
        assert_eq!(decoded.encoding, TranscriptEncoding::Utf8Sig);
        assert!(decoded.text.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_transcript("/nonexistent/ysu_gpa/transcript.csv");
        assert!(matches!(result, Err(TranscriptError::Io { .. })));
    }
}
