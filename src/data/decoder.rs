// ============================================================
// Layer 4 - Content Reader
// ============================================================
// Turns a file's raw bytes into text by trying a fixed, ordered
// list of encodings and keeping the first that decodes the WHOLE
// input without error:
//
//   1. UTF-8         strict; a leading BOM is kept as U+FEFF
//   2. US-ASCII      strict 7-bit
//   3. ISO-8859-1    every byte is a code point U+0000..U+00FF
//   4. Windows-1252  strict; 0x81 0x8D 0x8F 0x90 0x9D are undefined
//
// ISO-8859-1 accepts any byte sequence, so with the default list a
// file practically never reaches `Failed`. The policy is still a
// plain first-success walk over whatever list is supplied.
//
// Text is read the way a text-mode file is: after a successful
// decode, `\r\n` and then any lone `\r` become `\n`.
//
// Note: encoding_rs follows the WHATWG label table, where
// "iso-8859-1" is an alias of windows-1252. Latin-1 proper is
// decoded with `encoding_rs::mem::decode_latin1` instead.

use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::{fmt, fs, path::Path};

/// One member of the ordered fallback list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateEncoding {
    Utf8,
    UsAscii,
    Latin1,
    Windows1252,
}

/// The list tried for every file, most specific first.
pub const DEFAULT_ENCODINGS: [CandidateEncoding; 4] = [
    CandidateEncoding::Utf8,
    CandidateEncoding::UsAscii,
    CandidateEncoding::Latin1,
    CandidateEncoding::Windows1252,
];

/// Bytes with no mapping in Windows-1252.
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

impl CandidateEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            CandidateEncoding::Utf8        => "utf-8",
            CandidateEncoding::UsAscii     => "us-ascii",
            CandidateEncoding::Latin1      => "latin-1",
            CandidateEncoding::Windows1252 => "windows-1252",
        }
    }

    /// Decode the entire input, or `None` on the first invalid byte.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            CandidateEncoding::Utf8 => UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),

            CandidateEncoding::UsAscii => {
                if Encoding::ascii_valid_up_to(bytes) == bytes.len() {
                    Some(encoding_rs::mem::decode_latin1(bytes).into_owned())
                } else {
                    None
                }
            }

            CandidateEncoding::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes).into_owned()),

            CandidateEncoding::Windows1252 => {
                if bytes.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b)) {
                    return None;
                }
                WINDOWS_1252
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(|text| text.into_owned())
            }
        }
    }
}

impl fmt::Display for CandidateEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of an ordered decode attempt.
///
/// `Failed` is distinct from `Decoded` with an empty string: an empty
/// file decodes fine under the very first encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Decoded {
        text:     String,
        encoding: CandidateEncoding,
    },
    Failed,
}

impl DecodeOutcome {
    pub fn into_text(self) -> Option<String> {
        match self {
            DecodeOutcome::Decoded { text, .. } => Some(text),
            DecodeOutcome::Failed => None,
        }
    }
}

/// Try each encoding in order and stop at the first success.
pub fn decode_with_fallback(bytes: &[u8], encodings: &[CandidateEncoding]) -> DecodeOutcome {
    for &encoding in encodings {
        if let Some(text) = encoding.decode(bytes) {
            return DecodeOutcome::Decoded { text, encoding };
        }
    }
    DecodeOutcome::Failed
}

/// Collapse `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read a file once and decode it with the given encoding list,
/// then normalize line endings.
///
/// I/O errors are returned as errors; only decoding failure maps to
/// `DecodeOutcome::Failed`.
pub fn read_with_fallback(path: &Path, encodings: &[CandidateEncoding]) -> Result<DecodeOutcome> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    match decode_with_fallback(&bytes, encodings) {
        DecodeOutcome::Decoded { text, encoding } => {
            tracing::debug!("Decoded '{}' as {}", path.display(), encoding);
            Ok(DecodeOutcome::Decoded { text: normalize_newlines(text), encoding })
        }
        DecodeOutcome::Failed => Ok(DecodeOutcome::Failed),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use CandidateEncoding::*;

    #[test]
    fn test_valid_utf8_uses_first_encoding() {
        let outcome = decode_with_fallback("héllo <&>".as_bytes(), &DEFAULT_ENCODINGS);
        assert_eq!(
            outcome,
            DecodeOutcome::Decoded { text: "héllo <&>".to_string(), encoding: Utf8 }
        );
    }

    #[test]
    fn test_empty_input_is_decoded_not_failed() {
        let outcome = decode_with_fallback(b"", &DEFAULT_ENCODINGS);
        assert_eq!(outcome, DecodeOutcome::Decoded { text: String::new(), encoding: Utf8 });
    }

    #[test]
    fn test_invalid_utf8_falls_back_to_latin1() {
        // 0xE9 alone is not UTF-8 and not ASCII; Latin-1 reads it as 'é'
        let outcome = decode_with_fallback(b"caf\xe9", &DEFAULT_ENCODINGS);
        assert_eq!(
            outcome,
            DecodeOutcome::Decoded { text: "café".to_string(), encoding: Latin1 }
        );
    }

    #[test]
    fn test_latin1_maps_c1_bytes_to_control_points() {
        let outcome = decode_with_fallback(b"\x80", &DEFAULT_ENCODINGS);
        assert_eq!(outcome.into_text(), Some("\u{80}".to_string()));
    }

    #[test]
    fn test_order_decides_interpretation() {
        // 0x80 is '€' in Windows-1252 but U+0080 in Latin-1
        let w_first = decode_with_fallback(b"\x80", &[Windows1252, Latin1]);
        let l_first = decode_with_fallback(b"\x80", &[Latin1, Windows1252]);
        assert_eq!(w_first.into_text(), Some("€".to_string()));
        assert_eq!(l_first.into_text(), Some("\u{80}".to_string()));
    }

    #[test]
    fn test_bom_is_kept() {
        let outcome = decode_with_fallback(b"\xEF\xBB\xBFhi", &DEFAULT_ENCODINGS);
        assert_eq!(outcome.into_text(), Some("\u{FEFF}hi".to_string()));
    }

    #[test]
    fn test_ascii_rejects_high_bytes() {
        assert_eq!(UsAscii.decode(b"plain"), Some("plain".to_string()));
        assert_eq!(UsAscii.decode(b"caf\xe9"), None);
    }

    #[test]
    fn test_windows1252_rejects_undefined_bytes() {
        assert_eq!(Windows1252.decode(b"ok\x81"), None);
        assert_eq!(Windows1252.decode(b"\x93quoted\x94"), Some("\u{201C}quoted\u{201D}".to_string()));
    }

    #[test]
    fn test_all_encodings_failing_reports_failed() {
        let outcome = decode_with_fallback(b"\xff\x81", &[Utf8, UsAscii, Windows1252]);
        assert_eq!(outcome, DecodeOutcome::Failed);
        assert_eq!(outcome.into_text(), None);
    }

    #[test]
    fn test_empty_list_fails() {
        assert_eq!(decode_with_fallback(b"abc", &[]), DecodeOutcome::Failed);
    }

    #[test]
    fn test_read_with_fallback_from_disk() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.txt");
        fs::write(&path, b"na\xefve").unwrap();

        let outcome = read_with_fallback(&path, &DEFAULT_ENCODINGS).unwrap();
        assert_eq!(
            outcome,
            DecodeOutcome::Decoded { text: "naïve".to_string(), encoding: Latin1 }
        );
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_with_fallback(&dir.path().join("nope.txt"), &DEFAULT_ENCODINGS).is_err());
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n".to_string()), "a\nb\nc\n");
        assert_eq!(normalize_newlines("\r\r\n".to_string()), "\n\n");
        assert_eq!(normalize_newlines("plain\n".to_string()), "plain\n");
    }

    #[test]
    fn test_read_translates_crlf_and_cr() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("w.txt");
        fs::write(&path, b"line1\r\nline2\rline3\n").unwrap();

        let outcome = read_with_fallback(&path, &DEFAULT_ENCODINGS).unwrap();
        assert_eq!(outcome.into_text(), Some("line1\nline2\nline3\n".to_string()));
    }

    #[test]
    fn test_read_reports_failed_for_custom_list() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.bin");
        fs::write(&path, b"\xff\xfe").unwrap();

        let outcome = read_with_fallback(&path, &[Utf8, UsAscii]).unwrap();
        assert_eq!(outcome, DecodeOutcome::Failed);
    }
}
