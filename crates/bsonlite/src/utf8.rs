// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Byte-level UTF-8 transcoder for string fields.
//!
//! Sequences are built and parsed by hand so the emitted bytes are fixed by
//! this module alone:
//!
//! ```text
//! U+0000  .. U+007F    0xxxxxxx
//! U+0080  .. U+07FF    110xxxxx 10xxxxxx
//! U+0800  .. U+FFFF    1110xxxx 10xxxxxx 10xxxxxx
//! U+10000 .. U+10FFFF  11110xxx 10xxxxxx 10xxxxxx 10xxxxxx   (Utf8Mode::Full)
//! ```
//!
//! With `normalize_crlf` on, every `\r\n` pair is emitted (and measured) as a
//! single `\n`. `utf8_byte_length` walks the same scalar stream as the
//! encoder, so the two always agree.

use std::borrow::Cow;

use crate::config::{CodecConfig, Utf8Mode};
use crate::error::{CodecError, CodecResult};

/// Fold `\r\n` pairs to `\n`. Borrows when there is nothing to fold.
pub fn normalize_line_endings(s: &str) -> Cow<'_, str> {
    if s.contains("\r\n") {
        Cow::Owned(s.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Encode `s` with the default configuration.
pub fn string_to_utf8_bytes(s: &str) -> CodecResult<Vec<u8>> {
    string_to_utf8_bytes_with(s, &CodecConfig::default())
}

/// Encode `s` into a freshly allocated UTF-8 byte sequence.
pub fn string_to_utf8_bytes_with(s: &str, config: &CodecConfig) -> CodecResult<Vec<u8>> {
    let mut out = Vec::with_capacity(s.len());
    for (index, c) in scalars(s, config.normalize_crlf).enumerate() {
        encode_scalar(c, index, config.utf8_mode, &mut out)?;
    }
    Ok(out)
}

/// Decode `bytes` with the default configuration.
pub fn utf8_bytes_to_string(bytes: &[u8]) -> CodecResult<String> {
    utf8_bytes_to_string_with(bytes, &CodecConfig::default())
}

/// Decode a UTF-8 byte sequence.
///
/// Truncated sequences, stray continuation bytes, overlong forms and
/// surrogates are rejected. Line endings are left as they are.
pub fn utf8_bytes_to_string_with(bytes: &[u8], config: &CodecConfig) -> CodecResult<String> {
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let lead = bytes[i];
        let (width, initial, min) = match lead {
            0x00..=0x7F => {
                out.push(char::from(lead));
                i += 1;
                continue;
            }
            _ if lead & 0xE0 == 0xC0 => (2, u32::from(lead & 0x1F), 0x80),
            _ if lead & 0xF0 == 0xE0 => (3, u32::from(lead & 0x0F), 0x800),
            _ if lead & 0xF8 == 0xF0 => (4, u32::from(lead & 0x07), 0x1_0000),
            _ => return Err(invalid(i, "invalid lead byte")),
        };

        let seq = bytes
            .get(i..i + width)
            .ok_or_else(|| invalid(i, "truncated sequence"))?;

        let mut code_point = initial;
        for &b in &seq[1..] {
            if b & 0xC0 != 0x80 {
                return Err(invalid(i, "invalid continuation byte"));
            }
            code_point = (code_point << 6) | u32::from(b & 0x3F);
        }

        if code_point < min {
            return Err(invalid(i, "overlong encoding"));
        }
        if width == 4 && config.utf8_mode == Utf8Mode::Bmp {
            let index = out.chars().count();
            log::debug!("[utf8] rejecting U+{:04X} in BMP mode", code_point);
            return Err(CodecError::UnsupportedCodePoint { code_point, index });
        }

        let c = char::from_u32(code_point)
            .ok_or_else(|| invalid(i, "surrogate or out-of-range scalar"))?;
        out.push(c);
        i += width;
    }

    Ok(out)
}

/// Byte count `string_to_utf8_bytes` would produce, without allocating.
pub fn utf8_byte_length(s: &str) -> CodecResult<usize> {
    utf8_byte_length_with(s, &CodecConfig::default())
}

pub fn utf8_byte_length_with(s: &str, config: &CodecConfig) -> CodecResult<usize> {
    scalars(s, config.normalize_crlf)
        .enumerate()
        .try_fold(0usize, |acc, (index, c)| {
            Ok(acc + scalar_width(c, index, config.utf8_mode)?)
        })
}

/// Scalar stream with optional `\r\n` folding.
fn scalars(s: &str, normalize_crlf: bool) -> impl Iterator<Item = char> + '_ {
    let mut chars = s.chars().peekable();
    std::iter::from_fn(move || {
        let c = chars.next()?;
        if normalize_crlf && c == '\r' && chars.peek() == Some(&'\n') {
            return chars.next();
        }
        Some(c)
    })
}

fn scalar_width(c: char, index: usize, mode: Utf8Mode) -> CodecResult<usize> {
    match u32::from(c) {
        0x0000..=0x007F => Ok(1),
        0x0080..=0x07FF => Ok(2),
        0x0800..=0xFFFF => Ok(3),
        code_point => match mode {
            Utf8Mode::Full => Ok(4),
            Utf8Mode::Bmp => {
                log::debug!("[utf8] rejecting U+{:04X} in BMP mode", code_point);
                Err(CodecError::UnsupportedCodePoint { code_point, index })
            }
        },
    }
}

fn encode_scalar(c: char, index: usize, mode: Utf8Mode, out: &mut Vec<u8>) -> CodecResult<()> {
    let cp = u32::from(c);
    match scalar_width(c, index, mode)? {
        1 => out.push(cp as u8),
        2 => out.extend_from_slice(&[0xC0 | (cp >> 6) as u8, 0x80 | (cp & 0x3F) as u8]),
        3 => out.extend_from_slice(&[
            0xE0 | (cp >> 12) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]),
        _ => out.extend_from_slice(&[
            0xF0 | (cp >> 18) as u8,
            0x80 | ((cp >> 12) & 0x3F) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]),
    }
    Ok(())
}

fn invalid(offset: usize, reason: &'static str) -> CodecError {
    CodecError::InvalidUtf8 { offset, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bmp() -> CodecConfig {
        CodecConfig::default().utf8_mode(Utf8Mode::Bmp)
    }

    #[test]
    fn test_byte_classes() {
        assert_eq!(string_to_utf8_bytes("A").unwrap(), vec![0x41]);
        assert_eq!(string_to_utf8_bytes("é").unwrap(), vec![0xC3, 0xA9]);
        assert_eq!(string_to_utf8_bytes("中").unwrap(), vec![0xE4, 0xB8, 0xAD]);
        assert_eq!(
            string_to_utf8_bytes("😀").unwrap(),
            vec![0xF0, 0x9F, 0x98, 0x80]
        );
    }

    #[test]
    fn test_boundary_scalars_match_std() {
        let samples = "\u{0}\u{7F}\u{80}\u{7FF}\u{800}\u{FFFF}\u{10000}\u{10FFFF}";
        let encoded = string_to_utf8_bytes(samples).unwrap();
        assert_eq!(encoded, samples.as_bytes());
        assert_eq!(utf8_byte_length(samples).unwrap(), encoded.len());
        assert_eq!(utf8_bytes_to_string(&encoded).unwrap(), samples);
    }

    #[test]
    fn test_roundtrip_mixed_bmp_text() {
        let s = "plain ASCII, Grüße aus Köln, 東京都, ½ ¾";
        for config in [CodecConfig::default(), bmp()] {
            let encoded = string_to_utf8_bytes_with(s, &config).unwrap();
            assert_eq!(utf8_byte_length_with(s, &config).unwrap(), encoded.len());
            assert_eq!(utf8_bytes_to_string_with(&encoded, &config).unwrap(), s);
        }
    }

    #[test]
    fn test_crlf_normalized() {
        let s = "line1\r\nline2\r\n\rtail\n";
        let encoded = string_to_utf8_bytes(s).unwrap();
        assert_eq!(encoded, b"line1\nline2\n\rtail\n");
        assert_eq!(utf8_byte_length(s).unwrap(), encoded.len());
        assert_eq!(
            utf8_bytes_to_string(&encoded).unwrap(),
            normalize_line_endings(s)
        );
    }

    #[test]
    fn test_crlf_preserved_when_disabled() {
        let config = CodecConfig::default().normalize_crlf(false);
        let encoded = string_to_utf8_bytes_with("a\r\nb", &config).unwrap();
        assert_eq!(encoded, b"a\r\nb");
        assert_eq!(utf8_byte_length_with("a\r\nb", &config).unwrap(), 4);
    }

    #[test]
    fn test_normalize_borrows_when_clean() {
        assert!(matches!(normalize_line_endings("no breaks"), Cow::Borrowed(_)));
        assert!(matches!(normalize_line_endings("a\r\nb"), Cow::Owned(_)));
    }

    #[test]
    fn test_bmp_mode_rejects_astral() {
        let err = string_to_utf8_bytes_with("ab😀", &bmp()).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnsupportedCodePoint {
                code_point: 0x1F600,
                index: 2
            }
        );
        assert_eq!(utf8_byte_length_with("ab😀", &bmp()).unwrap_err(), err);

        let err = utf8_bytes_to_string_with("ab😀".as_bytes(), &bmp()).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnsupportedCodePoint {
                code_point: 0x1F600,
                index: 2
            }
        );
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let cases: [(&[u8], usize, &str); 6] = [
            (&[0x61, 0xC3][..], 1, "truncated sequence"),
            (&[0xE4, 0xB8][..], 0, "truncated sequence"),
            (&[0xC3, 0x41][..], 0, "invalid continuation byte"),
            (&[0x80][..], 0, "invalid lead byte"),
            (&[0xC0, 0x80][..], 0, "overlong encoding"),
            (&[0xED, 0xA0, 0x80][..], 0, "surrogate or out-of-range scalar"),
        ];
        for (bytes, offset, reason) in cases {
            assert_eq!(
                utf8_bytes_to_string(bytes).unwrap_err(),
                CodecError::InvalidUtf8 { offset, reason },
                "input {:02X?}",
                bytes
            );
        }
    }

    #[test]
    fn test_decode_rejects_above_max_scalar() {
        // F4 90 80 80 would be U+110000
        let err = utf8_bytes_to_string(&[0xF4, 0x90, 0x80, 0x80]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidUtf8 { offset: 0, .. }));
    }

    #[test]
    fn test_empty() {
        assert!(string_to_utf8_bytes("").unwrap().is_empty());
        assert_eq!(utf8_byte_length("").unwrap(), 0);
        assert_eq!(utf8_bytes_to_string(&[]).unwrap(), "");
    }
}
