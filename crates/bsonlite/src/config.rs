// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec configuration.
//!
//! Controls how far the UTF-8 transcoder reaches into Unicode and whether
//! `\r\n` pairs are folded to `\n`. Defaults match the wire format's string
//! convention; `from_env()` lets a deployment pin the legacy BMP-only mode.

/// Environment variable selecting the UTF-8 mode (`full` or `bmp`).
pub const ENV_UTF8_MODE: &str = "BSONLITE_UTF8_MODE";

/// Environment variable toggling CRLF normalization (`1`/`0`/`true`/`false`).
pub const ENV_NORMALIZE_CRLF: &str = "BSONLITE_NORMALIZE_CRLF";

/// Unicode coverage of the transcoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Utf8Mode {
    /// All Unicode scalar values, 1 to 4 byte sequences.
    #[default]
    Full,
    /// Basic Multilingual Plane only (1 to 3 bytes). Anything above U+FFFF
    /// is rejected with `CodecError::UnsupportedCodePoint`.
    Bmp,
}

impl Utf8Mode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" => Some(Utf8Mode::Full),
            "bmp" => Some(Utf8Mode::Bmp),
            _ => None,
        }
    }
}

/// Transcoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Unicode coverage.
    pub utf8_mode: Utf8Mode,

    /// Fold `\r\n` to `\n` before encoding and when measuring.
    pub normalize_crlf: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            utf8_mode: Utf8Mode::Full,
            normalize_crlf: true,
        }
    }
}

impl CodecConfig {
    /// Defaults overridden by `BSONLITE_*` environment variables.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_UTF8_MODE) {
            match Utf8Mode::parse(&raw) {
                Some(mode) => config.utf8_mode = mode,
                None => log::debug!("[config] ignoring {}={:?}", ENV_UTF8_MODE, raw),
            }
        }

        if let Some(raw) = lookup(ENV_NORMALIZE_CRLF) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" => config.normalize_crlf = true,
                "0" | "false" => config.normalize_crlf = false,
                _ => log::debug!("[config] ignoring {}={:?}", ENV_NORMALIZE_CRLF, raw),
            }
        }

        config
    }

    /// Set the Unicode coverage.
    #[must_use]
    pub fn utf8_mode(mut self, mode: Utf8Mode) -> Self {
        self.utf8_mode = mode;
        self
    }

    /// Enable or disable CRLF normalization.
    #[must_use]
    pub fn normalize_crlf(mut self, enabled: bool) -> Self {
        self.normalize_crlf = enabled;
        self
    }
}
