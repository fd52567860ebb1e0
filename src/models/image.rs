//! Image payload handling: sniffing and inline encoding.
//!
//! The capture flow only accepts files that really look like an image. A
//! CLI has no declared MIME type to trust, so we sniff the leading magic
//! bytes instead.

use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;

/// Recognized raster image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    Webp,
}

impl ImageKind {
    pub fn mime(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Gif => "image/gif",
            ImageKind::Bmp => "image/bmp",
            ImageKind::Tiff => "image/tiff",
            ImageKind::Webp => "image/webp",
        }
    }

    /// File extension used when the engine needs the payload on disk.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpg",
            ImageKind::Gif => "gif",
            ImageKind::Bmp => "bmp",
            ImageKind::Tiff => "tif",
            ImageKind::Webp => "webp",
        }
    }

    /// Sniff the format from the leading magic bytes. `None` means the
    /// bytes do not look like any supported image.
    pub fn sniff(bytes: &[u8]) -> Option<ImageKind> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(ImageKind::Png);
        }
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageKind::Jpeg);
        }
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            return Some(ImageKind::Gif);
        }
        if bytes.starts_with(b"BM") {
            return Some(ImageKind::Bmp);
        }
        if bytes.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || bytes.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]) {
            return Some(ImageKind::Tiff);
        }
        if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            return Some(ImageKind::Webp);
        }
        None
    }
}

/// An in-memory image, owned by the active capture flow.
///
/// Held between capture and submit, cleared on reset. Stored verbatim in
/// the record as a base64 data URL.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub kind: ImageKind,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    /// Wrap raw bytes, if they sniff as an image.
    pub fn from_bytes(bytes: Vec<u8>) -> Option<ImagePayload> {
        ImageKind::sniff(&bytes).map(|kind| ImagePayload { kind, bytes })
    }

    /// Read a file from disk. I/O errors are real errors; a readable file
    /// that is not an image yields `Ok(None)` so the caller can ignore it
    /// silently.
    pub fn from_path(path: &Path) -> AppResult<Option<ImagePayload>> {
        let bytes = fs::read(path).map_err(|e| {
            AppError::NoImage(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Encode as a `data:` URL for verbatim storage in the record.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.kind.mime(), STANDARD.encode(&self.bytes))
    }
}
