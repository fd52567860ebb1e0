//! OCR engine seam.
//!
//! The engine is an external collaborator: it takes an image payload and a
//! bilingual recognition profile and yields the recognized text. Progress is
//! not a callback but a sequence of [`OcrUpdate`] values sent over a channel;
//! an engine must send every update before returning, so updates strictly
//! precede the final result or failure.

pub mod tesseract;

use crate::errors::AppResult;
use crate::models::image::ImagePayload;
use std::sync::mpsc::Sender;

pub use tesseract::TesseractOcr;

/// Stage labels reported by an engine. Only `RecognizingText` is mapped to
/// visible progress; other stages exist for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcrStage {
    LoadingImage,
    RecognizingText,
}

/// One progress update: a stage plus a 0.0–1.0 ratio.
#[derive(Debug, Clone, Copy)]
pub struct OcrUpdate {
    pub stage: OcrStage,
    pub progress: f64,
}

impl OcrUpdate {
    pub fn percent(&self) -> u8 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

pub trait OcrEngine: Send {
    /// Run recognition over `image` and return the raw recognized text.
    ///
    /// Every update must be sent on `updates` before this returns. Send
    /// failures are ignored: a caller that dropped the receiver simply
    /// does not care about progress.
    fn recognize(&self, image: &ImagePayload, updates: &Sender<OcrUpdate>) -> AppResult<String>;
}
