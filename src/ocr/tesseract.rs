//! Recognition through the external `tesseract` binary.

use crate::errors::{AppError, AppResult};
use crate::models::image::ImagePayload;
use crate::ocr::{OcrEngine, OcrStage, OcrUpdate};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::sync::mpsc::Sender;

/// Drives a Tesseract executable installed on the host.
///
/// The binary reads the image from a file and prints the recognized text on
/// stdout (`tesseract <image> stdout -l <langs>`). The payload is spooled to
/// a temp file for the duration of the call.
pub struct TesseractOcr {
    binary: String,
    languages: String,
}

impl TesseractOcr {
    /// `languages` is a Tesseract language profile such as `ara+eng`.
    pub fn new(binary: &str, languages: &str) -> Self {
        Self {
            binary: binary.to_string(),
            languages: languages.to_string(),
        }
    }

    fn spool_image(&self, image: &ImagePayload) -> AppResult<PathBuf> {
        let mut path = env::temp_dir();
        path.push(format!(
            "rsupplylog_capture_{}.{}",
            std::process::id(),
            image.kind.extension()
        ));
        fs::write(&path, &image.bytes)?;
        Ok(path)
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, image: &ImagePayload, updates: &Sender<OcrUpdate>) -> AppResult<String> {
        let _ = updates.send(OcrUpdate {
            stage: OcrStage::LoadingImage,
            progress: 0.0,
        });

        let input = self.spool_image(image)?;

        let _ = updates.send(OcrUpdate {
            stage: OcrStage::RecognizingText,
            progress: 0.0,
        });

        // The CLI gives no incremental progress; the stream is the
        // recognizing milestones around one blocking invocation.
        let output = Command::new(&self.binary)
            .arg(&input)
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .output();

        // Best-effort cleanup of the spool file before looking at the result.
        fs::remove_file(&input).ok();

        let output = output.map_err(|e| {
            AppError::Recognition(format!("cannot run '{}': {}", self.binary, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Recognition(format!(
                "'{}' exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        let _ = updates.send(OcrUpdate {
            stage: OcrStage::RecognizingText,
            progress: 1.0,
        });

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
