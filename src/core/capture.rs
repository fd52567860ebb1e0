//! Capture/recognize flow.
//!
//! An explicit state machine that owns the captured image payload: no
//! ambient shared variable, the payload is handed out exactly once at
//! submit time and cleared on reset or failure.
//!
//! States: Idle → ImageSelected → Recognizing → Recognized, with any
//! recognition failure resetting the flow back to Idle. Starting a second
//! recognition while one is outstanding is rejected, not left undefined.

use crate::core::extract::{ExtractedFigures, Field, extract_figures};
use crate::errors::{AppError, AppResult};
use crate::models::image::ImagePayload;
use crate::ocr::{OcrEngine, OcrUpdate};
use std::sync::mpsc::Sender;

#[derive(Debug)]
enum State {
    Idle,
    ImageSelected(ImagePayload),
    Recognizing(ImagePayload),
    Recognized {
        image: ImagePayload,
        figures: ExtractedFigures,
        raw_text: String,
    },
}

/// Discriminant exposed to callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    ImageSelected,
    Recognizing,
    Recognized,
}

pub struct CaptureFlow {
    state: State,
    order: [Field; 5],
}

impl CaptureFlow {
    pub fn new(order: [Field; 5]) -> Self {
        Self {
            state: State::Idle,
            order,
        }
    }

    pub fn state(&self) -> CaptureState {
        match self.state {
            State::Idle => CaptureState::Idle,
            State::ImageSelected(_) => CaptureState::ImageSelected,
            State::Recognizing(_) => CaptureState::Recognizing,
            State::Recognized { .. } => CaptureState::Recognized,
        }
    }

    /// Offer an input to the flow. `None` (a non-image file) is silently
    /// ignored and the state is left untouched. Returns whether an image
    /// was actually selected.
    pub fn select_image(&mut self, payload: Option<ImagePayload>) -> bool {
        match payload {
            Some(img) => {
                self.state = State::ImageSelected(img);
                true
            }
            None => false,
        }
    }

    /// Move into Recognizing and hand out a copy of the image for the
    /// engine. Rejected with `RecognitionBusy` while a recognition is
    /// outstanding; re-recognizing an already recognized image is allowed.
    pub fn begin_recognition(&mut self) -> AppResult<ImagePayload> {
        let image = match std::mem::replace(&mut self.state, State::Idle) {
            State::ImageSelected(img) => img,
            State::Recognized { image, .. } => image,
            State::Recognizing(img) => {
                self.state = State::Recognizing(img);
                return Err(AppError::RecognitionBusy);
            }
            State::Idle => {
                return Err(AppError::NoImage("select an image first".into()));
            }
        };

        self.state = State::Recognizing(image.clone());
        Ok(image)
    }

    /// Record the engine's text and extract the figures.
    pub fn complete_recognition(&mut self, raw_text: String) -> AppResult<ExtractedFigures> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Recognizing(image) => {
                let figures = extract_figures(&raw_text, &self.order);
                self.state = State::Recognized {
                    image,
                    figures,
                    raw_text,
                };
                Ok(figures)
            }
            other => {
                self.state = other;
                Err(AppError::Other("no recognition in flight".into()))
            }
        }
    }

    /// Engine failure: full reset back to Idle, dropping the image.
    pub fn fail_recognition(&mut self) {
        self.state = State::Idle;
    }

    /// Run a whole recognition against `engine`. Progress updates flow
    /// through `updates` and strictly precede the return.
    pub fn recognize(
        &mut self,
        engine: &dyn OcrEngine,
        updates: &Sender<OcrUpdate>,
    ) -> AppResult<ExtractedFigures> {
        let image = self.begin_recognition()?;

        match engine.recognize(&image, updates) {
            Ok(text) => self.complete_recognition(text),
            Err(e) => {
                self.fail_recognition();
                Err(e)
            }
        }
    }

    pub fn figures(&self) -> Option<&ExtractedFigures> {
        match &self.state {
            State::Recognized { figures, .. } => Some(figures),
            _ => None,
        }
    }

    pub fn raw_text(&self) -> Option<&str> {
        match &self.state {
            State::Recognized { raw_text, .. } => Some(raw_text.as_str()),
            _ => None,
        }
    }

    /// Hand the captured image to the submit path. The flow returns to
    /// Idle: ownership moves out exactly once.
    pub fn take_image(&mut self) -> Option<ImagePayload> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::ImageSelected(img) => Some(img),
            State::Recognized { image, .. } => Some(image),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Drop any held image and result.
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }
}
