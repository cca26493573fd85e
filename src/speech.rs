// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boundary to the speech-output collaborator.
//!
//! The core only produces utterance text; an external engine implements
//! [`SpeechOutput`] and actually speaks it. A [`PlaybackError`] is reportable
//! and non-fatal — it never touches navigation state.

use std::fmt;

use crate::model::CurrentStep;

/// External text-to-speech engine.
pub trait SpeechOutput {
    fn speak(&self, utterance: &str) -> Result<(), PlaybackError>;
}

/// The spoken form of the current step: `"<name>. Step <n>. <text>"`.
///
/// `None` when there is no step content to speak (nothing selected, or the
/// selected record has no steps).
pub fn step_utterance(step: &CurrentStep<'_>) -> Option<String> {
    match step {
        CurrentStep::Step { name, index, text, .. } => {
            Some(format!("{name}. Step {}. {text}", index + 1))
        }
        CurrentStep::NothingSelected | CurrentStep::NoSteps { .. } => None,
    }
}

/// Speaks the current step, if any.
///
/// `Ok(false)` means there was nothing to speak; engine errors pass through
/// for the caller to report.
pub fn speak_step<S: SpeechOutput + ?Sized>(
    speech: &S,
    step: &CurrentStep<'_>,
) -> Result<bool, PlaybackError> {
    match step_utterance(step) {
        Some(utterance) => speech.speak(&utterance).map(|()| true),
        None => Ok(false),
    }
}

/// Reported by the speech engine when an utterance cannot be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackError {
    message: String,
}

impl PlaybackError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "speech playback failed: {}", self.message)
    }
}

impl std::error::Error for PlaybackError {}
