// Synaptik - core/model.rs
//
// Core data types: simulation parameters, the log transcript, and the
// pending modal dialog. Pure data, no I/O.

use crate::util::constants;
use chrono::{DateTime, Local};

// =============================================================================
// Parameters
// =============================================================================

/// The two free-text simulation inputs.
///
/// Values are kept exactly as typed; nothing is trimmed or validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pub param1: String,
    pub param2: String,
}

impl ParameterSet {
    /// Clear both fields.
    pub fn clear(&mut self) {
        self.param1.clear();
        self.param2.clear();
    }

    /// True when both fields are empty.
    pub fn is_empty(&self) -> bool {
        self.param1.is_empty() && self.param2.is_empty()
    }
}

// =============================================================================
// Log transcript
// =============================================================================

/// A single line of the log transcript.
#[derive(Debug, Clone)]
pub struct TranscriptLine {
    /// Local time the line was appended.
    pub recorded_at: DateTime<Local>,

    /// The text exactly as appended.
    pub text: String,
}

impl TranscriptLine {
    /// Render the line for display, optionally prefixed with its time.
    pub fn display_text(&self, with_timestamp: bool) -> String {
        if with_timestamp {
            format!(
                "[{}] {}",
                self.recorded_at.format(constants::TRANSCRIPT_TIME_FORMAT),
                self.text
            )
        } else {
            self.text.clone()
        }
    }
}

/// Append-only history of handler-reported events.
///
/// The only mutation is [`LogTranscript::append`]; lines are never removed
/// or edited, so earlier lines are stable for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct LogTranscript {
    lines: Vec<TranscriptLine>,
}

impl LogTranscript {
    /// Create a transcript holding only the seed line.
    pub fn new() -> Self {
        let mut transcript = Self { lines: Vec::new() };
        transcript.append(constants::TRANSCRIPT_SEED_LINE);
        transcript
    }

    /// Append one line.
    pub fn append(&mut self, text: impl Into<String>) {
        self.lines.push(TranscriptLine {
            recorded_at: Local::now(),
            text: text.into(),
        });
    }

    /// All lines, oldest first.
    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    /// Number of lines, including the seed line.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false after construction; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of the most recently appended line.
    pub fn last_text(&self) -> Option<&str> {
        self.lines.last().map(|l| l.text.as_str())
    }

    /// Iterator over line texts, oldest first.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }
}

impl Default for LogTranscript {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Dialogs
// =============================================================================

/// Severity of a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

/// A modal message waiting to be acknowledged by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    /// Informational dialog.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Error dialog.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}
