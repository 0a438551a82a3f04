// Synaptik - app/state.rs
//
// Application state management. Holds the simulation parameters, the log
// transcript, the pending dialog, and the UI settings derived from config.
// Owned by the eframe::App implementation and passed by reference to every
// action handler.

use crate::core::model::{Dialog, LogTranscript, ParameterSet};
use crate::platform::config::AppConfig;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Current contents of the two parameter inputs.
    pub parameters: ParameterSet,

    /// Append-only log shown in the right-hand panel.
    pub transcript: LogTranscript,

    /// Modal dialog waiting for acknowledgement, if any.
    pub dialog: Option<Dialog>,

    /// Validated configuration (theme, panel widths, timestamps).
    pub config: AppConfig,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create the startup state: empty parameters and a seeded transcript.
    pub fn new(config: AppConfig, debug_mode: bool) -> Self {
        Self {
            parameters: ParameterSet::default(),
            transcript: LogTranscript::new(),
            dialog: None,
            config,
            debug_mode,
        }
    }

    /// Append a line to the transcript.
    pub fn log(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(line = %text, "Transcript line appended");
        self.transcript.append(text);
    }

    /// Show a modal dialog, replacing any dialog still open.
    pub fn show_dialog(&mut self, dialog: Dialog) {
        if let Some(ref previous) = self.dialog {
            tracing::debug!(title = %previous.title, "Replacing unacknowledged dialog");
        }
        self.dialog = Some(dialog);
    }

    /// Dismiss the current dialog.
    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// True while a modal dialog blocks the rest of the window.
    pub fn is_modal(&self) -> bool {
        self.dialog.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty_and_seeded() {
        let s = AppState::default();
        assert!(s.parameters.is_empty());
        assert_eq!(s.transcript.len(), 1);
        assert!(!s.is_modal());
    }

    #[test]
    fn test_dialog_show_and_dismiss() {
        let mut s = AppState::default();
        s.show_dialog(Dialog::info("A", "first"));
        s.show_dialog(Dialog::error("B", "second"));
        assert_eq!(s.dialog.as_ref().map(|d| d.title.as_str()), Some("B"));
        s.dismiss_dialog();
        assert!(!s.is_modal());
    }
}
