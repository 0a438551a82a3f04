// Synaptik - tests/e2e_actions.rs
//
// End-to-end tests for the action table.
//
// These drive `dispatch` exactly as the GUI does, against the real
// filesystem (tempfile), with a scripted picker standing in for the native
// file dialogs.

use synaptik::app::actions::{dispatch, Action, FilePicker};
use synaptik::app::state::AppState;
use synaptik::core::model::DialogKind;
use synaptik::util::constants;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Picker that answers from a queue; an empty queue means "cancelled".
/// Counts how often each picker was shown.
#[derive(Default)]
struct ScriptedPicker {
    answers: RefCell<VecDeque<Option<PathBuf>>>,
    shown: RefCell<usize>,
}

impl ScriptedPicker {
    fn answering(answers: Vec<Option<PathBuf>>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            shown: RefCell::new(0),
        }
    }

    fn cancelling() -> Self {
        Self::default()
    }

    fn next(&self) -> Option<PathBuf> {
        *self.shown.borrow_mut() += 1;
        self.answers.borrow_mut().pop_front().flatten()
    }
}

impl FilePicker for ScriptedPicker {
    fn pick_project_to_open(&self) -> Option<PathBuf> {
        self.next()
    }
    fn pick_project_destination(&self) -> Option<PathBuf> {
        self.next()
    }
    fn pick_data_to_import(&self) -> Option<PathBuf> {
        self.next()
    }
}

fn transcript(state: &AppState) -> Vec<String> {
    state.transcript.texts().map(str::to_string).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

/// Start, type 10 and 20, run: last line is the simulation line.
#[test]
fn e2e_run_simulation_with_typed_parameters() {
    let mut state = AppState::default();
    state.parameters.param1 = "10".to_string();
    state.parameters.param2 = "20".to_string();

    dispatch(Action::ExecuteSimulation, &mut state, &ScriptedPicker::cancelling());

    assert_eq!(
        state.transcript.last_text(),
        Some("Running simulation with Param1=10 and Param2=20")
    );
    assert_eq!(
        state.transcript.lines()[0].text,
        constants::TRANSCRIPT_SEED_LINE
    );
}

/// Every run appends exactly one line and leaves earlier lines untouched.
#[test]
fn e2e_transcript_is_append_only_across_actions() {
    let mut state = AppState::default();
    let picker = ScriptedPicker::cancelling();
    let inputs = [("a", "b"), ("", ""), ("ünïcödé", "with spaces ")];

    for (p1, p2) in inputs {
        let before = transcript(&state);
        state.parameters.param1 = p1.to_string();
        state.parameters.param2 = p2.to_string();

        dispatch(Action::ExecuteSimulation, &mut state, &picker);

        let after = transcript(&state);
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], before.as_slice());
        let last = after.last().unwrap();
        assert!(last.contains(&format!("Param1={p1}")), "{last}");
        assert!(last.contains(&format!("Param2={p2}")), "{last}");
    }
}

/// Reset twice equals reset once.
#[test]
fn e2e_reset_is_idempotent() {
    let mut state = AppState::default();
    state.parameters.param1 = "x".to_string();
    state.parameters.param2 = "y".to_string();
    let picker = ScriptedPicker::cancelling();

    dispatch(Action::ResetParameters, &mut state, &picker);
    let once = state.parameters.clone();
    dispatch(Action::ResetParameters, &mut state, &picker);

    assert_eq!(state.parameters, once);
    assert!(state.parameters.param1.is_empty());
    assert!(state.parameters.param2.is_empty());
}

/// Opening a path that does not exist shows an error and logs nothing.
#[test]
fn e2e_open_nonexistent_project_shows_error() {
    let dir = TempDir::new().unwrap();
    let mut state = AppState::default();
    let before = transcript(&state);
    let picker = ScriptedPicker::answering(vec![Some(dir.path().join("nope.syn"))]);

    dispatch(Action::OpenProject, &mut state, &picker);

    assert_eq!(transcript(&state), before);
    let dialog = state.dialog.as_ref().expect("error dialog");
    assert_eq!(dialog.kind, DialogKind::Error);
    assert!(dialog.message.contains("nope.syn"), "{}", dialog.message);
    assert!(!transcript(&state).iter().any(|l| l.starts_with("Project opened")));
}

/// Save then open on the same path: one line each, regardless of content.
#[test]
fn e2e_save_then_open_same_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.syn");
    let mut state = AppState::default();
    state.parameters.param1 = "not persisted".to_string();
    let picker = ScriptedPicker::answering(vec![Some(path.clone()), Some(path.clone())]);

    dispatch(Action::SaveProject, &mut state, &picker);
    dispatch(Action::OpenProject, &mut state, &picker);

    let lines = transcript(&state);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], format!("Project saved: {}", path.display()));
    assert_eq!(lines[2], format!("Project opened: {}", path.display()));
    assert!(state.dialog.is_none());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        constants::PROJECT_PLACEHOLDER_CONTENT
    );
    // Opening never applies file content to the parameters.
    assert_eq!(state.parameters.param1, "not persisted");
}

/// Opening an arbitrary readable file succeeds; content is irrelevant.
#[test]
fn e2e_open_foreign_text_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "param1=99\nparam2=100\n").unwrap();
    let mut state = AppState::default();
    let picker = ScriptedPicker::answering(vec![Some(path.clone())]);

    dispatch(Action::OpenProject, &mut state, &picker);

    assert_eq!(
        state.transcript.last_text().map(str::to_string),
        Some(format!("Project opened: {}", path.display()))
    );
    assert!(state.parameters.is_empty());
}

/// Cancelling any picker changes nothing: no line, no dialog, no file.
#[test]
fn e2e_cancelled_pickers_are_no_ops() {
    for action in [Action::OpenProject, Action::SaveProject, Action::ImportData] {
        let mut state = AppState::default();
        state.parameters.param1 = "p".to_string();
        let before_lines = transcript(&state);
        let before_params = state.parameters.clone();
        let picker = ScriptedPicker::cancelling();

        dispatch(action, &mut state, &picker);

        assert_eq!(*picker.shown.borrow(), 1, "{action:?} must ask for a path");
        assert_eq!(transcript(&state), before_lines, "{action:?}");
        assert_eq!(state.parameters, before_params, "{action:?}");
        assert!(state.dialog.is_none(), "{action:?}");
    }
}

/// Import logs the chosen path even though the file is never opened.
#[test]
fn e2e_import_data_logs_path() {
    let mut state = AppState::default();
    let path = PathBuf::from("/data/measurements.csv");
    let picker = ScriptedPicker::answering(vec![Some(path.clone())]);

    dispatch(Action::ImportData, &mut state, &picker);

    assert_eq!(
        state.transcript.last_text().map(str::to_string),
        Some(format!("Data imported from: {}", path.display()))
    );
}

/// A failed save leaves the transcript alone and the shell usable.
#[test]
fn e2e_save_failure_then_recovery() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("missing_dir").join("p.syn");
    let good = dir.path().join("p.syn");
    let mut state = AppState::default();
    let picker = ScriptedPicker::answering(vec![Some(bad), Some(good.clone())]);

    dispatch(Action::SaveProject, &mut state, &picker);
    assert_eq!(state.transcript.len(), 1);
    assert_eq!(
        state.dialog.as_ref().map(|d| d.kind),
        Some(DialogKind::Error)
    );

    state.dismiss_dialog();
    dispatch(Action::SaveProject, &mut state, &picker);
    assert!(state.dialog.is_none());
    assert_eq!(
        state.transcript.last_text().map(str::to_string),
        Some(format!("Project saved: {}", good.display()))
    );
}

/// Every action can be looked up by name and dispatched without panicking.
#[test]
fn e2e_dispatch_every_action_by_name() {
    let names = [
        "executeSimulation",
        "resetParameters",
        "openProject",
        "saveProject",
        "simulationSettings",
        "manageAI",
        "importData",
        "showDocumentation",
        "showAbout",
    ];
    let mut state = AppState::default();
    let picker = ScriptedPicker::cancelling();
    for name in names {
        let action = Action::from_name(name).unwrap_or_else(|| panic!("unknown {name}"));
        dispatch(action, &mut state, &picker);
        state.dismiss_dialog();
    }
    // executeSimulation and showDocumentation each add one line.
    assert_eq!(state.transcript.len(), 3);
}
