// Synaptik - app/actions.rs
//
// The action table: every named user action, the menu it lives in, and the
// handler that runs it. The GUI only ever calls `dispatch`, so the whole table
// is testable without a window.
//
// Handlers run synchronously to completion on the UI thread, including the
// native file picker and any file I/O.

use crate::app::state::AppState;
use crate::core::model::Dialog;
use crate::core::project;
use crate::util::constants;
use crate::util::error::Result;
use std::path::{Path, PathBuf};

// =============================================================================
// File picker seam
// =============================================================================

/// Source of user-chosen paths. `None` means the user cancelled.
pub trait FilePicker {
    /// Choose an existing project file to open.
    fn pick_project_to_open(&self) -> Option<PathBuf>;

    /// Choose where to save the project.
    fn pick_project_destination(&self) -> Option<PathBuf>;

    /// Choose a data file to import.
    fn pick_data_to_import(&self) -> Option<PathBuf>;
}

// =============================================================================
// Table
// =============================================================================

/// Every action the shell can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ExecuteSimulation,
    ResetParameters,
    OpenProject,
    SaveProject,
    SimulationSettings,
    ManageAi,
    ImportData,
    ShowDocumentation,
    ShowAbout,
}

/// Menu bar group an action appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGroup {
    File,
    Tools,
    Help,
}

impl MenuGroup {
    /// Menus in left-to-right order.
    pub const ALL: [MenuGroup; 3] = [MenuGroup::File, MenuGroup::Tools, MenuGroup::Help];

    pub fn label(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Tools => "Tools",
            Self::Help => "Help",
        }
    }
}

/// Signature shared by all action handlers.
pub type Handler = fn(&mut AppState, &dyn FilePicker);

/// One row of the action table.
#[derive(Clone, Copy)]
pub struct ActionEntry {
    pub action: Action,
    /// Stable camelCase identifier.
    pub name: &'static str,
    /// Button or menu item text.
    pub label: &'static str,
    /// `None` for control panel buttons.
    pub menu: Option<MenuGroup>,
    pub handler: Handler,
}

impl std::fmt::Debug for ActionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionEntry")
            .field("action", &self.action)
            .field("name", &self.name)
            .field("menu", &self.menu)
            .finish_non_exhaustive()
    }
}

static ACTION_TABLE: [ActionEntry; 9] = [
    ActionEntry {
        action: Action::ExecuteSimulation,
        name: "executeSimulation",
        label: "Run Simulation",
        menu: None,
        handler: execute_simulation,
    },
    ActionEntry {
        action: Action::ResetParameters,
        name: "resetParameters",
        label: "Reset Parameters",
        menu: None,
        handler: reset_parameters,
    },
    ActionEntry {
        action: Action::OpenProject,
        name: "openProject",
        label: "Open Project\u{2026}",
        menu: Some(MenuGroup::File),
        handler: open_project,
    },
    ActionEntry {
        action: Action::SaveProject,
        name: "saveProject",
        label: "Save Project\u{2026}",
        menu: Some(MenuGroup::File),
        handler: save_project,
    },
    ActionEntry {
        action: Action::SimulationSettings,
        name: "simulationSettings",
        label: "Simulation Settings",
        menu: Some(MenuGroup::Tools),
        handler: simulation_settings,
    },
    ActionEntry {
        action: Action::ManageAi,
        name: "manageAI",
        label: "Manage AI",
        menu: Some(MenuGroup::Tools),
        handler: manage_ai,
    },
    ActionEntry {
        action: Action::ImportData,
        name: "importData",
        label: "Import Data\u{2026}",
        menu: Some(MenuGroup::Tools),
        handler: import_data,
    },
    ActionEntry {
        action: Action::ShowDocumentation,
        name: "showDocumentation",
        label: "Documentation",
        menu: Some(MenuGroup::Help),
        handler: show_documentation,
    },
    ActionEntry {
        action: Action::ShowAbout,
        name: "showAbout",
        label: "About",
        menu: Some(MenuGroup::Help),
        handler: show_about,
    },
];

/// The full action table in menu order.
pub fn action_table() -> &'static [ActionEntry] {
    &ACTION_TABLE
}

/// Table entries belonging to one menu, in table order.
pub fn actions_in_menu(group: MenuGroup) -> impl Iterator<Item = &'static ActionEntry> {
    ACTION_TABLE.iter().filter(move |e| e.menu == Some(group))
}

impl Action {
    /// Every action in table order.
    pub const ALL: [Action; 9] = [
        Action::ExecuteSimulation,
        Action::ResetParameters,
        Action::OpenProject,
        Action::SaveProject,
        Action::SimulationSettings,
        Action::ManageAi,
        Action::ImportData,
        Action::ShowDocumentation,
        Action::ShowAbout,
    ];

    /// The table row for this action.
    pub fn entry(self) -> &'static ActionEntry {
        // Table order matches declaration order; the test module checks it.
        &ACTION_TABLE[self as usize]
    }

    /// Stable camelCase identifier, e.g. `"executeSimulation"`.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Display label for buttons and menu items.
    pub fn label(self) -> &'static str {
        self.entry().label
    }

    /// Look up an action by its camelCase identifier.
    pub fn from_name(name: &str) -> Option<Action> {
        ACTION_TABLE
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.action)
    }
}

/// Run one action to completion.
pub fn dispatch(action: Action, state: &mut AppState, picker: &dyn FilePicker) {
    tracing::info!(action = action.name(), "Dispatching action");
    (action.entry().handler)(state, picker);
}

// =============================================================================
// Handlers
// =============================================================================

fn execute_simulation(state: &mut AppState, _picker: &dyn FilePicker) {
    let line = format!(
        "Running simulation with Param1={} and Param2={}",
        state.parameters.param1, state.parameters.param2
    );
    state.log(line);
}

fn reset_parameters(state: &mut AppState, _picker: &dyn FilePicker) {
    state.parameters.clear();
}

fn open_project(state: &mut AppState, picker: &dyn FilePicker) {
    let Some(path) = picker.pick_project_to_open() else {
        tracing::debug!("Open project cancelled");
        return;
    };
    match open_project_at(&path) {
        Ok(()) => state.log(format!("Project opened: {}", path.display())),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to open project");
            state.show_dialog(Dialog::error("Error", format!("Error opening project: {e}")));
        }
    }
}

fn open_project_at(path: &Path) -> Result<()> {
    // Nothing consumes project content yet; reading only proves it is accessible.
    let _content = project::read_project(path)?;
    Ok(())
}

fn save_project(state: &mut AppState, picker: &dyn FilePicker) {
    let Some(chosen) = picker.pick_project_destination() else {
        tracing::debug!("Save project cancelled");
        return;
    };
    let path = project::with_default_extension(chosen);
    match save_project_at(&path) {
        Ok(()) => state.log(format!("Project saved: {}", path.display())),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to save project");
            state.show_dialog(Dialog::error("Error", format!("Error saving project: {e}")));
        }
    }
}

fn save_project_at(path: &Path) -> Result<()> {
    project::save_placeholder(path)?;
    Ok(())
}

fn simulation_settings(state: &mut AppState, _picker: &dyn FilePicker) {
    state.show_dialog(Dialog::info(
        "Simulation Settings",
        "Simulation settings will be available soon.",
    ));
}

fn manage_ai(state: &mut AppState, _picker: &dyn FilePicker) {
    state.show_dialog(Dialog::info(
        "Manage AI",
        "AI management is under development.",
    ));
}

fn import_data(state: &mut AppState, picker: &dyn FilePicker) {
    let Some(path) = picker.pick_data_to_import() else {
        tracing::debug!("Import data cancelled");
        return;
    };
    state.log(format!("Data imported from: {}", path.display()));
}

fn show_documentation(state: &mut AppState, _picker: &dyn FilePicker) {
    tracing::debug!(url = constants::DOCUMENTATION_URL, "Documentation requested");
    state.log("Opening documentation...");
}

fn show_about(state: &mut AppState, _picker: &dyn FilePicker) {
    state.show_dialog(Dialog::info("About", about_text()));
}

/// Body of the About dialog.
pub fn about_text() -> String {
    format!(
        "{}\nVersion {}\nDeveloped by {}",
        constants::APP_TITLE,
        constants::APP_VERSION,
        constants::APP_AUTHORS
    )
}
