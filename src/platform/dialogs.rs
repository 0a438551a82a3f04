// Synaptik - platform/dialogs.rs
//
// Native file pickers backed by `rfd`. Each call blocks the UI thread until
// the user confirms or cancels.

use crate::app::actions::FilePicker;
use crate::util::constants;
use std::path::PathBuf;

/// `FilePicker` that shows the operating system's file dialogs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFilePicker;

impl NativeFilePicker {
    fn project_dialog(title: &str) -> rfd::FileDialog {
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter("Synaptik files", &[constants::PROJECT_EXTENSION])
            .add_filter("All files", &["*"])
    }
}

impl FilePicker for NativeFilePicker {
    fn pick_project_to_open(&self) -> Option<PathBuf> {
        Self::project_dialog("Open Project").pick_file()
    }

    fn pick_project_destination(&self) -> Option<PathBuf> {
        // Extension defaulting happens in the save handler so every picker
        // gets the same behaviour.
        Self::project_dialog("Save Project").save_file()
    }

    fn pick_data_to_import(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Import Data")
            .add_filter("CSV files", &[constants::IMPORT_EXTENSION])
            .add_filter("All files", &["*"])
            .pick_file()
    }
}
