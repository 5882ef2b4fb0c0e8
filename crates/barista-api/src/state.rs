use std::path::Path;

use barista_core::SelectionLog;

use crate::settings::Settings;

/// Shared application state
///
/// The drink catalog is a process-wide static and needs no slot here. The
/// selection log is cloned per handler call; appends are deliberately
/// unsynchronized (whole-file rewrite, last writer wins).
#[derive(Clone)]
pub struct AppState {
    pub log: SelectionLog,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let path =
            Path::new(&settings.storage.data_dir).join(&settings.storage.selections_file);
        Self {
            log: SelectionLog::new(path),
        }
    }
}
