use crate::api::ApiError;
use crate::models::StatusSnapshot;

/// User-facing message shown for every kind of fetch failure
pub const ERROR_MESSAGE: &str = "Fehler beim Abrufen des Status";

/// What the dashboard currently knows: the last good snapshot and the error flag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    snapshot: Option<StatusSnapshot>,
    error: Option<String>,
}

/// The three mutually exclusive things the dashboard can show
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Error(String),
    Loading,
    Ready(StatusSnapshot),
}

impl DashboardState {
    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fold one fetch result into the state. Returns whether anything changed.
    ///
    /// A failure keeps the previous snapshot; it is only hidden while the
    /// error flag is set. A success replaces the snapshot and clears the flag.
    pub fn apply(&mut self, result: Result<StatusSnapshot, ApiError>) -> bool {
        match result {
            Ok(snapshot) => {
                let changed = self.error.is_some() || self.snapshot.as_ref() != Some(&snapshot);
                self.error = None;
                self.snapshot = Some(snapshot);
                changed
            }
            Err(_) => {
                let changed = self.error.is_none();
                self.error = Some(ERROR_MESSAGE.to_string());
                changed
            }
        }
    }

    /// Error wins over a stale snapshot, loading only until the first snapshot
    pub fn view(&self) -> DashboardView {
        if let Some(message) = &self.error {
            return DashboardView::Error(message.clone());
        }

        match &self.snapshot {
            Some(snapshot) => DashboardView::Ready(snapshot.clone()),
            None => DashboardView::Loading,
        }
    }
}
