//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use dashboard_api::{OverviewData, UploadedFile};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{MountOutcome, Snapshot};
use crate::models::{BackendStatus, Tab};

/// Shell state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Uploaded spreadsheets
    pub files: Vec<UploadedFile>,
    /// Aggregated statistics (None until the first successful fetch)
    pub overview: Option<OverviewData>,
    /// AI narrative
    pub insights: String,
    pub backend_status: BackendStatus,
    pub active_tab: Tab,
    /// First mount sequence in flight
    pub initializing: bool,
    /// Mount sequence re-run from the disconnected banner
    pub retrying: bool,
    /// Upload POST plus refresh in flight
    pub uploading: bool,
    /// File whose task rows are shown on the upload tab
    pub selected_file: Option<i64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            initializing: true,
            ..Default::default()
        }
    }

    /// Only the first run blanks the tab content; later runs keep panels mounted.
    pub fn begin_initialize(&mut self, first_run: bool) {
        if first_run {
            self.initializing = true;
        } else {
            self.retrying = true;
        }
    }

    pub fn finish_initialize(&mut self, outcome: MountOutcome) {
        self.backend_status = outcome.status;
        self.apply_snapshot(outcome.snapshot);
        self.initializing = false;
        self.retrying = false;
    }

    /// Overwrite only the parts that were fetched; failed fetches keep stale data.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        if let Some(files) = snapshot.files {
            self.files = files;
        }
        if let Some(overview) = snapshot.overview {
            self.overview = Some(overview);
        }
        if let Some(insights) = snapshot.insights {
            self.insights = insights;
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_begin_initialize(store: &AppStore, first_run: bool) {
    store.write().begin_initialize(first_run);
}

pub fn store_finish_initialize(store: &AppStore, outcome: MountOutcome) {
    store.write().finish_initialize(outcome);
}

/// Merge a fetch snapshot into the store
pub fn store_apply_snapshot(store: &AppStore, snapshot: Snapshot) {
    store.write().apply_snapshot(snapshot);
}
