//! Backend Command Wrappers
//!
//! The view-facing sequences built on `DashboardApi`: mount, refresh, upload,
//! query. Failures that the UI tolerates are logged here and turned into
//! `None`; failures the user must see come back as display strings.

use dashboard_api::{DashboardApi, FileUpload, OverviewData, SheetTask, UploadedFile};
use log::{error, info, warn};

use crate::history::QueryHistoryEntry;
use crate::models::BackendStatus;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded and processed successfully!";
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Please upload only Excel files (.xlsx or .xls)";

/// Result of the three-way shell fetch. `None` means that fetch failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub files: Option<Vec<UploadedFile>>,
    pub overview: Option<OverviewData>,
    pub insights: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MountOutcome {
    pub status: BackendStatus,
    pub snapshot: Snapshot,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Blank input, nothing was sent
    Skipped,
    Answered(QueryHistoryEntry),
    /// Display text, already prefixed with `Error: `
    Failed(String),
}

pub async fn check_backend<A: DashboardApi + ?Sized>(api: &A) -> BackendStatus {
    match api.health().await {
        Ok(info) => {
            info!("Backend connected: {}", info.message);
            BackendStatus::Connected
        }
        Err(e) => {
            error!("Backend connection failed: {}", e);
            BackendStatus::Disconnected
        }
    }
}

pub async fn fetch_files<A: DashboardApi + ?Sized>(api: &A) -> Option<Vec<UploadedFile>> {
    api.files()
        .await
        .map_err(|e| error!("Error fetching files: {}", e))
        .ok()
}

pub async fn fetch_overview<A: DashboardApi + ?Sized>(api: &A) -> Option<OverviewData> {
    api.overview()
        .await
        .map_err(|e| error!("Error fetching overview: {}", e))
        .ok()
}

pub async fn fetch_insights<A: DashboardApi + ?Sized>(api: &A) -> Option<String> {
    api.insights()
        .await
        .map_err(|e| error!("Error fetching insights: {}", e))
        .ok()
}

/// Files, overview and insights, fetched concurrently.
pub async fn fetch_snapshot<A: DashboardApi + ?Sized>(api: &A) -> Snapshot {
    let (files, overview, insights) =
        futures::join!(fetch_files(api), fetch_overview(api), fetch_insights(api));
    Snapshot {
        files,
        overview,
        insights,
    }
}

/// Mount sequence: liveness check first, then the snapshot regardless of its outcome.
pub async fn initialize<A: DashboardApi + ?Sized>(api: &A) -> MountOutcome {
    let status = check_backend(api).await;
    let snapshot = fetch_snapshot(api).await;
    MountOutcome { status, snapshot }
}

/// Validate a picked or dropped file. The error is the alert text.
pub fn prepare_upload(filename: String, bytes: Vec<u8>) -> Result<FileUpload, String> {
    FileUpload::new(filename, bytes).map_err(|e| {
        warn!("Rejected upload: {}", e);
        UNSUPPORTED_FILE_MESSAGE.to_string()
    })
}

/// Post the file, then refetch everything. The error is the alert text.
pub async fn upload_and_refresh<A: DashboardApi + ?Sized>(
    api: &A,
    upload: FileUpload,
) -> Result<Snapshot, String> {
    let filename = upload.filename().to_string();
    match api.upload_excel(upload).await {
        Ok(receipt) => {
            info!(
                "Uploaded {} (file_id={:?}, sheets={:?})",
                filename, receipt.file_id, receipt.sheets_processed
            );
            Ok(fetch_snapshot(api).await)
        }
        Err(e) => {
            error!("Upload of {} failed: {}", filename, e);
            Err(format!("Upload failed: {}", e.user_message()))
        }
    }
}

/// Fresh insights followed by the overview they describe.
pub async fn refresh_insights<A: DashboardApi + ?Sized>(
    api: &A,
) -> Result<(String, Option<OverviewData>), String> {
    let insights = api.insights().await.map_err(|e| {
        error!("Error refreshing insights: {}", e);
        e.user_message()
    })?;
    Ok((insights, fetch_overview(api).await))
}

pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

pub async fn submit_query<A: DashboardApi + ?Sized>(api: &A, query: &str) -> QueryOutcome {
    if is_blank_query(query) {
        return QueryOutcome::Skipped;
    }
    match api.ask_ai(query).await {
        Ok(response) => QueryOutcome::Answered(QueryHistoryEntry::new(query, response)),
        Err(e) => {
            error!("Query failed: {}", e);
            QueryOutcome::Failed(format!("Error: {}", e.user_message()))
        }
    }
}

pub async fn load_sheet_data<A: DashboardApi + ?Sized>(
    api: &A,
    file_id: i64,
) -> Result<Vec<SheetTask>, String> {
    api.sheet_data(file_id).await.map_err(|e| {
        error!("Error loading tasks for file {}: {}", file_id, e);
        e.user_message()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dashboard_api::{ApiError, Result, ServiceInfo, UploadReceipt};
    use std::cell::{Cell, RefCell};

    use crate::history::QueryHistory;

    /// Records every backend call; failures are toggled per endpoint.
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<&'static str>>,
        down: Cell<bool>,
        fail_overview: bool,
        upload_error: Option<&'static str>,
        query_error: Option<&'static str>,
    }

    impl FakeApi {
        fn record(&self, call: &'static str) {
            self.calls.borrow_mut().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }

        fn unreachable() -> ApiError {
            ApiError::Status(503)
        }
    }

    #[async_trait(?Send)]
    impl DashboardApi for FakeApi {
        async fn health(&self) -> Result<ServiceInfo> {
            self.record("health");
            if self.down.get() {
                return Err(Self::unreachable());
            }
            Ok(ServiceInfo {
                message: "running".into(),
                ..Default::default()
            })
        }

        async fn files(&self) -> Result<Vec<UploadedFile>> {
            self.record("files");
            Ok(vec![UploadedFile {
                id: 1,
                filename: "sprint.xlsx".into(),
                sheet_count: 2,
                upload_date: "2024-03-01T09:15:00".into(),
            }])
        }

        async fn overview(&self) -> Result<OverviewData> {
            self.record("overview");
            if self.fail_overview {
                return Err(Self::unreachable());
            }
            Ok(serde_json::from_str(r#"{"total_tasks": 2, "status_counts": {"Completed": 2}}"#).unwrap())
        }

        async fn insights(&self) -> Result<String> {
            self.record("insights");
            Ok("All good".into())
        }

        async fn upload_excel(&self, upload: FileUpload) -> Result<UploadReceipt> {
            self.record("upload");
            match self.upload_error {
                Some(message) => Err(ApiError::Backend {
                    status: 400,
                    message: message.into(),
                }),
                None => Ok(UploadReceipt {
                    message: format!("stored {}", upload.filename()),
                    file_id: Some(5),
                    sheets_processed: vec!["Sheet1".into()],
                }),
            }
        }

        async fn ask_ai(&self, query: &str) -> Result<String> {
            self.record("ask");
            match self.query_error {
                Some(message) => Err(ApiError::Backend {
                    status: 500,
                    message: message.into(),
                }),
                None => Ok(format!("answer to {query}")),
            }
        }

        async fn sheet_data(&self, _file_id: i64) -> Result<Vec<SheetTask>> {
            self.record("sheet");
            Ok(Vec::new())
        }
    }

    fn sorted(mut calls: Vec<&'static str>) -> Vec<&'static str> {
        calls.sort();
        calls
    }

    #[tokio::test]
    async fn test_initialize_checks_then_fetches_all() {
        let api = FakeApi::default();
        let outcome = initialize(&api).await;

        assert_eq!(outcome.status, BackendStatus::Connected);
        let calls = api.calls();
        assert_eq!(calls[0], "health");
        assert_eq!(sorted(calls[1..].to_vec()), ["files", "insights", "overview"]);
        assert_eq!(outcome.snapshot.insights.as_deref(), Some("All good"));
    }

    #[tokio::test]
    async fn test_disconnected_until_a_check_succeeds() {
        let api = FakeApi::default();
        api.down.set(true);
        assert_eq!(initialize(&api).await.status, BackendStatus::Disconnected);
        assert_eq!(check_backend(&api).await, BackendStatus::Disconnected);

        api.down.set(false);
        assert_eq!(initialize(&api).await.status, BackendStatus::Connected);
    }

    #[tokio::test]
    async fn test_partial_failure_leaves_gap_in_snapshot() {
        let api = FakeApi {
            fail_overview: true,
            ..Default::default()
        };
        let snapshot = fetch_snapshot(&api).await;
        assert!(snapshot.files.is_some());
        assert!(snapshot.overview.is_none());
        assert!(snapshot.insights.is_some());
    }

    #[tokio::test]
    async fn test_successful_upload_refetches_exactly_three() {
        let api = FakeApi::default();
        let upload = prepare_upload("sprint.xlsx".into(), vec![1, 2]).unwrap();

        let snapshot = upload_and_refresh(&api, upload).await.unwrap();

        let calls = api.calls();
        assert_eq!(calls[0], "upload");
        assert_eq!(sorted(calls[1..].to_vec()), ["files", "insights", "overview"]);
        assert_eq!(snapshot.files.map(|f| f.len()), Some(1));
    }

    #[tokio::test]
    async fn test_failed_upload_reports_backend_message_and_skips_refresh() {
        let api = FakeApi {
            upload_error: Some("Only Excel files are allowed"),
            ..Default::default()
        };
        let upload = prepare_upload("sprint.xls".into(), vec![]).unwrap();

        let err = upload_and_refresh(&api, upload).await.unwrap_err();
        assert_eq!(err, "Upload failed: Only Excel files are allowed");
        assert_eq!(api.calls(), ["upload"]);
    }

    #[test]
    fn test_non_excel_file_is_rejected_before_any_call() {
        let err = prepare_upload("tasks.csv".into(), vec![1]).unwrap_err();
        assert_eq!(err, UNSUPPORTED_FILE_MESSAGE);
        assert!(prepare_upload("tasks.XLSX".into(), vec![1]).is_err());
    }

    #[tokio::test]
    async fn test_blank_queries_never_reach_backend() {
        let api = FakeApi::default();
        assert_eq!(submit_query(&api, "").await, QueryOutcome::Skipped);
        assert_eq!(submit_query(&api, "   \t\n").await, QueryOutcome::Skipped);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_n_queries_make_n_history_entries() {
        let api = FakeApi::default();
        let mut history = QueryHistory::default();

        for query in ["first", "second", "third"] {
            if let QueryOutcome::Answered(entry) = submit_query(&api, query).await {
                history.push(entry);
            }
        }

        assert_eq!(history.len(), 3);
        let order: Vec<_> = history.entries().iter().map(|e| e.query.as_str()).collect();
        assert_eq!(order, ["first", "second", "third"]);
        assert_eq!(history.recent()[0].query, "third");
        assert_eq!(history.entries()[1].response, "answer to second");
    }

    #[tokio::test]
    async fn test_failed_query_is_inline_error() {
        let api = FakeApi {
            query_error: Some("Query is required"),
            ..Default::default()
        };
        let outcome = submit_query(&api, "who?").await;
        assert_eq!(outcome, QueryOutcome::Failed("Error: Query is required".into()));
    }

    #[tokio::test]
    async fn test_refresh_insights_fetches_insights_then_overview() {
        let api = FakeApi::default();
        let (text, overview) = refresh_insights(&api).await.unwrap();
        assert_eq!(text, "All good");
        assert_eq!(overview.map(|o| o.total_tasks), Some(2));
        assert_eq!(api.calls(), ["insights", "overview"]);
    }
}
