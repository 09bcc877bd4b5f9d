//! Backend Models
//!
//! Request and response bodies of the dashboard backend. The backend is the
//! source of truth for every number here; fields it may omit deserialize to
//! their defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Liveness check body (`GET /`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
}

/// An uploaded spreadsheet (`GET /files`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub sheet_count: u32,
    #[serde(default)]
    pub upload_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilesResponse {
    #[serde(default)]
    pub files: Vec<UploadedFile>,
}

/// Per-assignee completion numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssigneeStat {
    pub assignee: String,
    #[serde(default, deserialize_with = "count")]
    pub completed: u64,
    #[serde(default, deserialize_with = "count")]
    pub total_tasks: u64,
}

/// Aggregated task statistics (`GET /get_overview`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewData {
    #[serde(default, deserialize_with = "status_counts")]
    pub status_counts: BTreeMap<String, u64>,
    #[serde(default)]
    pub assignee_stats: Vec<AssigneeStat>,
    #[serde(default, deserialize_with = "count")]
    pub total_tasks: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsResponse {
    #[serde(default)]
    pub insights: String,
}

/// Success body of `POST /upload_excel`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub file_id: Option<i64>,
    #[serde(default)]
    pub sheets_processed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub response: String,
}

/// One parsed task row (`GET /get_sheet_data`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetTask {
    pub id: i64,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub completed_date: Option<String>,
    #[serde(default)]
    pub story_points: Option<i64>,
    #[serde(default)]
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetDataResponse {
    #[serde(default)]
    pub tasks: Vec<SheetTask>,
}

/// Failure body shared by every endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
}

// Aggregates computed with SQL SUM may arrive as decimal strings or floats.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Int(u64),
    Float(f64),
    Text(String),
}

impl RawCount {
    fn into_count(self) -> u64 {
        let clamp = |f: f64| if f.is_finite() && f > 0.0 { f.round() as u64 } else { 0 };
        match self {
            RawCount::Int(n) => n,
            RawCount::Float(f) => clamp(f),
            RawCount::Text(s) => s.trim().parse::<f64>().map(clamp).unwrap_or(0),
        }
    }
}

fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Option::<RawCount>::deserialize(deserializer)?
        .map(RawCount::into_count)
        .unwrap_or(0))
}

fn status_counts<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, u64>, D::Error> {
    let raw = Option::<BTreeMap<String, Option<RawCount>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(status, n)| (status, n.map(RawCount::into_count).unwrap_or(0)))
        .collect())
}
