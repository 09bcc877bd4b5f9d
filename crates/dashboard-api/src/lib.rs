//! Dashboard API Client
//!
//! Typed bindings to the team task dashboard backend:
//! - config: base URL and request timeout
//! - models: request/response bodies
//! - upload: client-side spreadsheet validation
//! - client: the `DashboardApi` trait and its reqwest implementation

mod client;
mod config;
mod error;
mod models;
mod upload;

pub use client::{DashboardApi, HttpDashboardApi};
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, Result};
pub use models::*;
pub use upload::{is_spreadsheet_name, FileUpload, SPREADSHEET_EXTENSIONS};
