//! Dashboard API Client
//!
//! `DashboardApi` abstracts the backend REST surface so views and their tests
//! can run against any implementation. `HttpDashboardApi` is the reqwest-backed
//! one used in the browser.

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::models::{
    AskRequest, AskResponse, FilesResponse, InsightsResponse, OverviewData, ServiceInfo,
    SheetDataResponse, SheetTask, UploadReceipt, UploadedFile,
};
use crate::upload::FileUpload;

/// Backend operations consumed by the dashboard.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait DashboardApi {
    /// Liveness check (`GET /`). Any 2xx succeeds.
    async fn health(&self) -> Result<ServiceInfo>;

    /// Uploaded spreadsheets (`GET /files`)
    async fn files(&self) -> Result<Vec<UploadedFile>>;

    /// Aggregated statistics (`GET /get_overview`)
    async fn overview(&self) -> Result<OverviewData>;

    /// AI narrative (`GET /get_ai_insights`)
    async fn insights(&self) -> Result<String>;

    /// Multipart upload, field `file` (`POST /upload_excel`)
    async fn upload_excel(&self, upload: FileUpload) -> Result<UploadReceipt>;

    /// Natural-language question (`POST /ask_ai`)
    async fn ask_ai(&self, query: &str) -> Result<String>;

    /// Parsed task rows of one file (`GET /get_sheet_data`)
    async fn sheet_data(&self, file_id: i64) -> Result<Vec<SheetTask>>;
}

#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: Client,
    config: ApiConfig,
}

impl HttpDashboardApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Body of a 2xx response; anything else becomes an `ApiError`.
    async fn send_raw(&self, request: RequestBuilder) -> Result<String> {
        let response = request.timeout(self.config.timeout).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("<- {} ({} bytes)", status.as_u16(), body.len());

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = self.send_raw(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.url(path);
        debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }
}

impl Default for HttpDashboardApi {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[async_trait(?Send)]
impl DashboardApi for HttpDashboardApi {
    async fn health(&self) -> Result<ServiceInfo> {
        let url = self.config.url("/");
        debug!("GET {}", url);
        let body = self.send_raw(self.client.get(url)).await?;
        // Any 2xx counts as alive; the body is informational.
        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            debug!("Liveness body is not service info: {}", e);
            ServiceInfo::default()
        }))
    }

    async fn files(&self) -> Result<Vec<UploadedFile>> {
        let resp: FilesResponse = self.get("/files").await?;
        Ok(resp.files)
    }

    async fn overview(&self) -> Result<OverviewData> {
        self.get("/get_overview").await
    }

    async fn insights(&self) -> Result<String> {
        let resp: InsightsResponse = self.get("/get_ai_insights").await?;
        Ok(resp.insights)
    }

    async fn upload_excel(&self, upload: FileUpload) -> Result<UploadReceipt> {
        let url = self.config.url("/upload_excel");
        debug!("POST {} ({}, {} bytes)", url, upload.filename(), upload.len());

        let mime = upload.content_type();
        let (filename, bytes) = upload.into_parts();
        let part = Part::bytes(bytes).file_name(filename).mime_str(mime)?;
        let form = Form::new().part("file", part);
        self.send(self.client.post(url).multipart(form)).await
    }

    async fn ask_ai(&self, query: &str) -> Result<String> {
        let url = self.config.url("/ask_ai");
        debug!("POST {}", url);

        let resp: AskResponse = self
            .send(self.client.post(url).json(&AskRequest { query }))
            .await?;
        Ok(resp.response)
    }

    async fn sheet_data(&self, file_id: i64) -> Result<Vec<SheetTask>> {
        let url = self.config.url("/get_sheet_data");
        debug!("GET {}?file_id={}", url, file_id);

        let resp: SheetDataResponse = self
            .send(self.client.get(url).query(&[("file_id", file_id)]))
            .await?;
        Ok(resp.tasks)
    }
}
