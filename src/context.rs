//! Application Context
//!
//! Shared backend client provided via Leptos Context API.

use dashboard_api::{ApiConfig, HttpDashboardApi};
use leptos::prelude::*;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<HttpDashboardApi, LocalStorage>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            api: StoredValue::new_local(HttpDashboardApi::new(config)),
        }
    }

    /// Client handle; cloning shares the underlying connection pool.
    pub fn api(&self) -> HttpDashboardApi {
        self.api.get_value()
    }

    pub fn base_url(&self) -> String {
        self.api.with_value(|api| api.config().base_url.clone())
    }
}

/// Backend configuration for this build. `DASHBOARD_API_URL` overrides the
/// base URL at compile time.
pub fn api_config() -> ApiConfig {
    match option_env!("DASHBOARD_API_URL") {
        Some(url) if !url.is_empty() => ApiConfig::new(url),
        _ => ApiConfig::default(),
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
