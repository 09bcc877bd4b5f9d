//! Frontend Models
//!
//! View-level enums. Backend entities live in `dashboard_api`.

/// Top-level navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Upload,
    Insights,
    Query,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Upload, Tab::Insights, Tab::Query];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Upload => "upload",
            Tab::Insights => "ai-insights",
            Tab::Query => "query",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Upload => "Upload",
            Tab::Insights => "AI Insights",
            Tab::Query => "Ask AI",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Dashboard => "📊",
            Tab::Upload => "📁",
            Tab::Insights => "🤖",
            Tab::Query => "💬",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Team Performance Dashboard",
            Tab::Upload => "Upload Excel Files",
            Tab::Insights => "AI Insights & Analytics",
            Tab::Query => "Ask AI Assistant",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Tab::Dashboard => "Real-time analytics and team performance metrics",
            Tab::Upload => "Upload and process your team task data",
            Tab::Insights => "AI-powered insights and trend analysis",
            Tab::Query => "Ask questions about your team data in natural language",
        }
    }
}

/// Result of the most recent liveness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Checking,
    Connected,
    Disconnected,
}
