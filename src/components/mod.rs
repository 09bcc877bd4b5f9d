//! UI Components
//!
//! Reusable Leptos components.

mod bar_chart;
mod chart_card;
mod dashboard;
mod file_list;
mod insights_panel;
mod loading_screen;
mod nav_bar;
mod pie_chart;
mod query_panel;
mod sheet_table;
mod status_banner;
mod upload_section;

pub use bar_chart::BarChart;
pub use chart_card::{ChartCard, StatCard};
pub use dashboard::Dashboard;
pub use file_list::FileList;
pub use insights_panel::InsightsPanel;
pub use loading_screen::LoadingScreen;
pub use nav_bar::NavBar;
pub use pie_chart::PieChart;
pub use query_panel::QueryPanel;
pub use sheet_table::SheetTable;
pub use status_banner::StatusBanner;
pub use upload_section::UploadSection;
