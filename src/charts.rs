//! Chart Data
//!
//! Turns `OverviewData` into chart-ready shapes (percentages, colors, bar
//! groups). Everything here is recomputed on each render.

use dashboard_api::OverviewData;

/// Status key counted as done. Other spellings ("Done", "completed") are not.
pub const COMPLETED_STATUS: &str = "Completed";

/// Pie palette, cycled by status index
pub const COLORS: [&str; 8] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82ca9d", "#ffc658", "#8dd1e1",
];

pub const COMPLETED_FILL: &str = "#10b981";
pub const PENDING_FILL: &str = "#f59e0b";

/// `part / whole` as a rounded percentage; 0 when `whole` is 0.
pub fn percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

fn hsl(hue: usize) -> String {
    format!("hsl({}, 70%, 50%)", hue)
}

// ========================
// Dashboard
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCards {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub completion_rate: u32,
    pub status_types: usize,
}

pub fn stat_cards(data: &OverviewData) -> StatCards {
    let completed_tasks = data.status_counts.get(COMPLETED_STATUS).copied().unwrap_or(0);
    StatCards {
        total_tasks: data.total_tasks,
        completed_tasks,
        completion_rate: percent(completed_tasks, data.total_tasks),
        status_types: data.status_counts.len(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusSlice {
    pub name: String,
    pub value: u64,
    /// Share of all slices, rounded
    pub percent: u32,
    pub fill: &'static str,
}

impl StatusSlice {
    pub fn label(&self) -> String {
        format!("{} ({}%)", self.name, self.percent)
    }
}

pub fn status_slices(data: &OverviewData) -> Vec<StatusSlice> {
    let sum: u64 = data.status_counts.values().sum();
    data.status_counts
        .iter()
        .enumerate()
        .map(|(i, (name, &value))| StatusSlice {
            name: name.clone(),
            value,
            percent: percent(value, sum),
            fill: COLORS[i % COLORS.len()],
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeBar {
    pub name: String,
    pub completed: u64,
    pub pending: u64,
    pub completion_rate: u32,
}

pub fn assignee_bars(data: &OverviewData) -> Vec<AssigneeBar> {
    data.assignee_stats
        .iter()
        .map(|stat| AssigneeBar {
            name: stat.assignee.clone(),
            completed: stat.completed,
            pending: stat.total_tasks.saturating_sub(stat.completed),
            completion_rate: percent(stat.completed, stat.total_tasks),
        })
        .collect()
}

// ========================
// Insights panel
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBar {
    pub status: String,
    pub count: u64,
    pub fill: String,
}

pub fn status_bars(data: &OverviewData) -> Vec<StatusBar> {
    data.status_counts
        .iter()
        .enumerate()
        .map(|(i, (status, &count))| StatusBar {
            status: status.clone(),
            count,
            fill: hsl(i * 60),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceBar {
    pub assignee: String,
    pub completion_rate: u32,
    pub total_tasks: u64,
    pub completed: u64,
    pub fill: String,
}

pub fn performance_bars(data: &OverviewData) -> Vec<PerformanceBar> {
    data.assignee_stats
        .iter()
        .enumerate()
        .map(|(i, stat)| PerformanceBar {
            assignee: stat.assignee.clone(),
            completion_rate: percent(stat.completed, stat.total_tasks),
            total_tasks: stat.total_tasks,
            completed: stat.completed,
            fill: hsl(i * 90),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightsSummary {
    pub total: u64,
    pub completed: u64,
    pub team_members: usize,
    pub avg_completion: u32,
}

/// Summary tiles under the insights text; absent while there are no status bars.
pub fn insights_summary(
    statuses: &[StatusBar],
    performance: &[PerformanceBar],
) -> Option<InsightsSummary> {
    if statuses.is_empty() {
        return None;
    }
    let rate_sum: u64 = performance.iter().map(|p| p.completion_rate as u64).sum();
    Some(InsightsSummary {
        total: statuses.iter().map(|s| s.count).sum(),
        completed: statuses
            .iter()
            .find(|s| s.status == COMPLETED_STATUS)
            .map(|s| s.count)
            .unwrap_or(0),
        team_members: performance.len(),
        avg_completion: percent(rate_sum, performance.len() as u64 * 100),
    })
}

// ========================
// Bar chart input
// ========================

/// One bar in a group
#[derive(Debug, Clone, PartialEq)]
pub struct BarValue {
    pub value: f64,
    pub fill: String,
}

/// Bars sharing one x-axis label
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub bars: Vec<BarValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overview(json: &str) -> OverviewData {
        serde_json::from_str(json).unwrap()
    }

    fn sample() -> OverviewData {
        overview(
            r#"{
                "total_tasks": 10,
                "status_counts": {"Blocked": 1, "Completed": 6, "In Progress": 3},
                "assignee_stats": [
                    {"assignee": "Ana", "total_tasks": 4, "completed": 3},
                    {"assignee": "Ben", "total_tasks": 6, "completed": 3}
                ]
            }"#,
        )
    }

    #[test]
    fn test_stat_cards() {
        let cards = stat_cards(&sample());
        assert_eq!(cards.total_tasks, 10);
        assert_eq!(cards.completed_tasks, 6);
        assert_eq!(cards.completion_rate, 60);
        assert_eq!(cards.status_types, 3);
    }

    #[test]
    fn test_completion_rate_only_counts_literal_completed_key() {
        let data = overview(r#"{"status_counts": {"Done": 3, "Todo": 2}, "total_tasks": 5}"#);
        let cards = stat_cards(&data);
        assert_eq!(cards.completed_tasks, 0);
        assert_eq!(cards.completion_rate, 0);
    }

    #[test]
    fn test_zero_totals_do_not_divide() {
        let data = overview(
            r#"{"total_tasks": 0, "assignee_stats": [{"assignee": "Ana", "total_tasks": 0, "completed": 0}]}"#,
        );
        assert_eq!(stat_cards(&data).completion_rate, 0);
        assert_eq!(assignee_bars(&data)[0].completion_rate, 0);
        assert_eq!(performance_bars(&data)[0].completion_rate, 0);
    }

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
    }

    #[test]
    fn test_status_slices_cycle_palette() {
        let mut json = String::from(r#"{"status_counts": {"#);
        let entries: Vec<String> = (0..10).map(|i| format!(r#""s{i}": 1"#)).collect();
        json.push_str(&entries.join(","));
        json.push_str("}}");

        let slices = status_slices(&overview(&json));
        assert_eq!(slices.len(), 10);
        assert_eq!(slices[0].fill, "#0088FE");
        assert_eq!(slices[8].fill, slices[0].fill);
        assert_eq!(slices[9].fill, slices[1].fill);
        assert_eq!(slices[0].percent, 10);
    }

    #[test]
    fn test_slice_label() {
        let slices = status_slices(&sample());
        let completed = slices.iter().find(|s| s.name == "Completed").unwrap();
        assert_eq!(completed.label(), "Completed (60%)");
    }

    #[test]
    fn test_assignee_bars_pending_never_negative() {
        let data = overview(r#"{"assignee_stats": [{"assignee": "Ana", "total_tasks": 2, "completed": 5}]}"#);
        let bars = assignee_bars(&data);
        assert_eq!(bars[0].pending, 0);
        assert_eq!(bars[0].completion_rate, 250);
    }

    #[test]
    fn test_insights_bars_use_hue_steps() {
        let data = sample();
        let statuses = status_bars(&data);
        assert_eq!(statuses[1].fill, "hsl(60, 70%, 50%)");
        let performance = performance_bars(&data);
        assert_eq!(performance[1].fill, "hsl(90, 70%, 50%)");
        assert_eq!(performance[0].completion_rate, 75);
        assert_eq!(performance[1].completion_rate, 50);
    }

    #[test]
    fn test_insights_summary() {
        let data = sample();
        let summary = insights_summary(&status_bars(&data), &performance_bars(&data)).unwrap();
        assert_eq!(summary.total, 10);
        assert_eq!(summary.completed, 6);
        assert_eq!(summary.team_members, 2);
        assert_eq!(summary.avg_completion, 63);
    }

    #[test]
    fn test_insights_summary_hidden_without_statuses() {
        assert_eq!(insights_summary(&[], &[]), None);

        let data = overview(r#"{"status_counts": {"Todo": 2}}"#);
        let summary = insights_summary(&status_bars(&data), &[]).unwrap();
        assert_eq!(summary.avg_completion, 0);
        assert_eq!(summary.completed, 0);
    }
}
