//! Dashboard Component
//!
//! Stat cards, status distribution and per-assignee progress, all derived
//! from one `OverviewData`.

use dashboard_api::OverviewData;
use leptos::prelude::*;

use crate::charts::{
    assignee_bars, stat_cards, status_slices, BarGroup, BarValue, COMPLETED_FILL, PENDING_FILL,
};
use crate::components::{BarChart, ChartCard, PieChart, StatCard};

#[component]
pub fn Dashboard(data: OverviewData) -> impl IntoView {
    let cards = stat_cards(&data);
    let slices = status_slices(&data);
    let team = assignee_bars(&data)
        .into_iter()
        .map(|bar| BarGroup {
            label: bar.name.clone(),
            bars: vec![
                BarValue {
                    value: bar.completed as f64,
                    fill: COMPLETED_FILL.to_string(),
                },
                BarValue {
                    value: bar.pending as f64,
                    fill: PENDING_FILL.to_string(),
                },
            ],
        })
        .collect::<Vec<_>>();

    view! {
        <section class="dashboard">
            <div class="stat-grid">
                <StatCard label="Total Tasks" value=cards.total_tasks.to_string() icon="📋" accent="accent-blue" />
                <StatCard label="Completed" value=cards.completed_tasks.to_string() icon="✅" accent="accent-green" />
                <StatCard label="Completion Rate" value=format!("{}%", cards.completion_rate) icon="📈" accent="accent-purple" />
                <StatCard label="Active Statuses" value=cards.status_types.to_string() icon="🏷️" accent="accent-orange" />
            </div>

            <div class="chart-grid">
                <ChartCard title="Task Status Distribution">
                    <PieChart slices=slices />
                </ChartCard>
                <ChartCard title="Team Performance">
                    <BarChart
                        groups=team
                        legend=vec![("Completed", COMPLETED_FILL), ("Pending", PENDING_FILL)]
                    />
                </ChartCard>
            </div>
        </section>
    }
}
