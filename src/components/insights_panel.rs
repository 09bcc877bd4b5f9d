//! AI Insights Panel
//!
//! Narrative text plus status and performance charts. The charts come from a
//! fresh `/get_overview` fetch every time the `insights` prop changes.

use dashboard_api::OverviewData;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use crate::charts::{insights_summary, performance_bars, status_bars, BarGroup, BarValue};
use crate::commands;
use crate::components::{BarChart, ChartCard, StatCard};
use crate::context::use_app_context;
use crate::markdown::render_insights;

fn status_groups(data: &OverviewData) -> Vec<BarGroup> {
    status_bars(data)
        .into_iter()
        .map(|bar| BarGroup {
            label: bar.status.clone(),
            bars: vec![BarValue {
                value: bar.count as f64,
                fill: bar.fill,
            }],
        })
        .collect()
}

fn performance_groups(data: &OverviewData) -> Vec<BarGroup> {
    performance_bars(data)
        .into_iter()
        .map(|bar| BarGroup {
            label: bar.assignee.clone(),
            bars: vec![BarValue {
                value: bar.completion_rate as f64,
                fill: bar.fill,
            }],
        })
        .collect()
}

#[component]
pub fn InsightsPanel(#[prop(into)] insights: Signal<String>) -> impl IntoView {
    let ctx = use_app_context();
    let (current, set_current) = signal(String::new());
    let (overview, set_overview) = signal::<Option<OverviewData>>(None);
    let (refreshing, set_refreshing) = signal(false);

    Effect::new(move |_| {
        set_current.set(insights.get());
        let api = ctx.api();
        spawn_local(async move {
            if let Some(data) = commands::fetch_overview(&api).await {
                set_overview.set(Some(data));
            }
        });
    });

    let on_refresh = move |_| {
        set_refreshing.set(true);
        let api = ctx.api();
        spawn_local(async move {
            if let Ok((text, data)) = commands::refresh_insights(&api).await {
                debug!("[InsightsPanel] Refreshed insights ({} chars)", text.len());
                set_current.set(text);
                if let Some(data) = data {
                    set_overview.set(Some(data));
                }
            }
            set_refreshing.set(false);
        });
    };

    let summary = move || {
        overview.with(|data| {
            data.as_ref().and_then(|data| {
                insights_summary(&status_bars(data), &performance_bars(data))
            })
        })
    };

    view! {
        <section class="insights-panel card">
            <div class="panel-header">
                <h2>"🧠 AI Insights"</h2>
                <button
                    class="refresh-button"
                    disabled=move || refreshing.get()
                    on:click=on_refresh
                >
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh Insights" }}
                </button>
            </div>

            <Show
                when=move || !current.get().trim().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"No insights available yet."</p>
                        <p class="muted">"Upload an Excel file to generate AI-powered insights."</p>
                    </div>
                }
            >
                <div class="insights-text" inner_html=move || render_insights(&current.get())></div>
            </Show>

            {move || overview.get().map(|data| {
                let statuses = status_groups(&data);
                let performance = performance_groups(&data);
                let status_chart = (!statuses.is_empty()).then(|| view! {
                    <ChartCard title="Status Breakdown">
                        <BarChart groups=statuses />
                    </ChartCard>
                });
                let performance_chart = (!performance.is_empty()).then(|| view! {
                    <ChartCard title="Completion Rate by Assignee">
                        <BarChart groups=performance unit="%" />
                    </ChartCard>
                });
                view! {
                    <div class="chart-grid">
                        {status_chart}
                        {performance_chart}
                    </div>
                }
            })}

            {move || summary().map(|summary| view! {
                <div class="stat-grid">
                    <StatCard label="Total Tasks" value=summary.total.to_string() icon="📋" accent="accent-blue" />
                    <StatCard label="Completed" value=summary.completed.to_string() icon="✅" accent="accent-green" />
                    <StatCard label="Team Members" value=summary.team_members.to_string() icon="👥" accent="accent-purple" />
                    <StatCard label="Avg Completion" value=format!("{}%", summary.avg_completion) icon="🎯" accent="accent-orange" />
                </div>
            })}
        </section>
    }
}
