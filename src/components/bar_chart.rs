//! Bar Chart Component
//!
//! Grouped vertical bars rendered by `plot::render_bars`.

use leptos::prelude::*;
use log::error;

use crate::charts::BarGroup;
use crate::plot::render_bars;

const WIDTH: u32 = 480;
const HEIGHT: u32 = 260;

/// Legend entry: label and fill
pub type LegendItem = (&'static str, &'static str);

#[component]
pub fn BarChart(
    groups: Vec<BarGroup>,
    #[prop(optional)] legend: Vec<LegendItem>,
    /// Appended to value-axis labels, e.g. `%`
    #[prop(optional)]
    unit: &'static str,
) -> impl IntoView {
    let svg = render_bars(&groups, (WIDTH, HEIGHT), unit).unwrap_or_else(|e| {
        error!("[BarChart] Render failed: {}", e);
        String::new()
    });

    let legend_view = (!legend.is_empty()).then(|| {
        view! {
            <ul class="chart-legend">
                {legend.into_iter().map(|(label, fill)| view! {
                    <li>
                        <span class="legend-swatch" style=format!("background:{}", fill)></span>
                        {label}
                    </li>
                }).collect_view()}
            </ul>
        }
    });

    view! {
        <div class="bar-chart">
            <div class="chart-svg" inner_html=svg></div>
            {legend_view}
        </div>
    }
}
