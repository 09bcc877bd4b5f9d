use leptos::prelude::*;
use log::error;

use crate::charts::StatusSlice;
use crate::plot::render_pie;

const SIZE: u32 = 300;

/// Status pie with a legend of `"<name> (<pct>%)"` labels
#[component]
pub fn PieChart(slices: Vec<StatusSlice>) -> impl IntoView {
    let svg = render_pie(&slices, SIZE).unwrap_or_else(|e| {
        error!("[PieChart] Render failed: {}", e);
        String::new()
    });

    view! {
        <div class="pie-chart">
            <div class="chart-svg" inner_html=svg></div>
            <ul class="chart-legend">
                {slices.into_iter().map(|slice| view! {
                    <li>
                        <span class="legend-swatch" style=format!("background:{}", slice.fill)></span>
                        {slice.label()}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
