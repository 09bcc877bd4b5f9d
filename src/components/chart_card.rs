use leptos::prelude::*;

/// Titled card wrapping a chart
#[component]
pub fn ChartCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="chart-card card">
            <h3 class="chart-title">{title}</h3>
            <div class="chart-body">{children()}</div>
        </div>
    }
}

/// Headline number with a caption
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(into)] icon: String,
    /// Extra class selecting the accent color
    #[prop(into, optional)]
    accent: String,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", accent)>
            <div class="stat-icon">{icon}</div>
            <div class="stat-text">
                <p class="stat-label">{label}</p>
                <p class="stat-value">{value}</p>
            </div>
        </div>
    }
}
