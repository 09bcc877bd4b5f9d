use leptos::prelude::*;

/// Placeholder shown while the mount sequence runs
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen card">
            <div class="loading-logo">"📊"</div>
            <h3>"Loading Dashboard"</h3>
            <p class="muted">"Crunching numbers and preparing insights..."</p>
            <div class="loading-bar"><div class="loading-bar-fill"></div></div>
            <div class="loading-dots">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}
